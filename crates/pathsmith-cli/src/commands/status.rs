//! Status command implementation

use colored::Colorize;
use pathsmith_core::{Context, Probe, Summary, default_probes, run_all};

use crate::error::Result;
use crate::render;

/// Run the status command with the built-in probes
pub async fn run_status(context: &Context, show_concept: bool) -> Result<Summary> {
    run_status_with(&default_probes(), context, show_concept).await
}

/// Run the status command with an explicit probe list
pub async fn run_status_with(
    probes: &[Box<dyn Probe>],
    context: &Context,
    show_concept: bool,
) -> Result<Summary> {
    print_header();

    let mut first = true;
    let summary = run_all(probes, context, |probe, report| {
        if !first {
            println!();
        }
        first = false;

        println!("{}", render::section(probe.title()));
        for detail in &report.details {
            println!("{}", render::detail(detail));
        }
    })
    .await;

    if show_concept {
        println!();
        print_concept();
    }

    print_summary(&summary);
    Ok(summary)
}

fn print_header() {
    let rule = render::rule('=', render::RULE_WIDTH);
    println!("{}", rule);
    println!("🚀 {}", "PATHSMITH - HACKATHON PROJECT DEMO".bold());
    println!("{}", rule);
    println!("Integrating three sponsor tools:");
    println!("📊 Convex - Backend database and real-time sync");
    println!("🤖 Inkeep - Multi-agent AI framework");
    println!("☁️  Daytona - Development environment platform");
    println!("{}", rule);
    println!();
}

const CONCEPT: &[(&str, &[&str])] = &[
    (
        "1. 📊 CONVEX - Real-time Data Layer",
        &[
            "Stores project tasks and progress",
            "Provides real-time sync across team members",
            "Typed client for backend integration",
        ],
    ),
    (
        "2. 🤖 INKEEP - AI Agent Orchestration",
        &[
            "Weather agent for environmental context",
            "Custom agents for project management",
            "Multi-agent workflows for complex tasks",
        ],
    ),
    (
        "3. ☁️  DAYTONA - Development Environment",
        &[
            "Standardized dev environments",
            "Team collaboration platform",
            "Automated workspace provisioning",
        ],
    ),
];

fn print_concept() {
    println!("{}", render::section("PathSmith Integration Concept"));
    println!("🎯 How PathSmith uses all three sponsor tools:");
    println!();
    for (heading, points) in CONCEPT {
        println!("{}", heading.bold());
        for point in *points {
            println!("   • {}", point);
        }
        println!();
    }
    println!("🚀 {}", "PATHSMITH VISION:".bold());
    println!("   An AI-powered project management system that:");
    println!("   • Uses Convex for real-time task synchronization");
    println!("   • Employs Inkeep agents for intelligent assistance");
    println!("   • Leverages Daytona for seamless team development");
}

fn print_summary(summary: &Summary) {
    let rule = render::rule('=', render::RULE_WIDTH);
    println!();
    println!("{}", rule);
    println!("📊 {}", "PATHSMITH SETUP SUMMARY".bold());
    println!("{}", rule);
    for row in &summary.rows {
        println!("{}", render::summary_row(row));
    }
    println!();
    println!("{}", render::headline(summary));
    println!();
    println!("🚀 PathSmith is ready for hackathon development!");
    println!("{}", rule);
}

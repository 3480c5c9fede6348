//! Tasks command implementation

use colored::Colorize;
use pathsmith_core::config::CONVEX_URL_VAR;
use pathsmith_core::{ConvexClient, Settings, Task};

use crate::error::{CliError, Result};
use crate::render;

/// List the tasks stored in the configured Convex deployment.
///
/// Unlike `status`, a missing deployment URL or a failed query is an error.
pub async fn run_tasks(settings: &Settings) -> Result<Vec<Task>> {
    let url = settings.convex_url.as_deref().ok_or_else(|| {
        CliError::user(format!(
            "{} is not set. Run 'npx convex dev' or pass --convex-url.",
            CONVEX_URL_VAR
        ))
    })?;

    println!("Connecting to Convex at: {}", url.cyan());

    let client = ConvexClient::new(url)?;
    let tasks = client.tasks().await?;

    println!();
    println!("{}", "=== PathSmith Tasks from Convex ===".bold());
    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {} {}", i + 1, render::marker(task.is_completed), task.text);
    }

    println!();
    println!("Total tasks: {}", tasks.len());
    println!("{}", "Convex integration successful! 🎉".green());

    Ok(tasks)
}

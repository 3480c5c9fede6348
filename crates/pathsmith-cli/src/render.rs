//! Console formatting for probe output

use colored::Colorize;
use pathsmith_core::{Detail, Summary, SummaryRow};

/// Width of the banner and summary rules
pub const RULE_WIDTH: usize = 60;

pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Heading printed above a probe's details
pub fn section(title: &str) -> String {
    format!(
        "{} {}\n{}",
        "🔹".cyan(),
        title.to_uppercase().bold(),
        rule('-', 30)
    )
}

/// Marker for a completed/present entry
pub fn marker(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

pub fn detail(detail: &Detail) -> String {
    match detail {
        Detail::Info(text) => format!("   {}", text),
        Detail::Success(text) => format!("{} {}", marker(true), text.green()),
        Detail::Warning(text) => format!("{}  {}", "⚠️", text.yellow()),
        Detail::Failure(text) => format!("{} {}", marker(false), text.red()),
        Detail::Hint(text) => format!("💡 {}", text.dimmed()),
        Detail::Item { ok, text } => format!("   {} {}", marker(*ok), text),
    }
}

pub fn summary_row(row: &SummaryRow) -> String {
    let label = format!("{}:", row.label);
    let status = if row.ready {
        format!("{} {}", marker(true), row.status.green())
    } else {
        format!("{} {}", marker(false), row.status.red())
    };
    format!("{:<20}{}", label, status)
}

pub fn headline(summary: &Summary) -> String {
    if summary.all_ready() {
        format!("🎉 {}", summary.headline().green().bold())
    } else {
        format!("{}  {}", "⚠️", summary.headline().yellow())
    }
}

//! Inkeep agent-framework probe

use crate::context::Context;
use crate::error::Result;
use crate::probe::{Probe, ProbeReport};
use crate::tool::{ToolCommand, ToolOutcome};
use async_trait::async_trait;

/// Directory holding the Inkeep agents project
pub const AGENTS_DIR: &str = "inkeep-agents";

/// Files listed when the agents project is present
pub const KEY_FILES: &[&str] = &[
    "inkeep-agents/src/default/weather.graph.ts",
    "inkeep-agents/src/default/inkeep.config.ts",
    "inkeep-agents/package.json",
];

/// Probe for the Inkeep agents project and CLI.
///
/// Readiness depends only on the `inkeep-agents` path existing. Key files are listed for
/// information, and a missing or slow CLI is reported as a warning.
pub struct InkeepProbe {
    cli: ToolCommand,
}

impl InkeepProbe {
    pub fn new() -> Self {
        Self::with_cli(ToolCommand::new("inkeep", ["--version"]))
    }

    /// Use a different version-check command
    pub fn with_cli(cli: ToolCommand) -> Self {
        Self { cli }
    }
}

impl Default for InkeepProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for InkeepProbe {
    fn id(&self) -> &str {
        "inkeep"
    }

    fn title(&self) -> &str {
        "Inkeep Agents"
    }

    fn summary_label(&self) -> &str {
        "Inkeep Agents"
    }

    fn ready_label(&self) -> &str {
        "Ready"
    }

    async fn check(&self, context: &Context) -> Result<ProbeReport> {
        if !context.resolve(AGENTS_DIR).exists() {
            return Ok(ProbeReport::not_ready("Inkeep agents not found"));
        }

        let mut report = ProbeReport::ready();
        report.info("Inkeep agents project structure:");
        for file in KEY_FILES {
            report.item(context.resolve(file).exists(), *file);
        }

        match self.cli.run(context.tool_timeout).await {
            ToolOutcome::Version(version) => {
                report.info(format!("Inkeep CLI version: {}", version));
                report.success("Inkeep agents framework ready!");
            }
            ToolOutcome::Failed { code, .. } => {
                tracing::debug!(?code, "Inkeep CLI exited unsuccessfully");
                report.warning("Inkeep CLI available but may need configuration");
            }
            ToolOutcome::NotFound | ToolOutcome::TimedOut => {
                report.warning("Inkeep CLI not in PATH, but agents project exists");
            }
        }

        Ok(report)
    }
}

//! Daytona dev-environment probe

use crate::config::DAYTONA_API_KEY_VAR;
use crate::context::Context;
use crate::error::Result;
use crate::probe::{Probe, ProbeReport};
use crate::tool::{ToolCommand, ToolOutcome};
use async_trait::async_trait;

/// Install command suggested when the Daytona CLI is unavailable
pub const INSTALL_HINT: &str =
    "Install with: curl -fsSL https://download.daytona.io/daytona/install.sh | bash";

/// Probe for Daytona credentials and CLI.
///
/// Ready whenever an API key is configured; the CLI check is informational.
pub struct DaytonaProbe {
    cli: ToolCommand,
}

impl DaytonaProbe {
    pub fn new() -> Self {
        Self::with_cli(ToolCommand::new("daytona", ["version"]))
    }

    /// Use a different version-check command
    pub fn with_cli(cli: ToolCommand) -> Self {
        Self { cli }
    }
}

impl Default for DaytonaProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for DaytonaProbe {
    fn id(&self) -> &str {
        "daytona"
    }

    fn title(&self) -> &str {
        "Daytona Integration"
    }

    fn summary_label(&self) -> &str {
        "Daytona Platform"
    }

    fn ready_label(&self) -> &str {
        "Configured"
    }

    async fn check(&self, context: &Context) -> Result<ProbeReport> {
        let Some(masked_key) = context.settings.masked_api_key() else {
            let mut report = ProbeReport::not_ready("Daytona API key not found in environment");
            report.hint(format!("Set {} to enable Daytona.", DAYTONA_API_KEY_VAR));
            return Ok(report);
        };

        let mut report = ProbeReport::ready();
        report.info(format!("Daytona API Key: {}", masked_key));
        report.info(format!(
            "Daytona API URL: {}",
            context
                .settings
                .daytona_api_url
                .as_deref()
                .unwrap_or("(not set)")
        ));

        match self.cli.run(context.tool_timeout).await {
            ToolOutcome::Version(version) => {
                report.info(format!("Daytona CLI: {}", version));
                report.success("Daytona integration ready!");
            }
            ToolOutcome::Failed { code, stderr } => {
                tracing::debug!(?code, %stderr, "Daytona CLI exited unsuccessfully");
                report.warning("Daytona CLI returned an error, but API credentials configured");
            }
            ToolOutcome::NotFound | ToolOutcome::TimedOut => {
                report.warning("Daytona CLI not installed, but API credentials configured");
                report.hint(INSTALL_HINT);
            }
        }

        Ok(report)
    }
}

//! Convex data-layer probe

use crate::config::CONVEX_URL_VAR;
use crate::context::Context;
use crate::convex::{ConvexClient, Task};
use crate::error::Result;
use crate::probe::{Probe, ProbeReport};
use async_trait::async_trait;

/// Probe that lists the project tasks from the Convex deployment.
///
/// Not ready when `CONVEX_URL` is unset or the query fails; in the first case
/// no request is made.
pub struct ConvexProbe;

impl ConvexProbe {
    pub fn new() -> Self {
        Self
    }

    fn record_tasks(report: &mut ProbeReport, tasks: &[Task]) {
        report.info(format!(
            "Retrieved {} tasks from Convex database:",
            tasks.len()
        ));
        for (i, task) in tasks.iter().enumerate() {
            report.item(task.is_completed, format!("{}. {}", i + 1, task.text));
        }
    }
}

impl Default for ConvexProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for ConvexProbe {
    fn id(&self) -> &str {
        "convex"
    }

    fn title(&self) -> &str {
        "Convex Integration"
    }

    fn summary_label(&self) -> &str {
        "Convex Backend"
    }

    fn ready_label(&self) -> &str {
        "Working"
    }

    async fn check(&self, context: &Context) -> Result<ProbeReport> {
        let Some(url) = context.settings.convex_url.as_deref() else {
            let mut report = ProbeReport::not_ready("Convex not configured.");
            report.hint(format!(
                "Set {} or run 'npx convex dev' first.",
                CONVEX_URL_VAR
            ));
            return Ok(report);
        };

        let mut report = ProbeReport::ready();
        report.info(format!("Connected to: {}", url));

        let tasks = match ConvexClient::with_timeout(url, context.query_timeout) {
            Ok(client) => client.tasks().await,
            Err(err) => Err(err),
        };

        match tasks {
            Ok(tasks) => {
                Self::record_tasks(&mut report, &tasks);
                report.success("Convex integration working!");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Convex query failed");
                report.ready = false;
                report.failure(format!("Convex error: {}", err));
            }
        }

        Ok(report)
    }
}

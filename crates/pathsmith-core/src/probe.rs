//! Probe trait and related types

use crate::Result;
use crate::context::Context;
use async_trait::async_trait;

/// One line of probe output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Neutral information
    Info(String),
    /// Something worked
    Success(String),
    /// Soft problem that does not affect readiness
    Warning(String),
    /// Problem that makes the probe not ready
    Failure(String),
    /// Hint on how to fix a problem
    Hint(String),
    /// Checklist entry with a present/done marker
    Item { ok: bool, text: String },
}

impl Detail {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(t)
            | Self::Success(t)
            | Self::Warning(t)
            | Self::Failure(t)
            | Self::Hint(t)
            | Self::Item { text: t, .. } => t,
        }
    }
}

/// Report from running a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub ready: bool,
    pub details: Vec<Detail>,
}

impl ProbeReport {
    pub fn ready() -> Self {
        Self {
            ready: true,
            details: vec![],
        }
    }

    pub fn not_ready(detail: impl Into<String>) -> Self {
        Self {
            ready: false,
            details: vec![Detail::Failure(detail.into())],
        }
    }

    pub fn push(&mut self, detail: Detail) -> &mut Self {
        self.details.push(detail);
        self
    }

    pub fn info(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Info(text.into()))
    }

    pub fn success(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Success(text.into()))
    }

    pub fn warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Warning(text.into()))
    }

    pub fn failure(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Failure(text.into()))
    }

    pub fn hint(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Hint(text.into()))
    }

    pub fn item(&mut self, ok: bool, text: impl Into<String>) -> &mut Self {
        self.push(Detail::Item {
            ok,
            text: text.into(),
        })
    }

    /// Checklist entries in the order they were recorded
    pub fn items(&self) -> impl Iterator<Item = (bool, &str)> {
        self.details.iter().filter_map(|d| match d {
            Detail::Item { ok, text } => Some((*ok, text.as_str())),
            _ => None,
        })
    }

    /// Whether any detail line contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.details.iter().any(|d| d.text().contains(needle))
    }
}

/// Core trait for integration probes
#[async_trait]
pub trait Probe: Send + Sync {
    /// Stable identifier, e.g. `"convex"`
    fn id(&self) -> &str;

    /// Section heading shown above the probe output
    fn title(&self) -> &str;

    /// Row label in the summary table
    fn summary_label(&self) -> &str;

    /// Word shown in the summary when the probe is ready
    fn ready_label(&self) -> &str;

    async fn check(&self, context: &Context) -> Result<ProbeReport>;
}

/// Run a probe, folding an unexpected error into a not-ready report
pub async fn run_probe(probe: &dyn Probe, context: &Context) -> ProbeReport {
    match probe.check(context).await {
        Ok(report) => {
            tracing::debug!(probe = probe.id(), ready = report.ready, "probe finished");
            report
        }
        Err(err) => {
            tracing::warn!(probe = probe.id(), error = %err, "probe failed");
            ProbeReport::not_ready(format!("{} probe failed: {}", probe.title(), err))
        }
    }
}

//! Aggregation of probe results into the final summary

use crate::context::Context;
use crate::probe::{Probe, ProbeReport, run_probe};

/// Headline printed when every integration is ready
pub const ALL_READY_MESSAGE: &str = "ALL SPONSOR TOOLS SUCCESSFULLY INTEGRATED!";
/// Headline printed when at least one integration needs work
pub const NEEDS_SETUP_MESSAGE: &str = "Some tools need additional setup - see messages above";
/// Summary word for a probe that is not ready
pub const NEEDS_SETUP_LABEL: &str = "Needs Setup";

/// One summary row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub ready: bool,
    pub status: String,
}

/// Readiness of every probe in a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    /// Record the outcome of one probe
    pub fn record(&mut self, probe: &dyn Probe, report: &ProbeReport) {
        let status = if report.ready {
            probe.ready_label()
        } else {
            NEEDS_SETUP_LABEL
        };
        self.rows.push(SummaryRow {
            label: probe.summary_label().to_string(),
            ready: report.ready,
            status: status.to_string(),
        });
    }

    /// True only if at least one probe ran and every probe is ready
    pub fn all_ready(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.ready)
    }

    /// The overall headline for this run
    pub fn headline(&self) -> &'static str {
        if self.all_ready() {
            ALL_READY_MESSAGE
        } else {
            NEEDS_SETUP_MESSAGE
        }
    }
}

/// Run each probe in turn, handing every report to `on_report` as soon as it
/// is available. One probe's failure never stops the next.
pub async fn run_all<F>(probes: &[Box<dyn Probe>], context: &Context, mut on_report: F) -> Summary
where
    F: FnMut(&dyn Probe, &ProbeReport),
{
    let mut summary = Summary::default();
    for probe in probes {
        let report = run_probe(probe.as_ref(), context).await;
        on_report(probe.as_ref(), &report);
        summary.record(probe.as_ref(), &report);
    }
    summary
}

//! Integration probes for the PathSmith sponsor tools.
//!
//! This crate checks whether the three external integrations used by
//! PathSmith are usable from the current project:
//!
//! - Convex, the data layer, through one read query
//! - Inkeep, the agent framework, through project files and its CLI
//! - Daytona, the dev-environment platform, through credentials and its CLI
//!
//! Every probe yields a [`ProbeReport`]; failures are soft and never stop
//! the remaining probes.

pub mod config;
pub mod context;
pub mod convex;
pub mod error;
pub mod probe;
pub mod probes;
pub mod summary;
pub mod tool;

pub use config::{DotenvReport, Settings, load_dotenv};
pub use context::Context;
pub use convex::{ConvexClient, Task};
pub use error::{Error, Result};
pub use probe::{Detail, Probe, ProbeReport, run_probe};
pub use probes::{ConvexProbe, DaytonaProbe, InkeepProbe, default_probes};
pub use summary::{Summary, SummaryRow, run_all};
pub use tool::{ToolCommand, ToolOutcome};

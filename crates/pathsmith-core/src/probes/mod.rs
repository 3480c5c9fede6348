//! Built-in probes for the three sponsor integrations

pub mod convex;
pub mod daytona;
pub mod inkeep;

pub use convex::ConvexProbe;
pub use daytona::DaytonaProbe;
pub use inkeep::InkeepProbe;

use crate::probe::Probe;

/// The probes in report order: data layer, agent framework, dev environment
pub fn default_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(ConvexProbe::new()),
        Box::new(InkeepProbe::new()),
        Box::new(DaytonaProbe::new()),
    ]
}

//! Command implementations for pathsmith-cli

pub mod status;
pub mod tasks;

pub use status::run_status;
pub use tasks::run_tasks;

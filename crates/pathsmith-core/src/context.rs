//! Execution context for integration probes

use crate::config::Settings;
use crate::convex::DEFAULT_QUERY_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default bound on external version-check commands
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(5);

/// Context passed to every probe
#[derive(Debug, Clone)]
pub struct Context {
    /// Project root that relative paths are resolved against
    pub root: PathBuf,
    pub settings: Settings,
    /// Upper bound on each external command invocation
    pub tool_timeout: Duration,
    /// Upper bound on each Convex query
    pub query_timeout: Duration,
}

impl Context {
    pub fn new(root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            root: root.into(),
            settings,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the external command timeout
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Override the Convex query timeout
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Resolve a project-relative path against the root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

//! Bounded invocation of external version-check commands

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// An external command used to detect a CLI and read its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Result of running a [`ToolCommand`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Exited successfully; holds trimmed stdout
    Version(String),
    /// Ran but exited unsuccessfully
    Failed { code: Option<i32>, stderr: String },
    /// Could not be spawned
    NotFound,
    /// Did not finish within the timeout and was killed
    TimedOut,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the command line for display
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command, waiting at most `timeout` for it to exit.
    ///
    /// Spawn failures map to [`ToolOutcome::NotFound`]; the child is killed
    /// when the timeout elapses.
    pub async fn run(&self, timeout: Duration) -> ToolOutcome {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(err) => {
                tracing::debug!(command = %self.display(), error = %err, "failed to spawn");
                return ToolOutcome::NotFound;
            }
        };

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => {
                ToolOutcome::Version(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(Ok(output)) => ToolOutcome::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            },
            Ok(Err(err)) => ToolOutcome::Failed {
                code: None,
                stderr: err.to_string(),
            },
            Err(_) => {
                tracing::debug!(command = %self.display(), ?timeout, "timed out");
                ToolOutcome::TimedOut
            }
        }
    }
}

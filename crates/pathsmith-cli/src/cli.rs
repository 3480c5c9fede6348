//! CLI argument parsing using clap derive

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pathsmith_core::config::{CONVEX_URL_VAR, DAYTONA_API_KEY_VAR, DAYTONA_API_URL_VAR};
use pathsmith_core::{Context, Settings};

/// PathSmith - check the Convex, Inkeep and Daytona integrations
///
/// Settings are read from flags, the environment, `.env.local` and `../.env`,
/// in that order of precedence. Both dotenv files are looked up relative to
/// `--root`.
#[derive(Parser, Debug)]
#[command(name = "pathsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root used for file checks and for locating `.env.local` and `../.env`
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Timeout for external CLI version checks, in seconds
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = 5)]
    pub timeout: u64,

    /// Convex deployment URL
    #[arg(long, global = true, env = CONVEX_URL_VAR)]
    pub convex_url: Option<String>,

    /// Daytona API key
    #[arg(long, global = true, env = DAYTONA_API_KEY_VAR, hide_env_values = true)]
    pub daytona_api_key: Option<String>,

    /// Daytona API base URL
    #[arg(long, global = true, env = DAYTONA_API_URL_VAR)]
    pub daytona_api_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Probe every integration and print a setup summary (default)
    Status {
        /// Skip the integration concept overview
        #[arg(long)]
        no_concept: bool,
    },

    /// List the tasks stored in Convex
    Tasks,
}

impl Cli {
    /// Settings assembled from flags and environment.
    ///
    /// Values clap saw win, even when empty. Anything still unset is read
    /// from the process environment, which by then includes dotenv values.
    pub fn settings(&self) -> Settings {
        let env = Settings::from_env();
        Settings::new(
            self.convex_url.clone().or(env.convex_url),
            self.daytona_api_key.clone().or(env.daytona_api_key),
            self.daytona_api_url.clone().or(env.daytona_api_url),
        )
    }

    /// Probe context for this invocation
    pub fn context(&self) -> Context {
        Context::new(self.root.clone(), self.settings())
            .with_tool_timeout(Duration::from_secs(self.timeout))
    }
}

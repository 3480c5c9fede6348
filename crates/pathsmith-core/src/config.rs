//! Settings for the integration probes
//!
//! Settings are read once at startup, either from the process environment or
//! from explicit values supplied by the CLI, and stay immutable for the run.

use std::path::{Path, PathBuf};

/// Environment variable holding the Convex deployment URL
pub const CONVEX_URL_VAR: &str = "CONVEX_URL";
/// Environment variable holding the Daytona API key
pub const DAYTONA_API_KEY_VAR: &str = "DAYTONA_API_KEY";
/// Environment variable holding the Daytona API base URL
pub const DAYTONA_API_URL_VAR: &str = "DAYTONA_API_URL";

/// Dotenv files consulted before the environment is read, relative to the
/// project root. Earlier files win because values are never overridden.
pub const DOTENV_FILES: &[&str] = &[".env.local", "../.env"];

/// Number of API key characters shown before the key is elided
const VISIBLE_KEY_CHARS: usize = 20;

/// Immutable configuration shared by all probes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Convex deployment URL
    pub convex_url: Option<String>,
    /// Daytona API key
    pub daytona_api_key: Option<String>,
    /// Daytona API base URL
    pub daytona_api_url: Option<String>,
}

impl Settings {
    /// Build settings from explicit values. Empty strings count as unset.
    pub fn new(
        convex_url: Option<String>,
        daytona_api_key: Option<String>,
        daytona_api_url: Option<String>,
    ) -> Self {
        Self {
            convex_url: non_empty(convex_url),
            daytona_api_key: non_empty(daytona_api_key),
            daytona_api_url: non_empty(daytona_api_url),
        }
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(CONVEX_URL_VAR),
            lookup(DAYTONA_API_KEY_VAR),
            lookup(DAYTONA_API_URL_VAR),
        )
    }

    /// The Daytona API key with everything after the first 20 characters elided
    pub fn masked_api_key(&self) -> Option<String> {
        self.daytona_api_key.as_deref().map(mask_secret)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(VISIBLE_KEY_CHARS).collect();
    format!("{}...", visible)
}

/// Outcome of loading the dotenv files
#[derive(Debug, Default)]
pub struct DotenvReport {
    /// Files that were found and loaded
    pub loaded: Vec<PathBuf>,
    /// Files that exist but could not be parsed
    pub warnings: Vec<String>,
}

/// Load [`DOTENV_FILES`] relative to `base` into the process environment.
///
/// Missing files are skipped silently. Variables already present in the
/// environment are left untouched.
pub fn load_dotenv(base: &Path) -> DotenvReport {
    let mut report = DotenvReport::default();

    for file in DOTENV_FILES {
        let path = base.join(file);
        match dotenvy::from_path(&path) {
            Ok(()) => report.loaded.push(path),
            Err(err) if err.not_found() => {}
            Err(err) => report
                .warnings
                .push(format!("failed to load {}: {}", path.display(), err)),
        }
    }

    report
}

//! Error types for pathsmith-core

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Query {path} failed: {message}")]
    QueryFailed { path: String, message: String },

    #[error("Query {path} returned HTTP {status}: {body}")]
    HttpStatus {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid deployment URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{var} is not set")]
    NotConfigured { var: &'static str },
}

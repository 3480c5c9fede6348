//! Minimal client for the Convex HTTP query API
//!
//! Only read-style queries are supported. A query is a `POST` to
//! `{deployment}/api/query` whose JSON envelope reports either
//! `status: "success"` with a `value`, or `status: "error"` with an
//! `errorMessage`.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Query that lists the project tasks
pub const TASKS_QUERY: &str = "tasks:get";

/// Upper bound on a whole query, connect included
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Characters of an error response body kept in [`Error::HttpStatus`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// A task document as stored in the `tasks` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Task {
    pub fn new(text: impl Into<String>, is_completed: bool) -> Self {
        Self {
            text: text.into(),
            is_completed,
            id: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    path: &'a str,
    args: &'a Value,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum QueryResponse {
    Success {
        value: Value,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

/// HTTP client bound to one Convex deployment
#[derive(Debug, Clone)]
pub struct ConvexClient {
    deployment_url: String,
    http: reqwest::Client,
}

impl ConvexClient {
    /// Create a client for the given deployment URL
    pub fn new(deployment_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(deployment_url, DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(deployment_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let deployment_url = deployment_url.into();
        let trimmed = deployment_url.trim().trim_end_matches('/').to_string();

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::InvalidUrl {
                url: deployment_url,
                message: "expected an http:// or https:// URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("pathsmith/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            deployment_url: trimmed,
            http,
        })
    }

    /// The deployment URL this client talks to
    pub fn deployment_url(&self) -> &str {
        &self.deployment_url
    }

    /// Run a query with no arguments
    pub async fn query<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.query_with_args(path, &Value::Object(Default::default()))
            .await
    }

    /// Run a query and decode its value into `T`
    pub async fn query_with_args<T: DeserializeOwned>(&self, path: &str, args: &Value) -> Result<T> {
        let url = format!("{}/api/query", self.deployment_url);
        tracing::debug!(%url, path, "running Convex query");

        let response = self
            .http
            .post(&url)
            .json(&QueryRequest {
                path,
                args,
                format: "json",
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        match serde_json::from_str::<QueryResponse>(&body)? {
            QueryResponse::Success { value } => Ok(serde_json::from_value(value)?),
            QueryResponse::Error { error_message } => Err(Error::QueryFailed {
                path: path.to_string(),
                message: error_message,
            }),
        }
    }

    /// Fetch all tasks through [`TASKS_QUERY`]
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        self.query(TASKS_QUERY).await
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{}...", head)
}

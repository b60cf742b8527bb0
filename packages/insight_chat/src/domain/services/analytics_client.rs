//! HTTP client for the analytics backend.
//!
//! The backend turns a natural-language question into SQL, executes it and
//! returns a `QueryResult` as JSON. The client's job is transport only: it
//! performs no validation of the row shape (bad shapes surface later, at
//! selection time) and it never raises - every failure path is folded into
//! an error-flavored `QueryResult`, so downstream code has no
//! network-failure branches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::errors::{AnalyticsError, AnalyticsResult};
use crate::domain::models::QueryResult;

/// The seam between the conversation service and the network. Infallible
/// by contract; implementations report failures inside the result itself.
#[async_trait]
pub trait AnalyticsBackend: Send + Sync {
    async fn ask(&self, query: &str) -> QueryResult;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<String>,
}

/// Talks to the real backend over `POST {endpoint}` with `{"query": ...}`.
pub struct HttpAnalyticsClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpAnalyticsClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The fallible transport path. A non-2xx status becomes
    /// `AnalyticsError::Backend` with the message from the body's `error`
    /// field when present, else one synthesized from the status code.
    async fn try_ask(&self, query: &str) -> AnalyticsResult<QueryResult> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&AskRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<BackendErrorBody>(&body).ok())
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(AnalyticsError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let result = serde_json::from_str::<QueryResult>(&body)?;
        Ok(result)
    }
}

#[async_trait]
impl AnalyticsBackend for HttpAnalyticsClient {
    async fn ask(&self, query: &str) -> QueryResult {
        debug!(%query, "sending query to analytics backend");
        match self.try_ask(query).await {
            Ok(result) => {
                debug!(rows = result.rows.len(), hint = result.visualization_hint.as_tag(),
                    "backend answered");
                result
            }
            Err(AnalyticsError::Backend { status, message }) => {
                warn!(status, %message, "analytics backend reported an error");
                QueryResult::backend_error(query, message)
            }
            Err(err) => {
                warn!(error = %err, "could not reach the analytics backend");
                QueryResult::connection_error(query, err.to_string())
            }
        }
    }
}

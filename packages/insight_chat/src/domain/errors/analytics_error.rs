use thiserror::Error;

/// Failures the analytics client can hit while talking to the backend.
/// These never escape the client: `ask` converts every variant into an
/// error-flavored `QueryResult`.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("could not reach the analytics backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend response could not be decoded: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

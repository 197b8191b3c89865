use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(error) if error.is_timeout())
    }
}

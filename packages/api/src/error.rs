//! Errors returned by the estimation client.

use thiserror::Error;

/// Why an estimate request failed.
///
/// The UI reports every variant with the same message; the variant and its
/// detail only go to the log.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

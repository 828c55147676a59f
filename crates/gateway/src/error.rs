//! Error types for the gateway crate

use thiserror::Error;

/// Errors surfaced by gateway adapters.
///
/// The strategy engine never matches on these beyond logging them; they
/// exist so the adapter can propagate with `?` internally and so the
/// runner can refuse to start on construction failures.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("exchange returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid order request: {0}")]
    InvalidRequest(String),

    #[error("request signing failed: {0}")]
    Signing(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

//! Failure surface of the host seam.
//!
//! The pure extraction passes never fail; degraded inputs (missing elements,
//! absent selection, unmatched selectors) produce empty or default values
//! instead. The only real failures happen while talking to a host page.

use thiserror::Error;

/// Error raised while materializing or mutating a host page.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The host failed to evaluate a script or answer a protocol call.
    #[error("host evaluation failed: {0}")]
    Evaluate(String),

    /// The host answered with a payload the capture types could not decode.
    #[error("undecodable capture payload: {0}")]
    Decode(#[from] serde_json::Error),
}

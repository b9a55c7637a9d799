//! Coordinator wire contract, shape only.
//!
//! The Coordinator drives a live two-presenter classroom session and
//! receives snapshots as JSON POSTed to `/session/{id}/section`. This
//! module pins down the path and endpoint shapes; transport, auth, retries,
//! and response handling are entirely the caller's.

use url::Url;

/// Relative path a session's snapshots are POSTed to.
pub fn section_path(session_id: &str) -> String {
    format!("/session/{session_id}/section")
}

/// Absolute section endpoint for a Coordinator base URL.
pub fn section_endpoint(base: &Url, session_id: &str) -> Result<Url, url::ParseError> {
    base.join(&section_path(session_id))
}

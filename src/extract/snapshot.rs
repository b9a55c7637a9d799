//! Section snapshot assembly.

use crate::extract::{digest, scroll, text};
use crate::host::PageCapture;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The composite payload describing a page's visible state at one instant.
///
/// Serializes with exactly the field names the Coordinator expects; every
/// field is always present (`visibleText` may be empty, never absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSnapshot {
    pub url: String,
    pub scroll_y: f64,
    pub scroll_x: f64,
    pub visible_text: String,
    pub selected_text: String,
    pub dom_digest: String,
    /// ISO-8601 UTC, millisecond precision, captured at assembly time.
    pub timestamp: String,
}

/// Assemble a snapshot from a capture: URL, resolved scroll offsets, visible
/// text, trimmed selection, a digest of the visible text, and a timestamp.
/// Infallible; two assemblies over the same capture differ only in
/// `timestamp`.
pub fn extract_section_snapshot(capture: &PageCapture) -> SectionSnapshot {
    let (scroll_x, scroll_y) = scroll::resolve(&capture.scroll);
    let visible_text = text::collect_visible_text(&capture.dom);
    let dom_digest = digest::digest(&visible_text);
    SectionSnapshot {
        url: capture.url.clone(),
        scroll_y,
        scroll_x,
        visible_text,
        selected_text: selected_text(capture),
        dom_digest,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// The host's active text selection in trimmed form, empty when there is
/// none. Purely observational.
pub fn selected_text(capture: &PageCapture) -> String {
    capture
        .selection
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

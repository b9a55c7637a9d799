//! The seam to the host page.
//!
//! A Rust process is not loaded *into* a document the way a script is; the
//! equivalent is a [`HostPage`] that materializes the live page into one
//! [`PageCapture`] value per call and accepts the highlighter's outline
//! mutations. Extraction itself never touches the host — it runs over the
//! capture, synchronously.

pub mod cdp;
pub mod fixture;

use crate::dom::DomNode;
use crate::error::CaptureError;
use crate::extract::snapshot::{extract_section_snapshot, SectionSnapshot};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A host page's state, materialized at one instant.
///
/// Captures are plain values: no references back into the document, nothing
/// retained between calls. Layout can change between captures, so nothing
/// here is ever cached by the extraction passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCapture {
    /// The document's current URL.
    pub url: String,
    #[serde(default)]
    pub scroll: ScrollSource,
    /// The active text selection, untrimmed, when one exists.
    #[serde(default)]
    pub selection: Option<String>,
    /// The DOM tree rooted at the document body.
    pub dom: DomNode,
}

/// Scroll offsets as `(x, y)` pairs from the two sources hosts expose; the
/// primary viewport pair is preferred, the page-offset pair is the portable
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollSource {
    pub viewport: Option<(f64, f64)>,
    pub page_offset: Option<(f64, f64)>,
}

/// Async seam to a live (or static) document.
#[async_trait]
pub trait HostPage: Send + Sync {
    /// Materialize the page's current state for extraction.
    async fn capture(&self) -> Result<PageCapture, CaptureError>;

    /// Outline the first element matching `selector` with the highlight
    /// style. Returns `false` when nothing matches (not an error).
    async fn apply_outline(&self, selector: &str) -> Result<bool, CaptureError>;

    /// Remove a previously applied outline. A vanished element is a no-op.
    async fn clear_outline(&self, selector: &str) -> Result<(), CaptureError>;
}

/// Capture the page and assemble a snapshot in one call — the shape in
/// which the extractor is actually invoked by session tooling.
pub async fn snapshot_page(page: &dyn HostPage) -> Result<SectionSnapshot, CaptureError> {
    let capture = page.capture().await?;
    Ok(extract_section_snapshot(&capture))
}

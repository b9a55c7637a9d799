//! Section snapshot extraction for live two-presenter classroom sessions.
//!
//! Extracts a point-in-time snapshot of a webpage's visible state — visible
//! text, scroll offsets, the active text selection, a content digest, and
//! visible code blocks — for delivery to the session Coordinator. The crate
//! is a single-shot data-extraction utility, not a rendering engine, cache,
//! or network client: it reads the page the host hands it and returns plain
//! values.
//!
//! The callable surface is three operations plus the host seam:
//!
//! - [`extract_section_snapshot`] assembles one [`SectionSnapshot`] from a
//!   [`PageCapture`] (or use [`snapshot_page`] to capture and assemble in
//!   one call).
//! - [`extract_code_blocks`] lists the visible `pre`/`code` elements with
//!   inferred languages and re-locator selectors.
//! - [`highlight_element`] outlines an element for a few seconds and
//!   reverts itself, returning a handle for early revert or cancellation.
//!
//! Pages are reached through [`HostPage`]: [`host::cdp::CdpPage`] drives a
//! real browser page over DevTools, [`host::fixture::StaticPage`] serves
//! markup-only callers and tests.

pub mod coordinator;
pub mod dom;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod host;

pub use error::CaptureError;
pub use extract::code_blocks::{extract_code_blocks, CodeBlock};
pub use extract::snapshot::{extract_section_snapshot, SectionSnapshot};
pub use highlight::{highlight_element, HighlightHandle};
pub use host::{snapshot_page, HostPage, PageCapture, ScrollSource};

use tracing::info;

/// Announce readiness the way the in-page predecessor did at load time.
/// Subscriber installation is the embedding application's concern.
pub fn init() {
    info!("section snapshot extractor loaded");
    info!("usage: snapshot_page() for snapshots, extract_code_blocks() for code, highlight_element() to point");
}

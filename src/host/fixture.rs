//! Static host page parsed from markup.
//!
//! For tests and for headless callers that only hold an HTML string: style
//! and geometry are synthesized by [`crate::dom::inline`], selection and
//! scroll are whatever the builder was given, and outlines are tracked as a
//! plain selector set. `scraper::Html` is not `Send`, so the page keeps the
//! markup string and re-parses on every call; visibility is recomputed per
//! capture as required.

use crate::dom::inline::dom_from_html;
use crate::error::CaptureError;
use crate::host::{HostPage, PageCapture, ScrollSource};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tokio::sync::Mutex;
use tracing::warn;

/// An in-memory page over a fixed piece of markup.
pub struct StaticPage {
    html: String,
    url: String,
    selection: Option<String>,
    scroll: ScrollSource,
    outlined: Mutex<HashSet<String>>,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            url: "about:blank".to_string(),
            selection: None,
            scroll: ScrollSource::default(),
            outlined: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollSource) -> Self {
        self.scroll = scroll;
        self
    }

    /// Materialize a capture synchronously; same result as going through
    /// [`HostPage::capture`], without needing a runtime.
    pub fn capture_now(&self) -> PageCapture {
        PageCapture {
            url: self.url.clone(),
            scroll: self.scroll,
            selection: self.selection.clone(),
            dom: dom_from_html(&self.html),
        }
    }

    /// Whether an outline is currently applied under `selector`.
    pub async fn is_outlined(&self, selector: &str) -> bool {
        self.outlined.lock().await.contains(selector)
    }

    fn matches(&self, selector: &str) -> bool {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(selector, error = %e, "unparseable selector, treating as no match");
                return false;
            }
        };
        Html::parse_document(&self.html).select(&parsed).next().is_some()
    }
}

#[async_trait]
impl HostPage for StaticPage {
    async fn capture(&self) -> Result<PageCapture, CaptureError> {
        Ok(self.capture_now())
    }

    async fn apply_outline(&self, selector: &str) -> Result<bool, CaptureError> {
        if !self.matches(selector) {
            return Ok(false);
        }
        self.outlined.lock().await.insert(selector.to_string());
        Ok(true)
    }

    async fn clear_outline(&self, selector: &str) -> Result<(), CaptureError> {
        self.outlined.lock().await.remove(selector);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::snapshot_page;

    #[tokio::test]
    async fn test_snapshot_page_over_markup() {
        let page = StaticPage::new(r#"<h1>Lesson</h1><p style="display:none">notes</p>"#)
            .with_url("https://slides.example/lesson")
            .with_selection("  Lesson ");
        let snap = snapshot_page(&page).await.unwrap();
        assert_eq!(snap.url, "https://slides.example/lesson");
        assert_eq!(snap.visible_text, "Lesson");
        assert_eq!(snap.selected_text, "Lesson");
    }

    #[tokio::test]
    async fn test_captures_are_deterministic() {
        let page = StaticPage::new("<p>one</p><p>two</p>");
        let a = page.capture().await.unwrap();
        let b = page.capture().await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_outline_lifecycle() {
        let page = StaticPage::new(r#"<pre id="ex">code</pre>"#);
        assert!(page.apply_outline("#ex").await.unwrap());
        assert!(page.is_outlined("#ex").await);
        page.clear_outline("#ex").await.unwrap();
        assert!(!page.is_outlined("#ex").await);
        // clearing again tolerates the outline being gone
        page.clear_outline("#ex").await.unwrap();
    }

    #[tokio::test]
    async fn test_unmatched_and_invalid_selectors_do_not_outline() {
        let page = StaticPage::new("<p>text</p>");
        assert!(!page.apply_outline("#missing").await.unwrap());
        assert!(!page.apply_outline("p[[").await.unwrap());
        assert!(!page.is_outlined("#missing").await);
    }
}

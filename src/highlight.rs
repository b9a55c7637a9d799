//! Transient element highlighting.
//!
//! A highlight outlines the first element matching a selector, then reverts
//! itself after [`HIGHLIGHT_TTL`]. The call returns a [`HighlightHandle`] so
//! callers (and tests) can revert early or keep the outline instead of
//! racing a real timer. Everything degrades silently: an unmatched selector
//! applies nothing, and a revert whose element has since left the document
//! is a no-op.

use crate::host::HostPage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Outline applied to highlighted elements.
pub const OUTLINE_STYLE: &str = "3px solid #4CAF50";
/// Gap between the element edge and the outline.
pub const OUTLINE_OFFSET: &str = "2px";
/// How long a highlight stays applied before the scheduled revert.
pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(3000);

/// Handle to an applied highlight and its scheduled revert.
pub struct HighlightHandle {
    page: Arc<dyn HostPage>,
    selector: String,
    applied: bool,
    reverted: Arc<AtomicBool>,
    timer: Option<JoinHandle<()>>,
}

/// Outline the first element matching `selector` and schedule the revert.
///
/// Never fails: host errors are logged and yield an inert handle, exactly
/// like an unmatched selector. Dropping the handle does not cancel the
/// scheduled revert — fire-and-forget callers keep the original behavior.
pub async fn highlight_element(page: Arc<dyn HostPage>, selector: &str) -> HighlightHandle {
    let applied = match page.apply_outline(selector).await {
        Ok(applied) => applied,
        Err(e) => {
            warn!(selector, error = %e, "highlight could not reach the host page");
            false
        }
    };
    if !applied {
        return HighlightHandle {
            page,
            selector: selector.to_string(),
            applied: false,
            reverted: Arc::new(AtomicBool::new(true)),
            timer: None,
        };
    }

    let reverted = Arc::new(AtomicBool::new(false));
    let timer = tokio::spawn({
        let page = Arc::clone(&page);
        let selector = selector.to_string();
        let reverted = Arc::clone(&reverted);
        async move {
            tokio::time::sleep(HIGHLIGHT_TTL).await;
            clear_once(page.as_ref(), &selector, &reverted).await;
        }
    });

    HighlightHandle {
        page,
        selector: selector.to_string(),
        applied: true,
        reverted,
        timer: Some(timer),
    }
}

async fn clear_once(page: &dyn HostPage, selector: &str, reverted: &AtomicBool) {
    if reverted.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = page.clear_outline(selector).await {
        warn!(selector, error = %e, "outline revert failed, element likely gone");
    }
}

impl HighlightHandle {
    /// Whether the selector matched and an outline was applied.
    pub fn applied(&self) -> bool {
        self.applied
    }

    /// Clear the outline now instead of waiting for the scheduled revert.
    /// Idempotent; a no-op once the revert has already run.
    pub async fn revert_now(&self) {
        if let Some(timer) = &self.timer {
            timer.abort();
        }
        clear_once(self.page.as_ref(), &self.selector, &self.reverted).await;
    }

    /// Keep the outline: cancel the scheduled revert without clearing.
    /// Callers that cancel own the eventual cleanup.
    pub fn cancel_revert(&self) {
        if let Some(timer) = &self.timer {
            timer.abort();
        }
    }

    /// Wait for the scheduled revert to run its course.
    pub async fn wait(self) {
        if let Some(timer) = self.timer {
            let _ = timer.await;
        }
    }
}

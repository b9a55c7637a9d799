//! Live host page over the Chrome DevTools Protocol.
//!
//! Materializes captures by evaluating a small walker script in the page
//! and decoding its JSON result straight into the capture types. The walker
//! reads computed style and box geometry from the real layout engine; the
//! Rust side owns every judgement made over them.

use crate::error::CaptureError;
use crate::highlight::{OUTLINE_OFFSET, OUTLINE_STYLE};
use crate::host::{HostPage, PageCapture};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

/// Evaluated in the page; returns the full capture payload in one round
/// trip. Shapes must stay in sync with [`PageCapture`] and the dom types.
const CAPTURE_SCRIPT: &str = r#"
(() => {
    const walk = (node) => {
        if (node.nodeType === Node.TEXT_NODE) {
            return { kind: 'text', text: node.textContent };
        }
        if (node.nodeType !== Node.ELEMENT_NODE) {
            return null;
        }
        const style = window.getComputedStyle(node);
        const rect = node.getBoundingClientRect();
        const children = [];
        for (const child of node.childNodes) {
            const built = walk(child);
            if (built) children.push(built);
        }
        return {
            kind: 'element',
            tag: node.tagName.toLowerCase(),
            id: node.id || null,
            classes: Array.from(node.classList),
            style: {
                display: style.display,
                visibility: style.visibility,
                opacity: style.opacity
            },
            rect: { width: rect.width, height: rect.height },
            children
        };
    };
    const emptyBody = {
        kind: 'element', tag: 'body', id: null, classes: [],
        style: { display: 'none', visibility: 'visible', opacity: '1' },
        rect: { width: 0, height: 0 }, children: []
    };
    const selection = window.getSelection ? window.getSelection().toString() : null;
    return {
        url: window.location.href,
        scroll: {
            viewport: (typeof window.scrollX === 'number')
                ? [window.scrollX, window.scrollY] : null,
            pageOffset: (typeof window.pageXOffset === 'number')
                ? [window.pageXOffset, window.pageYOffset] : null
        },
        selection: selection || null,
        dom: document.body ? walk(document.body) : emptyBody
    };
})()
"#;

/// A live browser page reachable over DevTools.
pub struct CdpPage {
    page: Page,
    _browser: Option<Browser>,
    _handler: Option<JoinHandle<()>>,
}

impl CdpPage {
    /// Wrap a page handle the caller already holds.
    pub fn from_page(page: Page) -> Self {
        Self {
            page,
            _browser: None,
            _handler: None,
        }
    }

    /// Connect to a running browser's DevTools websocket and attach to the
    /// first open page, keeping the connection alive for the wrapper's
    /// lifetime.
    pub async fn connect(ws_url: &str) -> Result<Self> {
        let (browser, mut handler) = Browser::connect(ws_url)
            .await
            .context("connecting to devtools websocket")?;
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        let page = browser
            .pages()
            .await
            .context("listing open pages")?
            .into_iter()
            .next()
            .context("no open page to attach to")?;
        Ok(Self {
            page,
            _browser: Some(browser),
            _handler: Some(handle),
        })
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value, CaptureError> {
        let evaluation = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| CaptureError::Evaluate(e.to_string()))?;
        Ok(evaluation.value().cloned().unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl HostPage for CdpPage {
    async fn capture(&self) -> Result<PageCapture, CaptureError> {
        let value = self.evaluate(CAPTURE_SCRIPT).await?;
        let capture: PageCapture = serde_json::from_value(value)?;
        debug!(url = %capture.url, "captured page state");
        Ok(capture)
    }

    async fn apply_outline(&self, selector: &str) -> Result<bool, CaptureError> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector('{}');
                if (!el) return false;
                el.style.outline = '{OUTLINE_STYLE}';
                el.style.outlineOffset = '{OUTLINE_OFFSET}';
                return true;
            }})()"#,
            escape_selector(selector)
        );
        Ok(self.evaluate(&script).await?.as_bool().unwrap_or(false))
    }

    async fn clear_outline(&self, selector: &str) -> Result<(), CaptureError> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector('{}');
                if (el) {{
                    el.style.outline = '';
                    el.style.outlineOffset = '';
                }}
            }})()"#,
            escape_selector(selector)
        );
        self.evaluate(&script).await?;
        Ok(())
    }
}

fn escape_selector(selector: &str) -> String {
    selector.replace('\\', "\\\\").replace('\'', "\\'")
}

//! Visible code block extraction.

use crate::dom::{DomNode, ElementNode};
use crate::extract::selector::build_selector;
use crate::extract::visibility::is_visible;
use crate::host::PageCapture;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Language reported when no `language-*` class is present.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

static LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"language-(\w+)").unwrap());

/// A visible `pre` or `code` element, ready for the Coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Trimmed full subtree text (hidden descendants included, matching
    /// `textContent` semantics).
    pub text: String,
    /// Inferred language, or [`UNKNOWN_LANGUAGE`].
    pub language: String,
    /// Best-effort locator for highlighting this block later.
    pub selector: String,
}

/// Collect every visible `pre` and `code` element in document order. Not
/// deduplicated: a `code` nested inside a matched `pre` yields two records.
pub fn extract_code_blocks(capture: &PageCapture) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    if let DomNode::Element(root) = &capture.dom {
        visit(root, &mut blocks);
    }
    blocks
}

fn visit(el: &ElementNode, out: &mut Vec<CodeBlock>) {
    if matches!(el.tag.as_str(), "pre" | "code") && is_visible(Some(el)) {
        out.push(CodeBlock {
            text: el.text_content().trim().to_string(),
            language: infer_language(el),
            selector: build_selector(el),
        });
    }
    for child in &el.children {
        if let DomNode::Element(child_el) = child {
            visit(child_el, out);
        }
    }
}

fn infer_language(el: &ElementNode) -> String {
    let class_attr = el.classes.join(" ");
    LANGUAGE_RE
        .captures(&class_attr)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_LANGUAGE.to_string(), |m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fixture::StaticPage;

    fn blocks_for(html: &str) -> Vec<CodeBlock> {
        extract_code_blocks(&StaticPage::new(html).capture_now())
    }

    #[test]
    fn test_language_class_is_captured() {
        let blocks = blocks_for(r#"<pre class="language-rust">fn main() {}</pre>"#);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "rust");
        assert_eq!(blocks[0].text, "fn main() {}");
        assert_eq!(blocks[0].selector, "pre.language-rust");
    }

    #[test]
    fn test_missing_language_class_defaults_to_unknown() {
        let blocks = blocks_for("<pre>plain</pre>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_nested_code_yields_two_records() {
        let blocks = blocks_for(r#"<pre id="outer"><code class="language-py">x = 1</code></pre>"#);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].selector, "#outer");
        assert_eq!(blocks[0].text, "x = 1");
        assert_eq!(blocks[1].selector, "code.language-py");
        assert_eq!(blocks[1].language, "py");
    }

    #[test]
    fn test_hidden_blocks_are_excluded() {
        let blocks = blocks_for(r#"<pre style="display:none">secret</pre><code>shown</code>"#);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "shown");
    }

    #[test]
    fn test_no_code_elements_yields_empty() {
        let blocks = blocks_for("<p>prose only</p>");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let blocks = blocks_for("<code>first</code><div><pre>second</pre></div><code>third</code>");
        let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}

//! Visibility-filtered text collection.

use crate::dom::{DomNode, ElementNode};
use crate::extract::visibility::is_visible;

/// Collect the page's visible text: every text node under the capture root
/// in document order, trimmed, kept only when its immediate containing
/// element is visible, joined with single newlines.
///
/// Each call re-walks the tree from scratch; on an unchanged capture the
/// result is identical across calls.
pub fn collect_visible_text(root: &DomNode) -> String {
    let mut fragments = Vec::new();
    if let DomNode::Element(el) = root {
        collect_from(el, &mut fragments);
    }
    fragments.join("\n")
}

fn collect_from(parent: &ElementNode, out: &mut Vec<String>) {
    for child in &parent.children {
        match child {
            DomNode::Text { text } => {
                let trimmed = text.trim();
                if !trimmed.is_empty() && is_visible(Some(parent)) {
                    out.push(trimmed.to_string());
                }
            }
            DomNode::Element(el) => collect_from(el, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::inline::dom_from_html;

    #[test]
    fn test_hidden_subtree_contributes_nothing() {
        let dom =
            dom_from_html(r#"<div style="display:none">Hidden</div><p id="a">Visible text</p>"#);
        assert_eq!(collect_visible_text(&dom), "Visible text");
    }

    #[test]
    fn test_fragments_join_with_newlines_in_document_order() {
        let dom = dom_from_html("<h1>Title</h1><p>First</p><p>Second</p>");
        assert_eq!(collect_visible_text(&dom), "Title\nFirst\nSecond");
    }

    #[test]
    fn test_whitespace_only_nodes_are_dropped() {
        let dom = dom_from_html("<p>a</p>   \n   <p>b</p>");
        assert_eq!(collect_visible_text(&dom), "a\nb");
    }

    #[test]
    fn test_nested_text_keeps_document_order() {
        let dom = dom_from_html("<p>before <em>emphasis</em> after</p>");
        assert_eq!(collect_visible_text(&dom), "before\nemphasis\nafter");
    }

    #[test]
    fn test_zero_area_parent_excludes_text() {
        let dom = dom_from_html(r#"<span style="width:0;height:0">collapsed</span><p>kept</p>"#);
        assert_eq!(collect_visible_text(&dom), "kept");
    }

    #[test]
    fn test_empty_page_yields_empty_string() {
        let dom = dom_from_html("");
        assert_eq!(collect_visible_text(&dom), "");
    }

    #[test]
    fn test_repeated_walks_are_deterministic() {
        let dom = dom_from_html("<p>one</p><div><p>two</p><p>three</p></div>");
        assert_eq!(collect_visible_text(&dom), collect_visible_text(&dom));
    }
}

//! Capture-side DOM model.
//!
//! A host page is materialized into this tree once per call; every
//! extraction pass then runs over the same immutable value. Style and box
//! geometry come from the host's layout engine (or are synthesized by
//! [`inline`] for hosts that have none) — they are consumed here, never
//! computed.

pub mod inline;

use serde::{Deserialize, Serialize};

/// One node of the captured DOM tree, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DomNode {
    Element(ElementNode),
    Text { text: String },
}

impl DomNode {
    /// The element payload, when this node is an element.
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }
}

/// An element with the style and geometry the host reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Lowercase tag name.
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub children: Vec<DomNode>,
}

impl ElementNode {
    /// Concatenated raw text of the whole subtree, `textContent`-style:
    /// every text node in document order, no separators, no trimming.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                DomNode::Text { text } => out.push_str(text),
                DomNode::Element(el) => el.push_text(out),
            }
        }
    }
}

/// The computed style properties visibility depends on, as the host
/// reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            opacity: "1".to_string(),
        }
    }
}

/// Rendered box size. Elements the host has no layout box for (detached
/// nodes, unrendered subtrees) carry a zero rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Whether the box occupies on-screen area.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_concatenates_in_document_order() {
        let el = ElementNode {
            tag: "pre".to_string(),
            id: None,
            classes: vec![],
            style: ComputedStyle::default(),
            rect: Rect {
                width: 10.0,
                height: 10.0,
            },
            children: vec![
                DomNode::Text {
                    text: "let x = ".to_string(),
                },
                DomNode::Element(ElementNode {
                    tag: "span".to_string(),
                    id: None,
                    classes: vec![],
                    style: ComputedStyle::default(),
                    rect: Rect::ZERO,
                    children: vec![DomNode::Text {
                        text: "1".to_string(),
                    }],
                }),
                DomNode::Text {
                    text: ";".to_string(),
                },
            ],
        };
        assert_eq!(el.text_content(), "let x = 1;");
    }

    #[test]
    fn test_rect_area() {
        assert!(!Rect::ZERO.has_area());
        assert!(!Rect {
            width: 10.0,
            height: 0.0
        }
        .has_area());
        assert!(Rect {
            width: 1.0,
            height: 1.0
        }
        .has_area());
    }

    #[test]
    fn test_dom_node_decodes_tagged_payload() {
        let payload = serde_json::json!({
            "kind": "element",
            "tag": "p",
            "id": "a",
            "classes": ["lead"],
            "style": { "display": "block", "visibility": "visible", "opacity": "1" },
            "rect": { "width": 120.0, "height": 18.0 },
            "children": [ { "kind": "text", "text": "Visible text" } ]
        });
        let node: DomNode = serde_json::from_value(payload).unwrap();
        let el = node.as_element().unwrap();
        assert_eq!(el.tag, "p");
        assert_eq!(el.id.as_deref(), Some("a"));
        assert_eq!(el.text_content(), "Visible text");
    }
}

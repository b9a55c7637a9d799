//! Build a capture DOM from raw markup.
//!
//! For hosts without a layout engine (tests, headless callers that only hold
//! an HTML string), style is read from inline `style` declarations and box
//! geometry is approximated: a subtree under `display:none` collapses to a
//! zero box, explicit pixel sizes are honored, everything else gets a
//! nominal positive box. `visibility` inherits down the walk; `opacity` does
//! not, matching computed-style semantics.

use crate::dom::{ComputedStyle, DomNode, ElementNode, Rect};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Box granted to elements the synthesizer has no better size for.
const NOMINAL_BOX: Rect = Rect {
    width: 1.0,
    height: 1.0,
};

/// Parse `html` and build the capture tree rooted at its `body`.
pub fn dom_from_html(html: &str) -> DomNode {
    let document = Html::parse_document(html);
    match document.select(&BODY_SELECTOR).next() {
        Some(body) => DomNode::Element(element_from(body, &Inherited::default())),
        // unreachable with parse_document, which always synthesizes a body
        None => DomNode::Element(ElementNode {
            tag: "body".to_string(),
            id: None,
            classes: Vec::new(),
            style: ComputedStyle::default(),
            rect: Rect::ZERO,
            children: Vec::new(),
        }),
    }
}

#[derive(Clone)]
struct Inherited {
    visibility: String,
    hidden: bool,
}

impl Default for Inherited {
    fn default() -> Self {
        Self {
            visibility: "visible".to_string(),
            hidden: false,
        }
    }
}

fn element_from(el: ElementRef<'_>, inherited: &Inherited) -> ElementNode {
    let decls = declarations(el.value().attr("style").unwrap_or(""));

    let display = if el.value().attr("hidden").is_some() {
        // the hidden attribute maps to display:none in every UA stylesheet
        "none".to_string()
    } else {
        decl(&decls, "display").unwrap_or("block").to_string()
    };
    let visibility = decl(&decls, "visibility")
        .map(str::to_string)
        .unwrap_or_else(|| inherited.visibility.clone());
    let opacity = decl(&decls, "opacity")
        .map(normalize_opacity)
        .unwrap_or_else(|| "1".to_string());

    let hidden = inherited.hidden || display == "none";
    let rect = synth_rect(&decls, hidden);
    let next = Inherited {
        visibility: visibility.clone(),
        hidden,
    };

    let mut children = Vec::new();
    for child in el.children() {
        match child.value() {
            Node::Text(text) => children.push(DomNode::Text {
                text: text.to_string(),
            }),
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    children.push(DomNode::Element(element_from(child_ref, &next)));
                }
            }
            _ => {}
        }
    }

    ElementNode {
        tag: el.value().name().to_string(),
        id: el.value().id().map(str::to_string),
        // read the attribute directly: scraper's classes() sorts and
        // dedupes tokens, and selectors need them in document order
        classes: el
            .value()
            .attr("class")
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        style: ComputedStyle {
            display,
            visibility,
            opacity,
        },
        rect,
        children,
    }
}

/// Split an inline style attribute into (lowercased property, value) pairs.
fn declarations(style_attr: &str) -> Vec<(String, String)> {
    style_attr
        .split(';')
        .filter_map(|piece| {
            let (prop, value) = piece.split_once(':')?;
            let prop = prop.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            (!prop.is_empty() && !value.is_empty()).then_some((prop, value))
        })
        .collect()
}

/// Last declaration of `prop` wins, as in the cascade.
fn decl<'a>(decls: &'a [(String, String)], prop: &str) -> Option<&'a str> {
    decls
        .iter()
        .rev()
        .find(|(p, _)| p == prop)
        .map(|(_, v)| v.as_str())
}

fn synth_rect(decls: &[(String, String)], hidden: bool) -> Rect {
    if hidden {
        return Rect::ZERO;
    }
    Rect {
        width: decl(decls, "width")
            .and_then(parse_px)
            .unwrap_or(NOMINAL_BOX.width),
        height: decl(decls, "height")
            .and_then(parse_px)
            .unwrap_or(NOMINAL_BOX.height),
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

/// Computed style reports a fully transparent element as the string "0".
fn normalize_opacity(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(v) if v == 0.0 => "0".to_string(),
        _ => value.trim().to_string(),
    }
}

//! Per-element visibility decision.

use crate::dom::ElementNode;

/// Whether an element is visible to a user: present, not styled out of the
/// page (`display:none`, `visibility:hidden`, fully transparent), and
/// occupying a box with strictly positive width and height.
///
/// Decisions are never cached — layout can change between captures, so each
/// traversal judges the element it was handed at that moment. Elements the
/// host has no layout box for carry a zero rect and are judged invisible.
pub fn is_visible(element: Option<&ElementNode>) -> bool {
    let Some(el) = element else {
        return false;
    };
    if el.style.display == "none" || el.style.visibility == "hidden" || el.style.opacity == "0" {
        return false;
    }
    el.rect.has_area()
}

//! Best-effort CSS locators for captured elements.

use crate::dom::ElementNode;

/// Build a selector sufficient to (usually) re-locate `element`: `#id` when
/// an id exists, else the lowercase tag dotted with its non-empty class
/// tokens in order, else the bare tag. May be ambiguous without an id; the
/// consumer does a first-match lookup, so that is acceptable.
pub fn build_selector(element: &ElementNode) -> String {
    if let Some(id) = element.id.as_deref() {
        if !id.is_empty() {
            return format!("#{id}");
        }
    }
    let tag = element.tag.to_lowercase();
    let classes: Vec<&str> = element
        .classes
        .iter()
        .map(String::as_str)
        .filter(|c| !c.is_empty())
        .collect();
    if classes.is_empty() {
        tag
    } else {
        format!("{tag}.{}", classes.join("."))
    }
}

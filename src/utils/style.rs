//! Scoped, dynamically generated stylesheet.
//!
//! A [`DynamicStyle`] owns one `<style>` element in `<head>`, identified by
//! id. Every [`set`](DynamicStyle::set) replaces the whole stylesheet; no
//! rule is ever patched in place.

use super::dom;

/// Handle to a `<style id=...>` element. Only the id is stored, so the handle
/// is `Send + Sync` and can be captured by reactive closures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicStyle {
    id: String,
}

impl DynamicStyle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Replace the stylesheet text, creating the element on first use.
    pub fn set(&self, css: &str) {
        let Some(document) = dom::document() else {
            return;
        };
        let element = match document.get_element_by_id(&self.id) {
            Some(element) => element,
            None => {
                let Ok(element) = document.create_element("style") else {
                    return;
                };
                element.set_id(&self.id);
                let Some(head) = document.head() else {
                    return;
                };
                if head.append_child(&element).is_err() {
                    return;
                }
                element
            }
        };
        element.set_text_content(Some(css));
    }

    /// Remove the element, reverting every rule it carried.
    pub fn remove(&self) {
        if let Some(element) = dom::document().and_then(|d| d.get_element_by_id(&self.id)) {
            element.remove();
        }
    }
}

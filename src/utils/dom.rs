//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Focus the first element under `root` matching `selector`.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_within(root: &web_sys::Element, selector: &str) -> bool {
    if let Some(element) = root.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Dispatch a `CustomEvent` named `name` on the window with a string `detail`.
///
/// Returns `false` when there is no window or the event could not be built.
pub fn dispatch_window_event(name: &str, detail: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(detail));
    match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => window.dispatch_event(&event).is_ok(),
        Err(_) => false,
    }
}

//! Browser tests for DOM-facing helpers and the mounted tree panel.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use futures::{FutureExt, StreamExt};
use futures::channel::mpsc::UnboundedReceiver;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use repotree::app::AppContext;
use repotree::components::FileTree;
use repotree::config::SELECTED_STYLE_ID;
use repotree::core::{HighlightRule, OpenFile, RepoStore, TreeProvider, relay};
use repotree::utils::{DynamicStyle, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const LISTING: &str = "\
040000 tree aaa\tsrc
100644 blob bbb\tsrc/lib.rs
100644 blob ccc\tREADME.md
";

fn style_text(id: &str) -> Option<String> {
    dom::document()?.get_element_by_id(id)?.text_content()
}

fn style_count(id: &str) -> u32 {
    dom::document()
        .and_then(|d| d.query_selector_all(&format!("style#{id}")).ok())
        .map(|list| list.length())
        .unwrap_or(0)
}

/// Let pending effects run.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn highlighted_key() -> Option<String> {
    let css = style_text(SELECTED_STYLE_ID)?;
    let start = css.find("data-key=\"")? + "data-key=\"".len();
    let len = css[start..].find('"')?;
    Some(css[start..start + len].to_string())
}

/// Tree panel mounted into its own host element.
struct Panel {
    host: web_sys::HtmlElement,
    store: RepoStore,
    file_opened_stream: UnboundedReceiver<OpenFile>,
    unmount: Option<Box<dyn FnOnce()>>,
}

impl Panel {
    fn mount() -> Self {
        let document = dom::document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();

        let store = RepoStore::load(LISTING).unwrap();
        let (file_opened_relay, file_opened_stream) = relay();
        let handle = mount_to(host.clone(), move || {
            provide_context(AppContext::new(store, file_opened_relay));
            view! { <FileTree /> }
        });

        Self {
            host,
            store,
            file_opened_stream,
            unmount: Some(Box::new(move || drop(handle))),
        }
    }

    fn find(&self, selector: &str) -> web_sys::Element {
        self.host
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
    }

    /// Dispatch a cancelable keydown on the tree; returns the event.
    fn key(&self, key: &str) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        self.find("[role=\"group\"]").dispatch_event(&event).unwrap();
        event
    }

    fn click(&self, path: &str) {
        self.find(&format!("[data-key=\"{path}\"]"))
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    fn opened(&mut self) -> Vec<String> {
        let mut opened = Vec::new();
        while let Some(Some(event)) = self.file_opened_stream.next().now_or_never() {
            opened.push(event.path);
        }
        opened
    }

    fn unmount(&mut self) {
        if let Some(unmount) = self.unmount.take() {
            unmount();
        }
        self.host.remove();
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen_test]
fn dynamic_style_is_rewritten_not_appended() {
    let style = DynamicStyle::new("test-selected");
    style.set(&HighlightRule::new(Some("src/lib.rs".into())).to_css("file"));
    style.set(&HighlightRule::new(None).to_css("file"));

    assert_eq!(style_count("test-selected"), 1);
    assert_eq!(
        style_text("test-selected").as_deref(),
        Some(HighlightRule::new(None).to_css("file").as_str())
    );

    style.remove();
    assert_eq!(style_text("test-selected"), None);
}

#[wasm_bindgen_test]
fn window_event_carries_path() {
    let seen = Rc::new(RefCell::new(None::<String>));
    let sink = Rc::clone(&seen);
    let listener = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |e: web_sys::CustomEvent| {
        *sink.borrow_mut() = e.detail().as_string();
    });
    let window = dom::window().unwrap();
    window
        .add_event_listener_with_callback("test.open", listener.as_ref().unchecked_ref())
        .unwrap();

    assert!(dom::dispatch_window_event("test.open", "README.md"));
    assert_eq!(seen.borrow().as_deref(), Some("README.md"));

    window
        .remove_event_listener_with_callback("test.open", listener.as_ref().unchecked_ref())
        .unwrap();
}

#[wasm_bindgen_test]
async fn arrow_keys_suppress_default_even_when_nothing_moves() {
    let mut panel = Panel::mount();
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some(""));

    panel.click("src");
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some("src"));
    assert_eq!(
        panel.find("[data-index=\"0\"]").get_attribute("aria-selected").as_deref(),
        Some("true")
    );

    // Already on the first row: nothing to move to.
    let up = panel.key("ArrowUp");
    assert!(up.default_prevented());
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some("src"));
    assert!(panel.opened().is_empty());

    let down = panel.key("ArrowDown");
    assert!(down.default_prevented());
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some("src/lib.rs"));
    assert_eq!(panel.opened(), vec!["src/lib.rs"]);

    let enter = panel.key("Enter");
    assert!(!enter.default_prevented());
}

#[wasm_bindgen_test]
async fn selection_follows_tree_changes() {
    let panel = Panel::mount();
    settle().await;

    panel.click("src");
    panel.key("ArrowDown");
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some("src/lib.rs"));

    // Collapsing outside the panel hides the selected row.
    panel.store.toggle("src");
    settle().await;
    assert_eq!(highlighted_key().as_deref(), Some("src"));
}

#[wasm_bindgen_test]
async fn highlight_style_removed_on_unmount() {
    let mut panel = Panel::mount();
    settle().await;
    assert_eq!(style_count(SELECTED_STYLE_ID), 1);

    panel.unmount();
    settle().await;
    assert_eq!(style_count(SELECTED_STYLE_ID), 0);
}

//! Repository file tree panel.
//!
//! Wires the [`TreeNavigator`] to the virtual list, the keyboard and the
//! selected-row stylesheet.

use leptos::{ev, prelude::*};

use super::virtual_list::{ROW_CLASS, VirtualList, VirtualListHandle};
use crate::app::AppContext;
use crate::config::{ROW_HEIGHT_PX, SELECTED_STYLE_ID, TREE_HEADER};
use crate::core::{NavKey, TreeNavigator};
use crate::utils::DynamicStyle;

stylance::import_crate_style!(css, "src/components/file_tree/file_tree.module.css");

/// Collapsible, keyboard-navigable file tree of the current repository.
#[component]
pub fn FileTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let list = VirtualListHandle::new(ROW_HEIGHT_PX);
    let nav = TreeNavigator::new(ctx.repo, list, ctx.file_opened_relay.clone());
    let items = nav.items();
    let selection = nav.selection();
    let selected = Signal::derive(move || selection.index());

    // Selected-row highlight: one rule, rewritten whenever the selection moves.
    let style = DynamicStyle::new(SELECTED_STYLE_ID);
    let highlight = nav.highlight();
    Effect::new({
        let style = style.clone();
        move || style.set(&highlight.with(|rule| rule.to_css(ROW_CLASS)))
    });
    on_cleanup(move || style.remove());

    // Re-anchor the selection whenever the tree reshapes.
    Effect::new({
        let nav = nav.clone();
        move || {
            items.track();
            nav.reconcile();
        }
    });

    let on_hover = Callback::new({
        let nav = nav.clone();
        move |index: usize| nav.hover(index)
    });
    let on_click = Callback::new({
        let nav = nav.clone();
        move |index: usize| nav.click(index)
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            ev.prevent_default();
            nav.handle_key(key);
        }
    };

    view! {
        <div class=css::header>{TREE_HEADER}</div>
        <div
            class=css::files
            tabindex="0"
            role="group"
            aria-label="Repository files"
            on:keydown=handle_keydown
        >
            <VirtualList
                items=items
                selected=selected
                handle=list
                on_hover=on_hover
                on_click=on_click
            />
        </div>
    }
}

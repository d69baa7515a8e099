//! Fixed-row-height virtual list for tree rows.
//!
//! Only rows near the viewport are mounted. Rows are recycled: each slot
//! keeps its DOM nodes and is rebound to another entry as the window moves
//! (see [`slot_index`]).

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::OVERSCAN_ROWS;
use crate::core::{Glyph, RowBinding, RowFocus};
use crate::models::Entry;
use crate::utils::{dom, reveal_scroll_top, slot_index, visible_range};

stylance::import_crate_style!(css, "src/components/file_tree/file_tree.module.css");

/// Class every row carries. The selected-row rule targets it.
pub const ROW_CLASS: &str = css::file;

/// Scroll state of a [`VirtualList`], shared with whoever needs to move focus.
#[derive(Clone, Copy)]
pub struct VirtualListHandle {
    viewport: NodeRef<html::Div>,
    scroll_top: RwSignal<f64>,
    viewport_height: RwSignal<f64>,
    row_height: f64,
}

impl VirtualListHandle {
    pub fn new(row_height: f64) -> Self {
        Self {
            viewport: NodeRef::new(),
            scroll_top: RwSignal::new(0.0),
            viewport_height: RwSignal::new(0.0),
            row_height,
        }
    }

    /// Re-read scroll position and height from the viewport element.
    fn sync_metrics(&self) {
        if let Some(el) = self.viewport.get_untracked() {
            self.scroll_top.set(f64::from(el.scroll_top()));
            self.viewport_height.set(f64::from(el.client_height()));
        }
    }
}

impl RowFocus for VirtualListHandle {
    fn focus_row(&self, index: usize) {
        let Some(el) = self.viewport.get_untracked() else {
            return;
        };
        if let Some(top) = reveal_scroll_top(
            index,
            f64::from(el.scroll_top()),
            f64::from(el.client_height()),
            self.row_height,
        ) {
            el.set_scroll_top(top.round() as i32);
        }
        self.sync_metrics();

        // The row may only be mounted after the window re-renders.
        request_animation_frame(move || {
            dom::focus_within(&el, &format!("[data-index=\"{index}\"]"));
        });
    }
}

/// Scrollable, virtualized list of tree rows.
#[component]
pub fn VirtualList(
    #[prop(into)] items: Signal<Vec<Entry>>,
    /// Index of the selected row, mirrored as `aria-selected`
    #[prop(into)] selected: Signal<Option<usize>>,
    handle: VirtualListHandle,
    #[prop(into)] on_hover: Callback<usize>,
    #[prop(into)] on_click: Callback<usize>,
) -> impl IntoView {
    let row_height = handle.row_height;

    let range = Memo::new(move |_| {
        visible_range(
            handle.scroll_top.get(),
            handle.viewport_height.get(),
            row_height,
            items.with(Vec::len),
            OVERSCAN_ROWS,
        )
    });
    let slot_count = Memo::new(move |_| range.with(|r| r.len()));
    let total_height = move || format!("{}px", items.with(Vec::len) as f64 * row_height);

    // Measure once mounted, then on every window resize.
    Effect::new(move || {
        if handle.viewport.get().is_some() {
            handle.sync_metrics();
        }
    });
    let resize = window_event_listener(ev::resize, move |_| handle.sync_metrics());
    on_cleanup(move || resize.remove());

    view! {
        <div
            class=css::viewport
            node_ref=handle.viewport
            on:scroll=move |_| handle.sync_metrics()
        >
            <div class=css::spacer style:height=total_height role="tree">
                <For
                    each=move || 0..slot_count.get()
                    key=|slot| *slot
                    children=move |slot| {
                        let index = Signal::derive(move || range.with(|r| slot_index(r, slot)));
                        view! {
                            <Row
                                index=index
                                items=items
                                selected=selected
                                row_height=row_height
                                on_hover=on_hover
                                on_click=on_click
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

/// One recycled slot. Its nodes are created once and rebound through `binding`.
#[component]
fn Row(
    index: Signal<Option<usize>>,
    items: Signal<Vec<Entry>>,
    selected: Signal<Option<usize>>,
    row_height: f64,
    on_hover: Callback<usize>,
    on_click: Callback<usize>,
) -> impl IntoView {
    let binding = Memo::new(move |_| {
        let index = index.get()?;
        items.with(|items| items.get(index).map(RowBinding::for_entry))
    });
    let field = move |f: fn(&RowBinding) -> String| {
        move || binding.with(|b| b.as_ref().map(f).unwrap_or_default())
    };

    let offset = move || {
        index
            .get()
            .map(|i| format!("translateY({}px)", i as f64 * row_height))
            .unwrap_or_default()
    };
    let expanded = move || {
        binding.with(|b| {
            b.as_ref()
                .and_then(|b| b.arrow)
                .map(|arrow| (arrow == Glyph::ChevronDown).to_string())
        })
    };

    let is_selected = move || {
        let index = index.get();
        (index.is_some() && index == selected.get()).to_string()
    };

    let handle_hover = move |_: ev::MouseEvent| {
        if let Some(i) = index.get_untracked() {
            on_hover.run(i);
        }
    };
    let handle_click = move |_: ev::MouseEvent| {
        if let Some(i) = index.get_untracked() {
            on_click.run(i);
        }
    };

    view! {
        <div
            class=ROW_CLASS
            role="treeitem"
            tabindex="-1"
            data-index=move || index.get().map(|i| i.to_string())
            aria-expanded=expanded
            aria-selected=is_selected
            style:height=format!("{row_height}px")
            style:transform=offset
            style:display=move || if binding.with(Option::is_some) { "" } else { "none" }
            on:mouseenter=handle_hover
            on:click=handle_click
        >
            <span class=css::depth style:padding-left=field(RowBinding::padding_left)></span>
            <span class=css::arrow>
                {move || binding.with(|b| b.as_ref().and_then(|b| b.arrow)).map(|g| view! { <Icon icon=ic::glyph(g) /> })}
            </span>
            <span
                class=css::filename
                title=field(|b| b.title.clone())
                data-key=move || binding.with(|b| b.as_ref().map(|b| b.key.clone()))
            >
                <span class=css::fileIcon>
                    {move || binding.with(|b| b.as_ref().and_then(|b| b.icon)).map(|g| view! { <Icon icon=ic::glyph(g) /> })}
                </span>
                {field(|b| b.label.clone())}
            </span>
        </div>
    }
}

//! Tree navigation controller.
//!
//! Turns row hovers, clicks and arrow keys into selection changes,
//! expand/collapse requests, prefetch requests and "open file" broadcasts.
//!
//! The flattened sequence is addressed by index, and indices are not stable
//! across expand/collapse. Every handler therefore resolves the entry from
//! the current sequence at the moment it needs it and never keeps an entry
//! around across a mutation.

use leptos::prelude::*;

use super::highlight::HighlightRule;
use super::provider::{RowFocus, TreeProvider};
use super::relay::{OpenFile, Relay};
use super::selection::{Selected, Selection};
use crate::models::Entry;

/// Keys the navigator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value. Other keys are not handled.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Controller behind the file tree panel.
///
/// Generic over the tree provider and the list's focus control so it can be
/// driven without a browser.
#[derive(Clone)]
pub struct TreeNavigator<P, F> {
    items: Signal<Vec<Entry>>,
    selection: Selection,
    highlight: Memo<HighlightRule>,
    provider: P,
    focus: F,
    file_opened_relay: Relay<OpenFile>,
}

impl<P, F> TreeNavigator<P, F>
where
    P: TreeProvider,
    F: RowFocus,
{
    pub fn new(provider: P, focus: F, file_opened_relay: Relay<OpenFile>) -> Self {
        let selection = Selection::new();
        Self {
            items: provider.file_list(),
            selection,
            highlight: Memo::new(move |_| HighlightRule::new(selection.key())),
            provider,
            focus,
            file_opened_relay,
        }
    }

    pub fn items(&self) -> Signal<Vec<Entry>> {
        self.items
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Highlight derived from the selection.
    pub fn highlight(&self) -> Memo<HighlightRule> {
        self.highlight
    }

    /// Select row `index`, or clear the selection.
    ///
    /// The caller is responsible for `index` being in range; an index that
    /// does not resolve is kept but highlights nothing.
    pub fn select(&self, index: Option<usize>) {
        let selected = index.map(|index| Selected {
            index,
            key: self.entry_at(index).map(|entry| entry.path),
        });
        self.selection.set(selected);
    }

    /// Entry currently at `index`, read from the latest sequence.
    fn entry_at(&self, index: usize) -> Option<Entry> {
        self.items.with_untracked(|items| items.get(index).cloned())
    }

    fn len(&self) -> usize {
        self.items.with_untracked(Vec::len)
    }

    /// Pointer entered row `index`: warm up files.
    pub fn hover(&self, index: usize) {
        if let Some(entry) = self.entry_at(index)
            && entry.is_file()
        {
            self.provider.prefetch(&entry.path);
        }
    }

    /// Row `index` was clicked.
    pub fn click(&self, index: usize) {
        self.select(Some(index));
        let Some(entry) = self.entry_at(index) else {
            return;
        };
        if entry.collapsible() {
            self.provider.toggle(&entry.path);
            self.focus.focus_row(index);
        } else {
            self.file_opened_relay.send(OpenFile { path: entry.path });
        }
    }

    /// Handle a navigation key. The caller suppresses the browser default
    /// for every [`NavKey`], whatever the outcome.
    pub fn handle_key(&self, key: NavKey) {
        match key {
            NavKey::Up | NavKey::Down => self.step(key == NavKey::Down),
            NavKey::Left | NavKey::Right => self.toggle_selected(),
        }
    }

    fn step(&self, down: bool) {
        let target = match self.selection.index_untracked() {
            None => Some(0),
            Some(current) if down => current.checked_add(1),
            Some(current) => current.checked_sub(1),
        };
        let Some(target) = target.filter(|&t| t < self.len()) else {
            return;
        };

        self.select(Some(target));
        if let Some(entry) = self.entry_at(target)
            && entry.is_file()
        {
            self.file_opened_relay.send(OpenFile { path: entry.path });
        }
        self.focus.focus_row(target);
    }

    fn toggle_selected(&self) {
        let Some(current) = self.selection.index_untracked() else {
            return;
        };
        if let Some(entry) = self.entry_at(current)
            && entry.collapsible()
        {
            self.provider.toggle(&entry.path);
            // Toggling only adds or removes descendants; the row stays put.
            self.focus.focus_row(current);
        }
    }

    /// Re-anchor the selection after the sequence changed.
    ///
    /// 1. The selected path is still listed: follow it to its new index.
    /// 2. It disappeared: select its nearest listed ancestor.
    /// 3. Nothing left to anchor to: clear the selection.
    pub fn reconcile(&self) {
        let Some(selected) = self.selection.get_untracked() else {
            return;
        };
        let Some(key) = selected.key.as_deref() else {
            // Never resolved to an entry; drop it once it is out of range.
            if selected.index >= self.len() {
                self.selection.set(None);
            }
            return;
        };

        let anchored = self.items.with_untracked(|items| {
            let position = |path: &str| items.iter().position(|e| e.path == path);
            position(key).map(|index| (index, key)).or_else(|| {
                ancestors(key).find_map(|parent| position(parent).map(|index| (index, parent)))
            })
        });

        let next = anchored.map(|(index, path)| Selected {
            index,
            key: Some(path.to_string()),
        });
        if next.as_ref() != Some(&selected) {
            self.selection.set(next);
        }
    }
}

/// `a/b/c` -> `a/b`, `a`
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(path.rsplit_once('/').map(|(parent, _)| parent), |p| {
        p.rsplit_once('/').map(|(parent, _)| parent)
    })
}

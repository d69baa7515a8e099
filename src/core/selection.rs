//! Selected row of the file tree.

use leptos::prelude::*;

/// The selected index together with the path it pointed at when selected.
///
/// The path is what makes the selection survive recycling and re-anchoring;
/// it is `None` when the index did not resolve to an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selected {
    pub index: usize,
    pub key: Option<String>,
}

/// Observable selection state. Starts out empty.
///
/// Both parts live in one signal so that every change produces exactly one
/// notification.
#[derive(Clone, Copy)]
pub struct Selection(RwSignal<Option<Selected>>);

impl Selection {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Selected index (tracked).
    pub fn index(&self) -> Option<usize> {
        self.0.with(|s| s.as_ref().map(|s| s.index))
    }

    /// Selected key (tracked).
    pub fn key(&self) -> Option<String> {
        self.0.with(|s| s.as_ref().and_then(|s| s.key.clone()))
    }

    pub fn get_untracked(&self) -> Option<Selected> {
        self.0.get_untracked()
    }

    pub fn index_untracked(&self) -> Option<usize> {
        self.0.with_untracked(|s| s.as_ref().map(|s| s.index))
    }

    /// Replace the selection. No bounds checking happens here.
    pub fn set(&self, selected: Option<Selected>) {
        self.0.set(selected);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

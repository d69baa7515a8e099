//! Visual state of one tree row.
//!
//! A [`RowBinding`] is created once per recycled slot and rebound whenever
//! the slot has to show another entry. Binding only rewrites the binding
//! itself, so binding the same entry twice yields an identical value.

use crate::config::INDENT_STEP_PX;
use crate::models::Entry;

/// Icon shown in a row. Mapped to the icon theme by the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChevronRight,
    ChevronDown,
    Folder,
    FolderOpened,
    File,
}

/// Everything a row renders, derived from a single [`Entry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowBinding {
    /// Left padding of the depth spacer in pixels
    pub indent_px: usize,
    /// Expand/collapse chevron, only for directories
    pub arrow: Option<Glyph>,
    pub icon: Option<Glyph>,
    /// Final path segment
    pub label: String,
    /// Full path, with a trailing `/` for directories
    pub title: String,
    /// Full path, stamped as `data-key` for the highlight rule
    pub key: String,
}

impl RowBinding {
    /// Fresh, unbound template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding for `entry` in one step.
    pub fn for_entry(entry: &Entry) -> Self {
        let mut binding = Self::new();
        binding.bind(entry);
        binding
    }

    /// Rebind this template to `entry`.
    pub fn bind(&mut self, entry: &Entry) {
        self.indent_px = entry.depth * INDENT_STEP_PX;

        if entry.collapsible() {
            if entry.collapsed {
                self.arrow = Some(Glyph::ChevronRight);
                self.icon = Some(Glyph::Folder);
            } else {
                self.arrow = Some(Glyph::ChevronDown);
                self.icon = Some(Glyph::FolderOpened);
            }
        } else {
            self.arrow = None;
            self.icon = Some(Glyph::File);
        }

        self.label.clear();
        self.label.push_str(entry.name());

        self.title.clear();
        self.title.push_str(&entry.path);
        if entry.collapsible() {
            self.title.push('/');
        }

        self.key.clear();
        self.key.push_str(&entry.path);
    }

    /// CSS `padding-left` for the depth spacer; empty at depth 0.
    pub fn padding_left(&self) -> String {
        if self.indent_px == 0 {
            String::new()
        } else {
            format!("{}px", self.indent_px)
        }
    }
}

//! Selected-row highlight expressed as a single CSS rule.
//!
//! Rows are recycled by the virtual list, so the highlight cannot live on a
//! DOM node. Instead the rule selects whichever row carries the selected
//! path in its `data-key` attribute, wherever that row is currently mounted.

use std::fmt::Write;

/// Highlight for one (or no) path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightRule {
    key: Option<String>,
}

impl HighlightRule {
    pub fn new(key: Option<String>) -> Self {
        Self { key }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Selector for rows of class `row_class` whose label has this key.
    ///
    /// Paths are never empty, so an absent key selects `data-key=""`, which
    /// matches nothing.
    fn selector(&self, row_class: &str) -> String {
        let key = css_string(self.key.as_deref().unwrap_or_default());
        format!(":where(.{row_class}:has([data-key=\"{key}\"]))")
    }

    /// Complete stylesheet text for the rule.
    pub fn to_css(&self, row_class: &str) -> String {
        format!(
            "{} {{ background: var(--selected); color: var(--accent); }}",
            self.selector(row_class)
        )
    }
}

/// Escape `value` for use inside a double-quoted CSS string.
fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

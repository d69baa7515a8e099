//! Seams between the navigator and the components it drives.

use leptos::prelude::Signal;

use crate::models::Entry;

/// Owner of the flattened tree.
///
/// The sequence is re-emitted on every structural change. `toggle` and
/// `prefetch` are requests: their effect (if any) is observed through the
/// next emission of [`file_list`](TreeProvider::file_list).
pub trait TreeProvider {
    /// Visible entries in display order.
    fn file_list(&self) -> Signal<Vec<Entry>>;

    /// Collapse or expand the directory at `path`.
    fn toggle(&self, path: &str);

    /// Warm up the content of the file at `path`. Fire-and-forget.
    fn prefetch(&self, path: &str);
}

/// Row-level focus control offered by the virtual list.
pub trait RowFocus {
    /// Scroll row `index` into view and give it input focus.
    fn focus_row(&self, index: usize);
}

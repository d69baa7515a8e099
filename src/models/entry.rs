//! Flattened tree entries as consumed by the file tree panel.

/// Kind of a tree entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (git blob)
    File,
    /// Directory (git tree)
    Container,
}

/// One row of the flattened, collapse-pruned repository tree.
///
/// Entries are snapshots: they are produced by the tree model on every
/// structural change and never mutated by the panel. Anything that needs to
/// follow an entry across a collapse or expand must re-resolve it by index
/// from the newest snapshot, or by `path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Repository-relative path, unique within a snapshot
    pub path: String,
    pub kind: EntryKind,
    /// Nesting level (0 for top-level entries)
    pub depth: usize,
    /// Whether the container's children are hidden. Always `false` for files.
    pub collapsed: bool,
}

impl Entry {
    pub fn file(path: impl Into<String>, depth: usize) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            depth,
            collapsed: false,
        }
    }

    pub fn container(path: impl Into<String>, depth: usize, collapsed: bool) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Container,
            depth,
            collapsed,
        }
    }

    /// Only containers can be expanded or collapsed.
    #[inline]
    pub fn collapsible(&self) -> bool {
        self.kind == EntryKind::Container
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Final path segment, used as the row label.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

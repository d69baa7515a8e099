//! In-memory repository tree with collapsible directories.
//!
//! The tree keeps every node of the listing; [`RepoTree::flatten`] produces
//! the visible, depth-first sequence with collapsed subtrees pruned.
//!
//! # Path Convention
//!
//! - No leading or trailing slashes: `src/core/tree.rs`
//! - Segments are never empty
//! - Parents of a listed path always exist (they are created on demand)

use std::cmp::Ordering;
use std::collections::HashMap;

use leptos::logging::warn;

use super::error::TreeError;
use crate::models::{Entry, EntryKind, LsTreeElement, ObjectType};

#[derive(Clone, Debug)]
struct Node {
    path: String,
    kind: EntryKind,
    collapsed: bool,
    children: Vec<usize>,
}

impl Node {
    fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Repository tree built from a `git ls-tree` listing.
#[derive(Clone, Debug, Default)]
pub struct RepoTree {
    nodes: Vec<Node>,
    roots: Vec<usize>,
    /// Path -> node index
    index: HashMap<String, usize>,
    /// Directories that were listed explicitly (not just implied by a child)
    listed: Vec<bool>,
}

impl RepoTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tree from listing records.
    ///
    /// Missing parent directories are created. Submodule (`commit`) records
    /// cannot be browsed and are skipped. All directories start collapsed.
    pub fn from_listing(
        records: impl IntoIterator<Item = LsTreeElement>,
    ) -> Result<Self, TreeError> {
        let mut tree = Self::empty();
        for record in records {
            let kind = match record.object_type {
                ObjectType::Blob => EntryKind::File,
                ObjectType::Tree => EntryKind::Container,
                ObjectType::Commit => {
                    warn!("skipping submodule {}", record.file);
                    continue;
                }
            };
            tree.insert(&record.file, kind)?;
        }
        tree.sort();
        Ok(tree)
    }

    /// Whether `path` is a collapsed directory. `None` for files and unknown paths.
    fn is_collapsed(&self, path: &str) -> Option<bool> {
        let node = &self.nodes[*self.index.get(path)?];
        (node.kind == EntryKind::Container).then_some(node.collapsed)
    }

    /// Flip the collapsed state of the directory at `path`.
    ///
    /// Returns `false` (and changes nothing) for files and unknown paths.
    pub fn toggle(&mut self, path: &str) -> bool {
        match self.is_collapsed(path) {
            Some(collapsed) => self.set_collapsed(path, !collapsed),
            None => false,
        }
    }

    /// Collapse or expand the directory at `path`.
    ///
    /// Returns `false` for files and unknown paths.
    fn set_collapsed(&mut self, path: &str, collapsed: bool) -> bool {
        let Some(&id) = self.index.get(path) else {
            return false;
        };
        let node = &mut self.nodes[id];
        if node.kind != EntryKind::Container {
            return false;
        }
        node.collapsed = collapsed;
        true
    }

    /// Visible entries in depth-first pre-order, skipping collapsed subtrees.
    pub fn flatten(&self) -> Vec<Entry> {
        let mut out = Vec::with_capacity(self.roots.len());
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            out.push(match node.kind {
                EntryKind::File => Entry::file(node.path.clone(), depth),
                EntryKind::Container => Entry::container(node.path.clone(), depth, node.collapsed),
            });
            if node.kind == EntryKind::Container && !node.collapsed {
                stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }
        out
    }

    fn insert(&mut self, path: &str, kind: EntryKind) -> Result<usize, TreeError> {
        let path = path.trim_matches('/');
        if path.is_empty() || path.split('/').any(str::is_empty) {
            return Err(TreeError::InvalidPath(path.to_string()));
        }

        if let Some(&existing) = self.index.get(path) {
            // A directory implied by an earlier child may be listed afterwards.
            let node = &self.nodes[existing];
            if kind == EntryKind::Container
                && node.kind == EntryKind::Container
                && !self.listed[existing]
            {
                self.listed[existing] = true;
                return Ok(existing);
            }
            return Err(TreeError::DuplicatePath(path.to_string()));
        }

        let parent = match path.rsplit_once('/') {
            Some((parent, _)) => {
                let id = match self.index.get(parent) {
                    Some(&id) => id,
                    None => {
                        let id = self.insert(parent, EntryKind::Container)?;
                        self.listed[id] = false;
                        id
                    }
                };
                if self.nodes[id].kind != EntryKind::Container {
                    return Err(TreeError::NotADirectory(parent.to_string()));
                }
                Some(id)
            }
            None => None,
        };

        let id = self.nodes.len();
        self.nodes.push(Node {
            path: path.to_string(),
            kind,
            collapsed: kind == EntryKind::Container,
            children: Vec::new(),
        });
        self.listed.push(true);
        self.index.insert(path.to_string(), id);
        match parent {
            Some(parent) => self.nodes[parent].children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Directories first, then case-insensitive name, then raw name.
    fn sort(&mut self) {
        let nodes = &self.nodes;
        let order = |a: &usize, b: &usize| -> Ordering {
            let (a, b) = (&nodes[*a], &nodes[*b]);
            let dir_first = (b.kind == EntryKind::Container).cmp(&(a.kind == EntryKind::Container));
            dir_first
                .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
                .then_with(|| a.name().cmp(b.name()))
        };

        let mut roots = std::mem::take(&mut self.roots);
        roots.sort_by(order);
        let children: Vec<Vec<usize>> = self
            .nodes
            .iter()
            .map(|node| {
                let mut sorted = node.children.clone();
                sorted.sort_by(order);
                sorted
            })
            .collect();

        self.roots = roots;
        for (node, sorted) in self.nodes.iter_mut().zip(children) {
            node.children = sorted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.path.as_str()).collect()
    }

    fn sample() -> RepoTree {
        RepoTree::from_listing([
            LsTreeElement::blob("README.md"),
            LsTreeElement::tree("src"),
            LsTreeElement::blob("src/main.rs"),
            LsTreeElement::blob("src/core/tree.rs"),
            LsTreeElement::blob("Cargo.toml"),
            LsTreeElement::tree("assets"),
        ])
        .unwrap()
    }

    #[test]
    fn test_roots_start_collapsed_and_sorted() {
        let tree = sample();
        let entries = tree.flatten();
        assert_eq!(paths(&entries), vec!["assets", "src", "Cargo.toml", "README.md"]);
        assert!(entries[0].collapsed && entries[1].collapsed);
        assert!(entries.iter().all(|e| e.depth == 0));
    }

    #[test]
    fn test_expand_inserts_children_after_parent() {
        let mut tree = sample();
        assert!(tree.toggle("src"));
        let entries = tree.flatten();
        assert_eq!(
            paths(&entries),
            vec!["assets", "src", "src/core", "src/main.rs", "Cargo.toml", "README.md"]
        );
        assert!(!entries[1].collapsed);
        assert_eq!(entries[2].depth, 1);
        assert_eq!(entries[3].depth, 1);
        // implied directory, still collapsed
        assert_eq!(entries[2].kind, EntryKind::Container);
        assert!(entries[2].collapsed);
    }

    #[test]
    fn test_collapse_prunes_whole_subtree() {
        let mut tree = sample();
        tree.set_collapsed("src", false);
        tree.set_collapsed("src/core", false);
        assert_eq!(tree.flatten().len(), 7);
        assert!(tree.toggle("src"));
        assert_eq!(paths(&tree.flatten()), vec!["assets", "src", "Cargo.toml", "README.md"]);
        // nested state survives the parent collapse
        assert_eq!(tree.is_collapsed("src/core"), Some(false));
    }

    #[test]
    fn test_toggle_ignores_files_and_unknown_paths() {
        let mut tree = sample();
        assert!(!tree.toggle("README.md"));
        assert!(!tree.toggle("nope"));
        assert_eq!(tree.is_collapsed("README.md"), None);
    }

    #[test]
    fn test_implied_directory_may_be_listed_later() {
        let mut tree = RepoTree::from_listing([
            LsTreeElement::blob("docs/guide.md"),
            LsTreeElement::tree("docs"),
        ])
        .unwrap();
        assert!(tree.toggle("docs"));
        assert_eq!(paths(&tree.flatten()), vec!["docs", "docs/guide.md"]);
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let err = RepoTree::from_listing([LsTreeElement::tree("src"), LsTreeElement::tree("src")])
            .unwrap_err();
        assert!(matches!(err, TreeError::DuplicatePath(p) if p == "src"));

        let err =
            RepoTree::from_listing([LsTreeElement::blob("a.rs"), LsTreeElement::blob("a.rs")])
                .unwrap_err();
        assert!(matches!(err, TreeError::DuplicatePath(_)));
    }

    #[test]
    fn test_file_used_as_directory_is_rejected() {
        let err = RepoTree::from_listing([
            LsTreeElement::blob("README.md"),
            LsTreeElement::blob("README.md/oops"),
        ])
        .unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory(p) if p == "README.md"));
    }

    #[test]
    fn test_invalid_paths_are_rejected() {
        assert!(matches!(
            RepoTree::from_listing([LsTreeElement::blob("a//b")]),
            Err(TreeError::InvalidPath(_))
        ));
        assert!(RepoTree::from_listing([LsTreeElement::blob("/")]).is_err());
    }

    #[test]
    fn test_submodules_are_skipped() {
        let mut submodule = LsTreeElement::blob("vendor/dep");
        submodule.object_type = ObjectType::Commit;
        let tree = RepoTree::from_listing([LsTreeElement::blob("lib.rs"), submodule]).unwrap();
        assert_eq!(paths(&tree.flatten()), vec!["lib.rs"]);
    }
}

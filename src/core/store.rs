//! Reactive store publishing the repository tree.

use std::collections::BTreeSet;

use leptos::logging::{debug_warn, log};
use leptos::prelude::*;

use super::error::TreeError;
use super::provider::TreeProvider;
use super::tree::RepoTree;
use crate::models::{Entry, parse_listing};

/// Repository tree wrapped in Leptos signals.
///
/// `Copy` like the rest of the app state: every field is a reactive handle.
#[derive(Clone, Copy)]
pub struct RepoStore {
    tree: RwSignal<RepoTree>,
    file_list: Memo<Vec<Entry>>,
    /// Files already handed out for content warm-up. Never read reactively;
    /// bounded by the number of files in the listing.
    warm: StoredValue<BTreeSet<String>>,
}

impl RepoStore {
    pub fn new(tree: RepoTree) -> Self {
        let tree = RwSignal::new(tree);
        Self {
            tree,
            file_list: Memo::new(move |_| tree.with(RepoTree::flatten)),
            warm: StoredValue::new(BTreeSet::new()),
        }
    }

    /// Build a store from a `git ls-tree -r -t` listing, given either as JSON
    /// records or as raw text.
    pub fn load(listing: &str) -> Result<Self, TreeError> {
        Ok(Self::new(RepoTree::from_listing(parse_listing(listing)?)?))
    }

    /// Swap in a new tree snapshot.
    #[cfg(test)]
    pub(crate) fn replace(&self, tree: RepoTree) {
        self.warm.update_value(BTreeSet::clear);
        self.tree.set(tree);
    }
}

impl TreeProvider for RepoStore {
    fn file_list(&self) -> Signal<Vec<Entry>> {
        self.file_list.into()
    }

    fn toggle(&self, path: &str) {
        let mut toggled = false;
        self.tree.update(|tree| toggled = tree.toggle(path));
        if !toggled {
            debug_warn!("toggle ignored for {path}");
        }
    }

    fn prefetch(&self, path: &str) {
        let mut fresh = false;
        self.warm.update_value(|warm| fresh = warm.insert(path.to_string()));
        if fresh {
            log!("prefetch {path}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
040000 tree aaa\tsrc
100644 blob bbb\tsrc/lib.rs
100644 blob ccc\tREADME.md
";

    fn paths(store: &RepoStore) -> Vec<String> {
        store
            .file_list()
            .with_untracked(|entries| entries.iter().map(|e| e.path.clone()).collect())
    }

    #[test]
    fn test_toggle_reemits_sequence() {
        Owner::new().with(|| {
            let store = RepoStore::load(LISTING).unwrap();
            assert_eq!(paths(&store), vec!["src", "README.md"]);

            store.toggle("src");
            assert_eq!(paths(&store), vec!["src", "src/lib.rs", "README.md"]);

            store.toggle("src");
            assert_eq!(paths(&store), vec!["src", "README.md"]);
        });
    }

    #[test]
    fn test_toggle_ignores_files() {
        Owner::new().with(|| {
            let store = RepoStore::load(LISTING).unwrap();
            store.toggle("README.md");
            store.toggle("missing");
            assert_eq!(paths(&store), vec!["src", "README.md"]);
        });
    }

    #[test]
    fn test_prefetch_marks_file_warm_once() {
        Owner::new().with(|| {
            let store = RepoStore::load(LISTING).unwrap();
            store.prefetch("README.md");
            store.prefetch("README.md");
            store.prefetch("src/lib.rs");
            let warm = store.warm.with_value(|warm| warm.iter().cloned().collect::<Vec<_>>());
            assert_eq!(warm, vec!["README.md", "src/lib.rs"]);
        });
    }

    #[test]
    fn test_replace_publishes_new_tree() {
        Owner::new().with(|| {
            let store = RepoStore::load(LISTING).unwrap();
            store.prefetch("README.md");
            store.replace(RepoTree::empty());
            assert!(paths(&store).is_empty());
            assert!(store.warm.with_value(BTreeSet::is_empty));
        });
    }

    #[test]
    fn test_demo_listing_loads() {
        Owner::new().with(|| {
            let store = RepoStore::load(crate::config::DEMO_LISTING).unwrap();
            assert_eq!(
                paths(&store),
                vec!["assets", "src", "Cargo.toml", "index.html", "README.md"]
            );
        });
    }

    #[test]
    fn test_bad_listing_is_an_error() {
        assert!(matches!(
            RepoStore::load("[not json"),
            Err(TreeError::Json(_))
        ));
        assert!(matches!(
            RepoStore::load("garbage"),
            Err(TreeError::InvalidLine(_))
        ));
    }
}

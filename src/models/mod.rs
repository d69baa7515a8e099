//! Data models for the repository tree panel.
//!
//! - [`Entry`], [`EntryKind`] - One row of the flattened tree
//! - [`LsTreeElement`], [`ObjectType`] - `git ls-tree` records the tree is built from

mod entry;
mod listing;

pub use entry::{Entry, EntryKind};
pub use listing::{LsTreeElement, ObjectType, parse_listing, parse_listing_json, parse_ls_tree};

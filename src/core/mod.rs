//! Core logic of the repository file tree.
//!
//! This module provides:
//! - [`RepoTree`] and [`RepoStore`], the collapsible tree and its reactive wrapper
//! - [`TreeNavigator`], which maps clicks, hovers and arrow keys onto selection,
//!   expand/collapse, prefetch and [`OpenFile`] notifications
//! - [`HighlightRule`] and [`RowBinding`], the declarative view state of rows
//! - [`Relay`], the typed event stream carrying [`OpenFile`] to the editor

pub mod error;
mod highlight;
mod navigator;
mod provider;
mod relay;
mod row;
mod selection;
mod store;
mod tree;

pub use error::TreeError;
pub use highlight::HighlightRule;
pub use navigator::{NavKey, TreeNavigator};
pub use provider::{RowFocus, TreeProvider};
pub use relay::{OpenFile, Relay, relay};
pub use row::{Glyph, RowBinding};
pub use selection::{Selected, Selection};
pub use store::RepoStore;
pub use tree::RepoTree;

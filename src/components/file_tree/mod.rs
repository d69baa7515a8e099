//! File tree panel components.
//!
//! Components:
//! - [`FileTree`] - Header plus keyboard-navigable tree
//! - [`VirtualList`] - Virtualized, slot-recycling list of tree rows

#[allow(clippy::module_inception)]
mod file_tree;
mod virtual_list;

pub use file_tree::FileTree;
pub use virtual_list::{ROW_CLASS, VirtualList, VirtualListHandle};

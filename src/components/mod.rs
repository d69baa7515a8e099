//! UI components built with Leptos.
//!
//! - [`file_tree`] - Repository file tree panel and its virtual list
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod file_tree;
pub mod icons;

pub use file_tree::FileTree;

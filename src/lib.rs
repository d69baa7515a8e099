//! Virtualized, keyboard-navigable repository file tree for the browser.
//!
//! - [`core`] - Tree model, navigation controller, highlight and notifications
//! - [`models`] - Entries and `git ls-tree` records
//! - [`components`] - Leptos components (tree panel, virtual list, icons)
//! - [`utils`] - DOM helpers, dynamic stylesheet, virtual window math

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

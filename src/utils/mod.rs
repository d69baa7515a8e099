//! Utility modules for DOM access and virtual list arithmetic.
//!
//! Provides:
//! - [`dom`] - Window/document access, focus and window events
//! - [`DynamicStyle`] - A `<style>` element rewritten wholesale on each change
//! - [`visible_range`], [`slot_index`], [`reveal_scroll_top`] - Virtual window math

pub mod dom;
mod style;
mod viewport;

pub use style::DynamicStyle;
pub use viewport::{reveal_scroll_top, slot_index, visible_range};

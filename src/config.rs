//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The demo listing is loaded at compile time using `include_str!`.

// =============================================================================
// Assets (loaded at compile time)
// =============================================================================

/// Sample `git ls-tree -r -t` listing shown by the demo app (JSON records).
pub const DEMO_LISTING: &str = include_str!("../assets/listing.json");

// =============================================================================
// File Tree Layout
// =============================================================================

/// Title shown above the tree.
pub const TREE_HEADER: &str = "Repository";

/// Fixed height of one tree row in pixels.
pub const ROW_HEIGHT_PX: f64 = 22.0;

/// Horizontal indentation per nesting level in pixels.
pub const INDENT_STEP_PX: usize = 10;

/// Rows rendered above and below the viewport to hide scroll flicker.
pub const OVERSCAN_ROWS: usize = 4;

// =============================================================================
// Styling
// =============================================================================

/// Element id of the `<style>` holding the selected-row rule.
pub const SELECTED_STYLE_ID: &str = "selected-file";

// =============================================================================
// Notifications
// =============================================================================

/// Window `CustomEvent` fired for every opened file, for non-Rust consumers.
pub const OPEN_FILE_EVENT: &str = "editor.open";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::Glyph;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuFile as File,
        LuFolder as Folder, LuFolderOpen as FolderOpened,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFolder2Open as FolderOpened, BsFolderFill as Folder,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPENED, FolderOpened);
themed_icon!(FILE, File);

/// Icon for a row glyph.
pub fn glyph(glyph: Glyph) -> Icon {
    match glyph {
        Glyph::ChevronRight => CHEVRON_RIGHT,
        Glyph::ChevronDown => CHEVRON_DOWN,
        Glyph::Folder => FOLDER,
        Glyph::FolderOpened => FOLDER_OPENED,
        Glyph::File => FILE,
    }
}

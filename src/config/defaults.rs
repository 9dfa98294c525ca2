//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [home] Section Defaults
// ============================================================================

pub mod home {
    use std::path::PathBuf;

    pub fn file() -> PathBuf {
        "Home.md".into()
    }

    pub fn backup() -> PathBuf {
        "Home.md.old".into()
    }

    pub fn start_marker() -> String {
        "<!--start Page Index-->".into()
    }

    pub fn end_marker() -> String {
        "<!--end Page Index-->".into()
    }

    pub fn title() -> String {
        "Page Index".into()
    }
}

// ============================================================================
// [scan] Section Defaults
// ============================================================================

pub mod scan {
    pub fn tag_prefix() -> String {
        "Tags: ".into()
    }

    /// Dotfiles, `_Sidebar.md`, `_Footer.md`, and any name containing `Home.md`.
    pub fn exclude() -> String {
        r"^\..*$|^_Sidebar\.md$|^_Footer\.md$|Home\.md".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    pub fn link_prefix() -> String {
        "wiki/".into()
    }

    pub fn heading_level() -> usize {
        2
    }
}

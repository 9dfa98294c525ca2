//! `[home]` section configuration.
//!
//! Names the home page, its backup, and the marker comments that fence
//! the generated index.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[home]` section in wiki-index.toml - the page the index is spliced into.
///
/// # Example
/// ```toml
/// [home]
/// file = "Home.md"
/// backup = "Home.md.old"
/// start_marker = "<!--start Page Index-->"
/// end_marker = "<!--end Page Index-->"
/// title = "Page Index"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HomeConfig {
    /// Home page file name, relative to the wiki root.
    #[serde(default = "defaults::home::file")]
    #[educe(Default = defaults::home::file())]
    pub file: PathBuf,

    /// Backup written on every run, never deleted.
    #[serde(default = "defaults::home::backup")]
    #[educe(Default = defaults::home::backup())]
    pub backup: PathBuf,

    /// Line (without newline) opening the generated region.
    #[serde(default = "defaults::home::start_marker")]
    #[educe(Default = defaults::home::start_marker())]
    pub start_marker: String,

    /// Line (without newline) closing the generated region.
    #[serde(default = "defaults::home::end_marker")]
    #[educe(Default = defaults::home::end_marker())]
    pub end_marker: String,

    /// Text of the top-level `#` heading.
    #[serde(default = "defaults::home::title")]
    #[educe(Default = defaults::home::title())]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::super::IndexConfig;
    use std::path::PathBuf;

    #[test]
    fn test_home_config_defaults() {
        let config: IndexConfig = toml::from_str("").unwrap();

        assert_eq!(config.home.file, PathBuf::from("Home.md"));
        assert_eq!(config.home.backup, PathBuf::from("Home.md.old"));
        assert_eq!(config.home.start_marker, "<!--start Page Index-->");
        assert_eq!(config.home.end_marker, "<!--end Page Index-->");
        assert_eq!(config.home.title, "Page Index");
    }

    #[test]
    fn test_home_config_partial_override() {
        let config = r#"
            [home]
            file = "README.md"
            title = "Contents"
        "#;
        let config: IndexConfig = toml::from_str(config).unwrap();

        assert_eq!(config.home.file, PathBuf::from("README.md"));
        assert_eq!(config.home.title, "Contents");
        // untouched fields keep defaults
        assert_eq!(config.home.backup, PathBuf::from("Home.md.old"));
        assert_eq!(config.home.start_marker, "<!--start Page Index-->");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [home]
            unknown_field = "should_fail"
        "#;
        let result: Result<IndexConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}

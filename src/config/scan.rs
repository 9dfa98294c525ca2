//! `[scan]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[scan]` section in wiki-index.toml - which pages are read and how tags are found.
///
/// # Example
/// ```toml
/// [scan]
/// tag_prefix = "Tags: "
/// exclude = '^\..*$|^_Sidebar\.md$|^_Footer\.md$|Home\.md'
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Case-sensitive line prefix declaring a page's tags.
    #[serde(default = "defaults::scan::tag_prefix")]
    #[educe(Default = defaults::scan::tag_prefix())]
    pub tag_prefix: String,

    /// Regex of file names to skip. Matched unanchored against the bare name.
    #[serde(default = "defaults::scan::exclude")]
    #[educe(Default = defaults::scan::exclude())]
    pub exclude: String,
}

#[cfg(test)]
mod tests {
    use super::super::IndexConfig;

    #[test]
    fn test_scan_config_defaults() {
        let config: IndexConfig = toml::from_str("").unwrap();

        assert_eq!(config.scan.tag_prefix, "Tags: ");
        assert_eq!(
            config.scan.exclude,
            r"^\..*$|^_Sidebar\.md$|^_Footer\.md$|Home\.md"
        );
    }

    #[test]
    fn test_scan_config_custom() {
        let config = r#"
            [scan]
            tag_prefix = "Labels: "
            exclude = '^_'
        "#;
        let config: IndexConfig = toml::from_str(config).unwrap();

        assert_eq!(config.scan.tag_prefix, "Labels: ");
        assert_eq!(config.scan.exclude, "^_");
    }
}

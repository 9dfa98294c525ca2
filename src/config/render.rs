//! `[render]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in wiki-index.toml - link and heading layout.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Prepended to every link target. GitHub wikis need `wiki/`.
    #[serde(default = "defaults::render::link_prefix")]
    #[educe(Default = defaults::render::link_prefix())]
    pub link_prefix: String,

    /// Number of `#` on first-level tag headings.
    #[serde(default = "defaults::render::heading_level")]
    #[educe(Default = defaults::render::heading_level())]
    pub heading_level: usize,
}

#[cfg(test)]
mod tests {
    use super::super::IndexConfig;

    #[test]
    fn test_render_config_defaults() {
        let config: IndexConfig = toml::from_str("").unwrap();

        assert_eq!(config.render.link_prefix, "wiki/");
        assert_eq!(config.render.heading_level, 2);
    }

    #[test]
    fn test_render_config_override() {
        let config = r#"
            [render]
            link_prefix = ""
            heading_level = 3
        "#;
        let config: IndexConfig = toml::from_str(config).unwrap();

        assert_eq!(config.render.link_prefix, "");
        assert_eq!(config.render.heading_level, 3);
    }
}

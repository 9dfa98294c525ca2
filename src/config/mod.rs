//! Index configuration management for `wiki-index.toml`.
//!
//! The file is optional. Every field defaults to the layout GitHub wikis use,
//! so a wiki without a config file gets `Home.md`, `Tags: ` lines and
//! `wiki/` links.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[home]`    | Home page, backup name, markers, index title     |
//! | `[scan]`    | Tag line prefix and file exclusion pattern       |
//! | `[render]`  | Link prefix and first heading level              |
//!
//! # Example
//!
//! ```toml
//! [home]
//! file = "Home.md"
//! title = "Page Index"
//!
//! [scan]
//! tag_prefix = "Tags: "
//!
//! [render]
//! link_prefix = "wiki/"
//! heading_level = 2
//! ```

pub mod defaults;
mod error;
mod home;
mod render;
mod scan;

use error::ConfigError;
use home::HomeConfig;
use render::RenderConfig;
use scan::ScanConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing wiki-index.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Wiki directory all file names are resolved against
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Path to the config file (set after loading, may not exist)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Home page and markers
    #[serde(default)]
    pub home: HomeConfig,

    /// Page scanning
    #[serde(default)]
    pub scan: ScanConfig,

    /// Markdown layout
    #[serde(default)]
    pub render: RenderConfig,
}

impl IndexConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, falling back to defaults when the file is absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.root = root;
        config.config_path = config_path;
        config.validate()?;

        Ok(config)
    }

    /// Absolute-or-relative path of the home page
    pub fn home_path(&self) -> PathBuf {
        self.root.join(&self.home.file)
    }

    /// Path the home page is renamed to before rewriting
    pub fn backup_path(&self) -> PathBuf {
        self.root.join(&self.home.backup)
    }

    /// Start marker as a full line, newline included
    pub fn start_line(&self) -> String {
        format!("{}\n", self.home.start_marker)
    }

    /// End marker as a full line, newline included
    pub fn end_line(&self) -> String {
        format!("{}\n", self.home.end_marker)
    }

    /// Compile `[scan.exclude]`
    pub fn exclude_regex(&self) -> Result<Regex> {
        Regex::new(&self.scan.exclude).map_err(|err| {
            ConfigError::Validation(format!("[scan.exclude] is not a valid regex: {err}")).into()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (field, marker) in [
            ("[home.start_marker]", &self.home.start_marker),
            ("[home.end_marker]", &self.home.end_marker),
        ] {
            if marker.is_empty() {
                bail!(ConfigError::Validation(format!("{field} must not be empty")));
            }
            if marker.contains('\n') {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a single line"
                )));
            }
        }

        if self.home.start_marker == self.home.end_marker {
            bail!(ConfigError::Validation(
                "[home.start_marker] and [home.end_marker] must differ".into()
            ));
        }

        if self.home.file == self.home.backup {
            bail!(ConfigError::Validation(
                "[home.backup] must differ from [home.file]".into()
            ));
        }

        if self.scan.tag_prefix.is_empty() {
            bail!(ConfigError::Validation(
                "[scan.tag_prefix] must not be empty".into()
            ));
        }

        if self.render.heading_level == 0 {
            bail!(ConfigError::Validation(
                "[render.heading_level] must be at least 1".into()
            ));
        }

        self.exclude_regex()?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

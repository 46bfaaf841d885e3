//! Configuration management for folio.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.
//!
//! The ordered list of known project slugs lives here and nowhere else. Both
//! page routing and content loading read it from [`ContentConfig::slugs`].

use std::collections::HashSet;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "folio";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FOLIO_";

/// Slugs double as file names and URL segments.
const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIO_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/folio/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content document configuration.
    pub content: ContentConfig,
    /// Public asset configuration.
    pub assets: AssetsConfig,
}

/// Where project documents live and which projects exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Site root; relative directories below are resolved against it.
    pub root: PathBuf,
    /// Directory holding one document per project.
    pub projects_dir: PathBuf,
    /// Document file extension, without the dot.
    pub extension: String,
    /// Known project slugs, in display order.
    pub slugs: Vec<String>,
}

/// Public asset directory configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Flat directory the site serves assets from.
    pub public_dir: PathBuf,
    /// Path prefix that marks a project-relative asset in metadata.
    pub prefix: String,
    /// File extensions the publisher copies (case-insensitive, no dot).
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            projects_dir: PathBuf::from("content/projects"),
            extension: "mdx".to_string(),
            slugs: default_slugs(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            prefix: "/projects/".to_string(),
            extensions: default_media_extensions(),
        }
    }
}

/// Default known projects, in display order.
fn default_slugs() -> Vec<String> {
    [
        "techno-maniacs",
        "comsafe",
        "open-source-intake",
        "linear-odo",
        "swerve-drive",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Default image and video extensions.
fn default_media_extensions() -> Vec<String> {
    [
        "jpg", "jpeg", "png", "gif", "webp", // images
        "mp4", "mov", "avi", "webm", // videos
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.content.slugs.is_empty() {
            return Err(Error::config_validation("content.slugs must not be empty"));
        }

        let slug_re = Regex::new(SLUG_PATTERN)
            .map_err(|e| Error::config_validation(format!("bad slug pattern: {e}")))?;
        let mut seen = HashSet::new();
        for slug in &self.content.slugs {
            if !slug_re.is_match(slug) {
                return Err(Error::config_validation(format!(
                    "invalid slug '{slug}': use lowercase letters, digits and single dashes"
                )));
            }
            if !seen.insert(slug.as_str()) {
                return Err(Error::config_validation(format!("duplicate slug '{slug}'")));
            }
        }

        if self.content.extension.is_empty() || self.content.extension.starts_with('.') {
            return Err(Error::config_validation(format!(
                "content.extension must be non-empty without a leading dot, got '{}'",
                self.content.extension
            )));
        }

        let prefix = &self.assets.prefix;
        if prefix.len() < 2 || !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(Error::config_validation(format!(
                "assets.prefix must start and end with '/', got '{prefix}'"
            )));
        }

        if self.assets.extensions.is_empty() {
            return Err(Error::config_validation(
                "assets.extensions must not be empty",
            ));
        }

        Ok(())
    }

    /// Directory holding the project documents, resolved against the root.
    #[must_use]
    pub fn projects_dir(&self) -> PathBuf {
        self.content.root.join(&self.content.projects_dir)
    }

    /// Public asset directory, resolved against the root.
    #[must_use]
    pub fn public_dir(&self) -> PathBuf {
        self.content.root.join(&self.assets.public_dir)
    }

    /// Per-project asset source directory, e.g. `public/projects`.
    #[must_use]
    pub fn asset_source_dir(&self) -> PathBuf {
        self.public_dir().join(self.assets.prefix.trim_matches('/'))
    }
}

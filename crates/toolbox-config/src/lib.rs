//! Configuration management for the site toolbox.
//!
//! Parses `toolbox.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Each helper has its own section. Keys left out keep the helper's
//! defaults, and unknown keys are rejected.
//!
//! ```toml
//! [navigation]
//! depth = 2
//! fold_at = 1
//! sort = "title"
//!
//! [toc]
//! path = "section"
//! title = "Contents"
//!
//! [breadcrumb]
//! separator = " / "
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toolbox_navigation::{NavigationOptions, RenderOptions, TocOptions};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "toolbox.toml";

/// Resolved configuration for every helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Options for `navigation_for`.
    pub navigation: NavigationConfig,
    /// Options for `toc_for`.
    pub toc: TocConfig,
    /// Render options for `breadcrumb_for`.
    pub breadcrumb: RenderOptions,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            toc: TocConfig::default(),
            breadcrumb: RenderOptions::breadcrumb(),
            config_path: None,
        }
    }
}

/// Navigation menu configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    pub render: RenderOptions,
    pub options: NavigationOptions,
}

/// Table of contents configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocConfig {
    pub render: RenderOptions,
    pub options: TocOptions,
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigRaw {
    navigation: SectionRaw,
    toc: SectionRaw,
    breadcrumb: SectionRaw,
}

/// Raw helper section. Every key is optional; extraction keys are only
/// accepted in the section of the helper that uses them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SectionRaw {
    depth: Option<i32>,
    collection_tag: Option<String>,
    collection_class: Option<String>,
    item_tag: Option<String>,
    title_tag: Option<String>,
    title: Option<String>,
    separator: Option<String>,
    kind: Option<String>,
    sort: Option<String>,
    fold_at: Option<usize>,
    path: Option<String>,
}

impl SectionRaw {
    /// Apply the render keys of this section on top of `base`.
    fn render_options(&self, base: RenderOptions) -> RenderOptions {
        RenderOptions {
            depth: self.depth.unwrap_or(base.depth),
            collection_tag: self.collection_tag.clone().unwrap_or(base.collection_tag),
            collection_class: self
                .collection_class
                .clone()
                .unwrap_or(base.collection_class),
            item_tag: self.item_tag.clone().unwrap_or(base.item_tag),
            title_tag: self.title_tag.clone().unwrap_or(base.title_tag),
            title: self.title.clone().or(base.title),
            separator: self.separator.clone().unwrap_or(base.separator),
        }
    }

    /// Reject extraction keys that the section's helper does not use.
    fn reject_keys(&self, section: &str, allowed: &[&str]) -> Result<(), ConfigError> {
        let present = [
            ("kind", self.kind.is_some()),
            ("sort", self.sort.is_some()),
            ("fold_at", self.fold_at.is_some()),
            ("path", self.path.is_some()),
        ];
        for (key, is_set) in present {
            if is_set && !allowed.contains(&key) {
                return Err(ConfigError::Validation(format!(
                    "{section}.{key} is not supported"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a tag name made of ASCII letters and digits.
fn require_tag_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a plain tag name, got {value:?}"
        )));
    }
    Ok(())
}

fn validate_render(render: &RenderOptions, section: &str) -> Result<(), ConfigError> {
    require_tag_name(&render.collection_tag, &format!("{section}.collection_tag"))?;
    require_tag_name(&render.item_tag, &format!("{section}.item_tag"))?;
    require_tag_name(&render.title_tag, &format!("{section}.title_tag"))?;
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `toolbox.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        let config = Self::resolve(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_render(&self.navigation.render, "navigation")?;
        validate_render(&self.toc.render, "toc")?;
        validate_render(&self.breadcrumb, "breadcrumb")?;

        if self.toc.options.path.trim().is_empty() {
            return Err(ConfigError::Validation("toc.path cannot be empty".to_owned()));
        }

        Ok(())
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve raw sections against each helper's defaults.
    fn resolve(raw: &ConfigRaw) -> Result<Self, ConfigError> {
        raw.navigation
            .reject_keys("navigation", &["kind", "sort", "fold_at"])?;
        raw.toc.reject_keys("toc", &["path"])?;
        raw.breadcrumb.reject_keys("breadcrumb", &[])?;

        let navigation = NavigationConfig {
            render: raw.navigation.render_options(RenderOptions::default()),
            options: NavigationOptions {
                kind: raw.navigation.kind.clone(),
                sort: raw.navigation.sort.clone(),
                fold_at: raw.navigation.fold_at,
            },
        };

        let toc = TocConfig {
            render: raw.toc.render_options(RenderOptions::default()),
            options: raw
                .toc
                .path
                .clone()
                .map(|path| TocOptions { path })
                .unwrap_or_default(),
        };

        Ok(Self {
            navigation,
            toc,
            breadcrumb: raw.breadcrumb.render_options(RenderOptions::breadcrumb()),
            config_path: None,
        })
    }
}

//! Configuration management for the template generator.
//!
//! Parses `promail.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The file sets the design defaults a new form starts with, adds custom
//! color schemes next to the built-in presets, and configures where
//! exported documents are written.
//!
//! ```toml
//! [design]
//! font_family = "'Helvetica', sans-serif"
//! color_scheme = "brand"
//! layout_style = "card-style"
//! button_style = "pill"
//!
//! [schemes.brand]
//! primary = "#112233"
//! bg = "#ffffff"
//! text = "#111111"
//!
//! [export]
//! dir = "${HOME}/emails"
//! ```
//!
//! Per-submission design changes can be applied during load via
//! [`DesignOverrides`].
//!
//! ## Environment Variable Expansion
//!
//! `export.dir` supports `~`, `${VAR}` and `${VAR:-default}`.

mod expand;
mod scheme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pm_renderer::{ButtonStyle, DEFAULT_FONT_FAMILY, LayoutStyle};
use serde::Deserialize;

pub use scheme::{BUILTIN_SCHEMES, ColorScheme, DEFAULT_SCHEME};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "promail.toml";

/// Design settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct DesignOverrides {
    /// Override the font stack.
    pub font_family: Option<String>,
    /// Override the color scheme name.
    pub color_scheme: Option<String>,
    /// Override the layout style.
    pub layout_style: Option<LayoutStyle>,
    /// Override the button style.
    pub button_style: Option<ButtonStyle>,
}

/// Design choices applied to every new email.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// CSS font stack.
    pub font_family: String,
    /// Name of a built-in or configured color scheme.
    pub color_scheme: String,
    pub layout_style: LayoutStyle,
    pub button_style: ButtonStyle,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            color_scheme: DEFAULT_SCHEME.to_owned(),
            layout_style: LayoutStyle::default(),
            button_style: ButtonStyle::default(),
        }
    }
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportConfigRaw {
    dir: Option<String>,
    file_name: Option<String>,
}

/// Resolved export configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory exported documents are written to.
    pub dir: PathBuf,
    /// File name of exported documents.
    pub file_name: String,
}

impl ExportConfig {
    /// Full path of the exported document.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: pm_renderer::HtmlDocument::DEFAULT_FILE_NAME.to_owned(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Design defaults.
    pub design: DesignSettings,
    /// Custom color schemes keyed by name.
    schemes: BTreeMap<String, ColorScheme>,
    #[serde(default)]
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
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
    /// TOML parsing error (including malformed colors).
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.dir`").
        field: String,
        /// Error message (e.g., "${`HOME`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional design overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `promail.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&DesignOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply design overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &DesignOverrides) {
        if let Some(font_family) = &overrides.font_family {
            self.design.font_family.clone_from(font_family);
        }
        if let Some(color_scheme) = &overrides.color_scheme {
            self.design.color_scheme.clone_from(color_scheme);
        }
        if let Some(layout_style) = overrides.layout_style {
            self.design.layout_style = layout_style;
        }
        if let Some(button_style) = overrides.button_style {
            self.design.button_style = button_style;
        }
    }

    /// Look up a color scheme by name.
    ///
    /// Configured schemes shadow built-in presets of the same name.
    #[must_use]
    pub fn scheme(&self, name: &str) -> Option<ColorScheme> {
        self.schemes
            .get(name)
            .copied()
            .or_else(|| scheme::builtin(name))
    }

    /// The color scheme selected by `design.color_scheme`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the name is unknown.
    pub fn active_scheme(&self) -> Result<ColorScheme, ConfigError> {
        self.scheme(&self.design.color_scheme).ok_or_else(|| {
            ConfigError::Validation(format!(
                "design.color_scheme: unknown scheme {:?}",
                self.design.color_scheme
            ))
        })
    }

    /// Names of every available scheme, built-in first, then configured ones.
    #[must_use]
    pub fn scheme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILTIN_SCHEMES.iter().map(|(name, _)| *name).collect();
        for name in self.schemes.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
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
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_export(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.design.font_family, "design.font_family")?;
        self.active_scheme()?;
        for name in self.schemes.keys() {
            require_non_empty(name, "schemes.<name>")?;
        }
        require_non_empty(&self.export_resolved.file_name, "export.file_name")?;
        Ok(())
    }

    /// Expand and resolve the export directory relative to the config directory.
    fn resolve_export(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let dir = match &self.export.dir {
            Some(dir) => config_dir.join(expand::expand_env(dir, "export.dir")?),
            None => config_dir.to_path_buf(),
        };
        let file_name = self
            .export
            .file_name
            .clone()
            .unwrap_or_else(|| pm_renderer::HtmlDocument::DEFAULT_FILE_NAME.to_owned());
        self.export_resolved = ExportConfig { dir, file_name };
        Ok(())
    }
}

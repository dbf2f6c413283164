//! Settings persisted in `config.toml` under the application root.
//!
//! A missing file yields defaults and is written back so operators have
//! something to edit. Command-line overrides are applied on top by
//! [`LaunchOptions::apply`](crate::launch::LaunchOptions::apply).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::app_dirs;
use crate::ml::DEFAULT_MODEL_FILE;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Smallest window the form lays out in.
pub const MIN_WINDOW_SIZE: [f32; 2] = [420.0, 560.0];

/// Errors raised while reading or writing `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Deployment flavour of the form. Both run the same inference; only
/// wording and styling differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationVariant {
    /// Full-width header, feature definitions and footer.
    #[default]
    Standard,
    /// Plain header with a short trigger label.
    Compact,
}

impl PresentationVariant {
    pub fn title(self) -> &'static str {
        match self {
            Self::Standard => "Dental Implant Clinical Decision Support System (CDSS)",
            Self::Compact => "Dental Implant CDSS",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Standard => "Run Prediction",
            Self::Compact => "Predict",
        }
    }

    pub fn shows_footer(self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl FromStr for PresentationVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(format!(
                "Unknown variant '{other}' (expected standard or compact)"
            )),
        }
    }
}

/// Application settings stored in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Model artifact; relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default)]
    pub variant: PresentationVariant,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            variant: PresentationVariant::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Clamp window dimensions so the form always fits.
    pub fn normalized(mut self) -> Self {
        self.window_width = clamp_dimension(self.window_width, MIN_WINDOW_SIZE[0]);
        self.window_height = clamp_dimension(self.window_height, MIN_WINDOW_SIZE[1]);
        self
    }

    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width, self.window_height]
    }
}

fn clamp_dimension(value: f32, min: f32) -> f32 {
    if value.is_finite() { value.max(min) } else { min }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}

fn default_window_width() -> f32 {
    720.0
}

fn default_window_height() -> f32 {
    860.0
}

/// Resolve the configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app root, writing defaults when no file exists yet.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from(&path);
    }
    let settings = AppSettings::default();
    save_to_path(&settings, &path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(settings)
}

/// Settings for one launch; never fails.
///
/// When `config.toml` is unusable, every key that still decodes on its own
/// is kept and the rest fall back to defaults, so a bad `variant` does not
/// discard a valid `model_path`.
pub fn load_or_fallback() -> AppSettings {
    let err = match load_or_default() {
        Ok(settings) => return settings,
        Err(err) => err,
    };
    let path = config_path().ok();
    let settings = path
        .as_deref()
        .and_then(salvage_from)
        .unwrap_or_default();
    tracing::warn!(
        error = %err,
        config = ?path,
        model_path = %settings.model_path.display(),
        "Ignoring invalid keys in config"
    );
    settings
}

fn salvage_from(path: &Path) -> Option<AppSettings> {
    let text = std::fs::read_to_string(path).ok()?;
    let table: toml::Table = text.parse().ok()?;
    Some(salvage(&table))
}

fn salvage(table: &toml::Table) -> AppSettings {
    fn key<T: DeserializeOwned>(table: &toml::Table, name: &str) -> Option<T> {
        table.get(name)?.clone().try_into().ok()
    }
    AppSettings {
        model_path: key(table, "model_path").unwrap_or_else(default_model_path),
        variant: key(table, "variant").unwrap_or_default(),
        window_width: key(table, "window_width").unwrap_or_else(default_window_width),
        window_height: key(table, "window_height").unwrap_or_else(default_window_height),
    }
    .normalized()
}

/// Parse settings from a specific TOML file.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

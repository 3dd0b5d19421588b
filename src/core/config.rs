use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Environment variable overriding the backend base URL.
pub const ENV_API_BASE_URL: &str = "CONVERSORS_API_BASE_URL";
/// Environment variable overriding the backend API key.
pub const ENV_API_KEY: &str = "CONVERSORS_API_KEY";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
}

/// Backend API settings shared by every remote form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Value sent in the `api-key` header
    pub api_key: String,
    /// Request timeout in seconds, 0 = no timeout
    pub timeout_secs: u64,
}

/// Settings for the Markdown PDF export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSettings {
    /// File name of the exported document
    pub filename: String,
    /// Directory the document is written to (tilde expanded)
    pub output_dir: String,
}

impl PdfSettings {
    /// Full path of the exported document, with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let dir = shellexpand::tilde(&self.output_dir);
        Path::new(dir.as_ref()).join(&self.filename)
    }
}

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api: ApiSettings,
    pub pdf: PdfSettings,
}

/// One partially-specified configuration source.
///
/// Every key is optional so that user and project files only need to name
/// what they override.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsLayer {
    #[serde(default)]
    pub api: ApiLayer,
    #[serde(default)]
    pub pdf: PdfLayer,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiLayer {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PdfLayer {
    pub filename: Option<String>,
    pub output_dir: Option<String>,
}

impl SettingsLayer {
    /// Parses a configuration layer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a configuration layer from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Builds a layer from environment lookups.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api: ApiLayer {
                base_url: lookup(ENV_API_BASE_URL),
                api_key: lookup(ENV_API_KEY),
                timeout_secs: None,
            },
            pdf: PdfLayer::default(),
        }
    }
}

impl Settings {
    /// Builds complete settings from a single layer; every key must be present.
    pub fn from_layer(layer: SettingsLayer) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiSettings {
                base_url: layer.api.base_url.ok_or(ConfigError::Missing("api.base_url"))?,
                api_key: layer.api.api_key.ok_or(ConfigError::Missing("api.api_key"))?,
                timeout_secs: layer
                    .api
                    .timeout_secs
                    .ok_or(ConfigError::Missing("api.timeout_secs"))?,
            },
            pdf: PdfSettings {
                filename: layer.pdf.filename.ok_or(ConfigError::Missing("pdf.filename"))?,
                output_dir: layer
                    .pdf
                    .output_dir
                    .ok_or(ConfigError::Missing("pdf.output_dir"))?,
            },
        })
    }

    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../config.toml");
        Self::from_layer(SettingsLayer::from_toml(content)?)
    }

    /// Loads settings with overrides from standard locations.
    ///
    /// Sources in priority order (later wins):
    /// 1. Built-in defaults
    /// 2. `~/.config/conversors/config.toml`
    /// 3. `./conversors.toml`
    /// 4. `CONVERSORS_API_BASE_URL` / `CONVERSORS_API_KEY`
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("conversors").join("config.toml");
            settings.merge_file(&user_config_path);
        }

        settings.merge_file(Path::new("conversors.toml"));
        settings.merge(SettingsLayer::from_env_with(|key| std::env::var(key).ok()));

        Ok(settings)
    }

    /// Merges a config file if it exists; unreadable files are skipped with a warning.
    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match SettingsLayer::load_from_file(path) {
            Ok(layer) => self.merge(layer),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping config file"),
        }
    }

    /// Merges a layer into these settings. Keys present in `layer` win.
    pub fn merge(&mut self, layer: SettingsLayer) {
        if let Some(base_url) = layer.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(api_key) = layer.api.api_key {
            self.api.api_key = api_key;
        }
        if let Some(timeout_secs) = layer.api.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(filename) = layer.pdf.filename {
            self.pdf.filename = filename;
        }
        if let Some(output_dir) = layer.pdf.output_dir {
            self.pdf.output_dir = output_dir;
        }
    }
}

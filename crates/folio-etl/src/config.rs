use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::load::DEFAULT_BASE_URL;

/// Configuration for folio.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (FOLIO_* prefix)
/// 3. Config file (~/.config/folio/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog file (JSON or TOML).
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/books.json
    /// - ENV: FOLIO_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/books.json"
    /// - Default: ~/.local/share/folio/catalog.json
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Most recommendations shown per query.
    ///
    /// Accepts a string as well, since environment values arrive as text.
    #[serde(default = "default_max_results", deserialize_with = "deserialize_count")]
    pub max_results: usize,

    /// Log filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Site that relative book links in the catalog are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            max_results: default_max_results(),
            log_level: default_log_level(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/folio/config.toml
    /// Reads environment variables with FOLIO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("folio");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom catalog path.
    ///
    /// This is used when the --catalog CLI flag is provided.
    pub fn load_with_catalog_path(catalog_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.catalog_path = catalog_path;
        Ok(config)
    }

    /// Look up a setting by its config-file key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "catalog_path" => Ok(self.catalog_path.display().to_string()),
            "max_results" => Ok(self.max_results.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            "base_url" => Ok(self.base_url.clone()),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: {}",
                key,
                KEYS.join(", ")
            ),
        }
    }
}

/// Keys accepted by [`Config::get`].
pub const KEYS: &[&str] = &["catalog_path", "max_results", "log_level", "base_url"];

/// Get the default catalog path.
///
/// Returns: ~/.local/share/folio/catalog.json (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("catalog.json")
}

fn default_max_results() -> usize {
    5
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountValue {
    Number(usize),
    Text(String),
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match CountValue::deserialize(deserializer)? {
        CountValue::Number(n) => Ok(n),
        CountValue::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/folio/config.toml
/// - macOS: ~/Library/Application Support/folio/config.toml
/// - Windows: %APPDATA%\folio\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Folio Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (FOLIO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the book catalog (JSON or TOML)
#
# Can also be set via:
# - CLI: folio --catalog /custom/books.json recommend "space opera"
# - Environment: FOLIO_CATALOG_PATH=/custom/books.json
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/catalog.json"

# Most recommendations shown per query
max_results = 5

# Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
log_level = "info"

# Site that relative book links in the catalog are resolved against
base_url = "https://www.goodreads.com"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

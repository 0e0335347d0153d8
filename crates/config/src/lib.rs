//! Configuration loading, validation, and management for the partner logo
//! resolver.
//!
//! Loads configuration from `~/.partnerlogo/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Brand-asset gateway used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://gateway.skyscanner.net/brand-assets/v2/assets/";

/// Virgin America; preselected for airline logos.
pub const DEFAULT_ASSET_ID: &str = "0c981a80-89de-11e8-bf8d-cf6959597582";

/// Image shown before anything is resolved and for missing variants.
pub const DEFAULT_IMAGE_URL: &str =
    "https://content.skyscnr.com/31e840b1de551df383d816b953b1a568/ai-template-virgin-america-full-1.svg";

/// The root configuration structure.
///
/// Maps directly to `~/.partnerlogo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Remote brand-asset service
    #[serde(default)]
    pub service: ServiceConfig,

    /// Default and fallback asset values
    #[serde(default)]
    pub assets: AssetDefaultsConfig,

    /// Persistent cache backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Static asset catalog
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Rendering surface defaults
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Prefix the asset id is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout for a single request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDefaultsConfig {
    /// Airline asset selected when none is chosen
    #[serde(default = "default_asset_id")]
    pub default_asset_id: String,

    /// Seed image for instances with no usable cache entry
    #[serde(default = "default_image_url")]
    pub default_image_url: String,

    /// Substituted for any variant the service does not provide
    #[serde(default = "default_image_url")]
    pub placeholder_image_url: String,

    /// Substituted when the service provides no accent color
    #[serde(default = "default_background")]
    pub fallback_background: String,
}

fn default_asset_id() -> String {
    DEFAULT_ASSET_ID.into()
}
fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.into()
}
fn default_background() -> String {
    "transparent".into()
}

impl Default for AssetDefaultsConfig {
    fn default() -> Self {
        Self {
            default_asset_id: default_asset_id(),
            default_image_url: default_image_url(),
            placeholder_image_url: default_image_url(),
            fallback_background: default_background(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// One of "file", "sqlite", "memory", "none"
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Backend file; defaults live under the config dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_store_backend() -> String {
    "file".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: None,
        }
    }
}

pub const STORE_BACKENDS: [&str; 4] = ["file", "sqlite", "memory", "none"];

impl StoreConfig {
    /// Resolved on-disk location for file-based backends.
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return PathBuf::from(path);
        }
        let file = match self.backend.as_str() {
            "sqlite" => "cache.sqlite",
            _ => "cache.json",
        };
        AppConfig::config_dir().join(file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON array of `{id, name, owner}` records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| AppConfig::config_dir().join("catalog.json"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    180.0
}
fn default_height() -> f64 {
    90.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.partnerlogo/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `PARTNERLOGO_BASE_URL`
    /// - `PARTNERLOGO_STORE`
    /// - `PARTNERLOGO_CATALOG`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("PARTNERLOGO_BASE_URL") {
            self.service.base_url = base_url;
        }
        if let Some(backend) = lookup("PARTNERLOGO_STORE") {
            self.store.backend = backend;
        }
        if let Some(catalog) = lookup("PARTNERLOGO_CATALOG") {
            self.catalog.path = Some(catalog);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".partnerlogo")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.service.base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "service.base_url must start with http:// or https:// (got {base})"
            )));
        }

        if self.service.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "service.timeout_secs must be > 0".into(),
            ));
        }

        if !STORE_BACKENDS.contains(&self.store.backend.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "store.backend must be one of {} (got {})",
                STORE_BACKENDS.join(", "),
                self.store.backend
            )));
        }

        if self.render.width <= 0.0 || self.render.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "render.width and render.height must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.store.backend, "file");
        assert_eq!(config.render.width, 180.0);
        assert_eq!(config.render.height, 90.0);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.service.base_url, config.service.base_url);
        assert_eq!(parsed.assets.default_asset_id, config.assets.default_asset_id);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            r#"
[store]
backend = "sqlite"
path = "/var/cache/logos.sqlite"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(tmp.path()).unwrap();
        assert_eq!(config.store.backend, "sqlite");
        assert_eq!(config.store.resolved_path(), PathBuf::from("/var/cache/logos.sqlite"));
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.assets.placeholder_image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn non_http_base_url_rejected() {
        let mut config = AppConfig::default();
        config.service.base_url = "ftp://assets.example.com/".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_store_backend_rejected() {
        let mut config = AppConfig::default();
        config.store.backend = "redis".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("redis"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = AppConfig::default();
        config.service.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "[service\nbase_url = ").unwrap();
        let err = AppConfig::load_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().store.backend, "file");
    }

    #[test]
    fn env_overrides_take_priority() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PARTNERLOGO_BASE_URL", "http://localhost:9000/assets/"),
            ("PARTNERLOGO_STORE", "memory"),
            ("PARTNERLOGO_CATALOG", "/data/catalog.json"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.service.base_url, "http://localhost:9000/assets/");
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.catalog.resolved_path(), PathBuf::from("/data/catalog.json"));
    }

    #[test]
    fn default_store_paths_follow_backend() {
        let file = StoreConfig::default();
        assert!(file.resolved_path().ends_with("cache.json"));

        let sqlite = StoreConfig {
            backend: "sqlite".into(),
            path: None,
        };
        assert!(sqlite.resolved_path().ends_with("cache.sqlite"));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("brand-assets"));
        assert!(toml_str.contains("transparent"));
    }
}

//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver (directories only)
//!
//! Loads and saves settings as TOML from the cross-platform config path
//! using the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Every section defaults independently, so partial files are fine
//! - Async load/save for smooth integration with Tokio
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::{AppError, AppResult};
use crate::util::debounce::DebounceConfig;

/// Default durable-storage key for the persisted filter subset.
pub const DEFAULT_PREFS_KEY: &str = "marketplace-filters";

/// Timer settings for the filter controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet period before typed search text is applied.
    #[serde(with = "humantime_serde")]
    pub search_debounce: Duration,

    /// Delay between hiding the detail overlay and dropping its listing.
    #[serde(with = "humantime_serde")]
    pub detail_dismiss_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_debounce: DebounceConfig::search_input().delay,
            detail_dismiss_delay: DebounceConfig::overlay_dismiss().delay,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub const fn search(&self) -> DebounceConfig {
        DebounceConfig {
            delay: self.search_debounce,
        }
    }

    #[must_use]
    pub const fn dismiss(&self) -> DebounceConfig {
        DebounceConfig {
            delay: self.detail_dismiss_delay,
        }
    }
}

/// Filter persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// When false, filters are never restored or saved.
    pub enabled: bool,

    pub prefs_key: String,

    /// Preference file; defaults to `prefs.json` in the data dir.
    pub prefs_file: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefs_key: DEFAULT_PREFS_KEY.to_string(),
            prefs_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,

    /// Log directory; defaults to `logs/` in the data dir.
    pub log_dir: Option<PathBuf>,

    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "catalog".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the built-in listings.
    pub file: Option<PathBuf>,
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,

    pub storage: StorageConfig,

    pub logging: LoggingConfig,

    pub catalog: CatalogConfig,
}

impl Config {
    /// Loads config from the XDG-compliant app config dir, creating a default
    /// file on first run.
    pub async fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_path()?).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if TokioFs::try_exists(path).await.unwrap_or(false) {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })?;
            Self::from_toml_str(&text)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    /// Parses TOML without touching the filesystem.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Saves config to the XDG-compliant app config dir.
    pub async fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_path()?).await
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        info!("Saving config to {}", path.display());

        let io_err = |source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await.map_err(io_err)?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> AppResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Preference file, honouring the configured override.
    pub fn prefs_path(&self) -> AppResult<PathBuf> {
        match &self.storage.prefs_file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("prefs.json")),
        }
    }

    /// Log directory, honouring the configured override.
    pub fn log_dir(&self) -> AppResult<PathBuf> {
        match &self.logging.log_dir {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("logs")),
        }
    }
}

fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("org", "marketplace", "Catalog")
        .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.timing.search_debounce, Duration::from_millis(300));
        assert_eq!(cfg.timing.detail_dismiss_delay, Duration::from_millis(200));
        assert_eq!(cfg.storage.prefs_key, DEFAULT_PREFS_KEY);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [timing]
            search_debounce = "150ms"

            [storage]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.timing.search().delay, Duration::from_millis(150));
        assert_eq!(cfg.timing.dismiss().delay, Duration::from_millis(200));
        assert!(!cfg.storage.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = Config::from_toml_str("[timing]\nsearch_debounce = 12").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn explicit_paths_override_data_dir() {
        let mut cfg = Config::default();
        cfg.storage.prefs_file = Some(PathBuf::from("/tmp/prefs.json"));
        cfg.logging.log_dir = Some(PathBuf::from("/tmp/logs"));
        assert_eq!(cfg.prefs_path().unwrap(), PathBuf::from("/tmp/prefs.json"));
        assert_eq!(cfg.log_dir().unwrap(), PathBuf::from("/tmp/logs"));
    }

    #[tokio::test]
    async fn load_creates_default_file_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");

        let first = Config::load_from(&path).await.unwrap();
        assert!(path.exists());

        let mut edited = first.clone();
        edited.logging.level = "debug".to_string();
        edited.save_to(&path).await.unwrap();

        let second = Config::load_from(&path).await.unwrap();
        assert_eq!(second.logging.level, "debug");
        assert_eq!(second.timing, first.timing);
    }
}

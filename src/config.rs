use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_QUALITY;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Private directory holding the photo files.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// JPEG quality (1-100) for saved photos.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("portfolio/photos")
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            quality: default_quality(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_tab_titles")]
    pub tab_titles: Vec<String>,

    #[serde(default = "default_slots_per_tab")]
    pub slots_per_tab: usize,
}

fn default_tab_titles() -> Vec<String> {
    vec![
        "Favourite Photos".to_string(),
        "Favourite Photos Two".to_string(),
        "My Documents 1".to_string(),
        "My Documents 2".to_string(),
    ]
}

fn default_slots_per_tab() -> usize {
    6
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tab_titles: default_tab_titles(),
            slots_per_tab: default_slots_per_tab(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "portfolio=debug".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for the file fallback. Defaults to the data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

impl Config {
    /// Load from the default location, writing a default config if none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::query::{SearchOptions, DEFAULT_MIN_SCORE};

/// Catalog shipped with the repository, relative to the working directory.
const BUNDLED_CATALOG: &str = "data/items.json";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Number of result cards rendered.
    pub max_results: usize,
}

/// Catalog and asset locations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Override the catalog file.
    pub path: Option<PathBuf>,
    /// Override the directory containing `images/`.
    pub assets_dir: Option<PathBuf>,
}

/// Fuzzy search tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results scoring at or below this similarity are hidden.
    pub min_score: u8,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            max_results: 4,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/kynseed-rating/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved catalog file (override or the bundled catalog).
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(BUNDLED_CATALOG))
    }

    /// Resolved assets root (override or the working directory).
    pub fn assets_dir(&self) -> PathBuf {
        self.catalog
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            min_score: self.search.min_score,
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("kynseed-rating").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

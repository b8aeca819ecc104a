//! Configuration for the console

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Color, TextStyle};
use crate::renderer::RootConsole;

/// Console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid width in cells
    pub columns: usize,
    /// Grid height in cells
    pub rows: usize,
    /// Style applied when the root console is cleared
    pub default_style: TextStyle,
    /// Background treated as transparent when the root console is blitted
    pub ignore_color: Option<Color>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 15,
            default_style: TextStyle::default(),
            ignore_color: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/retro-console/config.json
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(err) => tracing::warn!(
                        path = %config_path.display(),
                        %err,
                        "ignoring unreadable config"
                    ),
                }
            }
        }
        Self::default()
    }

    /// Create a cleared root console with the configured size and style
    pub fn build_console(&self) -> RootConsole {
        let mut console = RootConsole::new(self.columns, self.rows);
        console.set_default_style(self.default_style);
        if let Some(color) = self.ignore_color {
            console.set_ignore_color(color);
        }
        console.clear();
        console
    }
}

/// Get the default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("retro-console")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use super::keymap::KeyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BOOKING_URL: &str = "https://cal.example.com/paver/intro";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub keymap: KeyConfig,
    pub catalog_path: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub transcript_path: Option<PathBuf>,
    pub booking_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keymap: KeyConfig::default(),
            catalog_path: None,
            export_dir: None,
            transcript_path: None,
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `~/.config/paver/config.toml`, falling back to defaults when
    /// the file is missing or broken.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "using default config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "no config file");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path.clone().unwrap_or_else(|| {
            config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("catalog.toml")
        })
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("exports")
        })
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("paver");
        path
    })
}

pub fn data_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("share");
        path.push("paver");
        path
    })
}

pub fn state_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("paver");
        path
    })
}

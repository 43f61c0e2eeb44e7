//! User settings
//!
//! Loaded from a RON file in the platform config directory, with fallback to
//! built-in defaults. Only presentation and loop tuning live here; listings
//! themselves are never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up inside the config directory
pub const SETTINGS_FILE: &str = "settings.ron";

/// Settings loading/saving errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Screen text and event loop tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Heading shown above the form
    pub heading: String,
    /// Placeholder for the empty title input
    pub title_placeholder: String,
    /// Placeholder for the empty price input
    pub price_placeholder: String,
    /// Label on the submit control
    pub submit_label: String,
    /// How long one event poll waits before checking again (ms)
    pub poll_interval_ms: u64,
    /// Capture mouse clicks and scrolling
    pub mouse_capture: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            heading: "Real Estate Listings".to_string(),
            title_placeholder: "Property title".to_string(),
            price_placeholder: "Price".to_string(),
            submit_label: "Add Listing".to_string(),
            poll_interval_ms: 250,
            mouse_capture: true,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        Self::load_or_default(&settings_path())
    }

    /// Load from `path`; a missing file gives defaults quietly, a bad one
    /// gives defaults with a warning
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("{}. Using default settings.", e);
            Self::default()
        })
    }

    /// Load from a specific RON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write these settings as pretty RON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Get the config directory path
pub fn config_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "listing-board", "ListingBoard") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(".")
    }
}

/// Full path of the settings file
pub fn settings_path() -> PathBuf {
    config_directory().join(SETTINGS_FILE)
}

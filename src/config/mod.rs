//! Configuration
//!
//! Handles user settings stored alongside other per-user config.

pub mod settings;

pub use settings::{
    ConfigError, Settings, SETTINGS_FILE,
    config_directory, settings_path,
};

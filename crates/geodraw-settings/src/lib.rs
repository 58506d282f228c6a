//! GeoDraw Settings Crate
//!
//! Handles application configuration: placement thresholds, display
//! precision, file defaults and the recent-files list.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, DisplaySettings, FileSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

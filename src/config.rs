use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DeckTuning;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub deck: DeckSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Backend root, e.g. `http://10.0.2.2:3000/api` against a local
    /// emulator bridge.
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    /// Opaque session token, when the host already holds one.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_swipe_threshold_fraction")]
    pub swipe_threshold_fraction: f64,
    #[serde(default = "default_max_rotation_deg")]
    pub max_rotation_deg: f64,
    #[serde(default = "default_stack_depth")]
    pub stack_depth: usize,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            swipe_threshold_fraction: default_swipe_threshold_fraction(),
            max_rotation_deg: default_max_rotation_deg(),
            stack_depth: default_stack_depth(),
        }
    }
}

fn default_viewport_width() -> f64 { 375.0 }
fn default_swipe_threshold_fraction() -> f64 { 0.3 }
fn default_max_rotation_deg() -> f64 { 15.0 }
fn default_stack_depth() -> usize { 2 }

impl DeckSettings {
    pub fn tuning(&self) -> DeckTuning {
        DeckTuning {
            viewport_width: self.viewport_width,
            swipe_threshold_fraction: self.swipe_threshold_fraction,
            max_rotation_deg: self.max_rotation_deg,
            stack_depth: self.stack_depth,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ESPE_)
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ESPE_)
            // e.g., ESPE__API__BASE_URL -> api.base_url
            .add_source(
                Environment::with_prefix("ESPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ESPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_settings() {
        let deck = DeckSettings::default();
        assert_eq!(deck.viewport_width, 375.0);
        assert_eq!(deck.swipe_threshold_fraction, 0.3);
        assert_eq!(deck.max_rotation_deg, 15.0);
        assert_eq!(deck.stack_depth, 2);
    }

    #[test]
    fn test_tuning_threshold_from_settings() {
        let deck = DeckSettings {
            viewport_width: 400.0,
            swipe_threshold_fraction: 0.25,
            ..DeckSettings::default()
        };
        assert_eq!(deck.tuning().threshold_px(), 100.0);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
    }
}

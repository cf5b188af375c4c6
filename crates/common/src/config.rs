//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::FlightframeResult;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default conversion settings.
    pub conversion: ConversionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default trajectory conversion parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionDefaults {
    /// Scene frame rate used for time-to-frame mapping.
    pub fps: f64,

    /// Constant shift applied to all computed frame indices.
    pub frame_offset: i64,

    /// Insert a keyframe every N frames.
    pub keyframe_step: i64,

    /// Whether to integrate roll rate into a rotation channel.
    pub animate_rotation: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "flightframe=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            conversion: ConversionDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ConversionDefaults {
    fn default() -> Self {
        Self {
            fps: 24.0,
            frame_offset: 0,
            keyframe_step: 1,
            animate_rotation: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> FlightframeResult<()> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("flightframe").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert!(config.conversion.fps > 0.0);
        assert_eq!(config.conversion.frame_offset, 0);
        assert_eq!(config.conversion.keyframe_step, 1);
        assert!(!config.conversion.animate_rotation);
    }

    #[test]
    fn test_save_then_load_roundtrips_through_disk() {
        let dir = std::env::temp_dir().join("flightframe-config-test");
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        let mut config = AppConfig::default();
        config.conversion.fps = 60.0;
        config.conversion.keyframe_step = 3;
        config.save().unwrap();

        assert!(config_file_path().exists());
        let loaded = AppConfig::load();
        assert_eq!(loaded.conversion.fps, 60.0);
        assert_eq!(loaded.conversion.keyframe_step, 3);

        std::env::remove_var("XDG_CONFIG_HOME");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.conversion.keyframe_step, config.conversion.keyframe_step);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}

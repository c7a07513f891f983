//! Picker configuration
//!
//! Timing of the two chained timers plus the log verbosity. Stored in the
//! browser as JSON; anything that fails validation falls back to defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max} ms (got {value})")]
    DurationOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Quiet interval after the last touch change before loading begins.
    pub debounce_ms: u32,
    /// Length of the suspense phase before a touch is picked.
    pub loading_ms: u32,
    pub log_level: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
            loading_ms: Self::DEFAULT_LOADING_MS,
            log_level: "info".to_string(),
        }
    }
}

impl PickerConfig {
    pub const DEFAULT_DEBOUNCE_MS: u32 = 1500;
    pub const DEFAULT_LOADING_MS: u32 = 1500;
    pub const MIN_DURATION_MS: u32 = 100;
    pub const MAX_DURATION_MS: u32 = 10_000;

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_duration("debounceMs", self.debounce_ms)?;
        Self::check_duration("loadingMs", self.loading_ms)?;
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn loading(&self) -> Duration {
        Duration::from_millis(u64::from(self.loading_ms))
    }

    fn check_duration(field: &'static str, value: u32) -> Result<(), ConfigError> {
        if (Self::MIN_DURATION_MS..=Self::MAX_DURATION_MS).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::DurationOutOfRange {
                field,
                value,
                min: Self::MIN_DURATION_MS,
                max: Self::MAX_DURATION_MS,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce(), Duration::from_millis(1500));
        assert_eq!(config.loading(), Duration::from_millis(1500));
    }

    #[test]
    fn parses_camel_case_options() {
        let config = PickerConfig::from_json(r#"{"debounceMs": 1000, "loadingMs": 3000}"#).unwrap();
        assert_eq!(config.debounce_ms, 1000);
        assert_eq!(config.loading_ms, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn rejects_zero_debounce() {
        let err = PickerConfig::from_json(r#"{"debounceMs": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DurationOutOfRange { field: "debounceMs", value: 0, .. }
        ));
    }

    #[test]
    fn rejects_overlong_loading() {
        let config = PickerConfig {
            loading_ms: 60_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DurationOutOfRange { field: "loadingMs", .. })
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = PickerConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            PickerConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn survives_storage_round_trip() {
        let config = PickerConfig {
            debounce_ms: 2000,
            loading_ms: 1200,
            log_level: "debug".into(),
        };
        let raw = config.to_json().unwrap();
        assert!(raw.contains("\"debounceMs\":2000"));
        assert_eq!(PickerConfig::from_json(&raw).unwrap(), config);
    }
}

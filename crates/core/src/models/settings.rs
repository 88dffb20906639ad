use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Upper bound for `stats_window_days` (about a century).
pub const MAX_STATS_WINDOW_DAYS: i64 = 36_500;

/// Runtime configuration for the finance tracker core.
///
/// Every field has a default, so a partial JSON document (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_directive: String,

    /// Lookback window (days) for transaction stats.
    pub stats_window_days: i64,

    /// Starting level of the benchmark curve relative to the current
    /// portfolio value.
    pub benchmark_start_ratio: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_directive: "finance_tracker_core=info".to_string(),
            stats_window_days: 30,
            benchmark_start_ratio: 0.9,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.stats_window_days <= 0 {
            return Err(CoreError::ValidationError(format!(
                "stats_window_days must be positive, got {}",
                self.stats_window_days
            )));
        }
        if self.stats_window_days > MAX_STATS_WINDOW_DAYS {
            return Err(CoreError::ValidationError(format!(
                "stats_window_days must be at most {MAX_STATS_WINDOW_DAYS}, got {}",
                self.stats_window_days
            )));
        }
        if !self.benchmark_start_ratio.is_finite() || self.benchmark_start_ratio <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "benchmark_start_ratio must be finite and positive, got {}",
                self.benchmark_start_ratio
            )));
        }
        Ok(())
    }
}

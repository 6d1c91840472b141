//! Policy defaults configuration.
//!
//! The host reads the file and hands the core a string; the core never
//! does I/O implicitly.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::PolicyKind;

/// Operator-tunable defaults for both policies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolicyDefaultsConfig {
    /// Whether daily task limits are enforced at all. Default: true.
    pub daily_limit_enabled: Option<bool>,
    /// Default daily task limit for contributors matching no linked
    /// cohort. Default: 1.
    pub default_daily_limit: Option<u32>,
    /// Default QC sampling percentage for contributors matching no
    /// linked cohort. Default: 100.
    pub default_sampling_percentage: Option<f64>,
}

impl PolicyDefaultsConfig {
    /// Parse from TOML, rejecting out-of-range defaults up front.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;

        let daily = config.effective_daily_limit() as f64;
        if !PolicyKind::DailyTaskLimit.scalar_in_range(daily) {
            return Err(ConfigError::OutOfRange(format!(
                "default_daily_limit must be {}, got {daily}",
                PolicyKind::DailyTaskLimit.scalar_range_label()
            )));
        }

        let sampling = config.effective_sampling_percentage();
        if !PolicyKind::QcSampling.scalar_in_range(sampling) {
            return Err(ConfigError::OutOfRange(format!(
                "default_sampling_percentage must be {}, got {sampling}",
                PolicyKind::QcSampling.scalar_range_label()
            )));
        }

        Ok(config)
    }

    /// Returns whether daily limits are enforced, defaulting to true.
    pub fn effective_daily_limit_enabled(&self) -> bool {
        self.daily_limit_enabled.unwrap_or(true)
    }

    /// Returns the effective default daily limit, defaulting to 1.
    pub fn effective_daily_limit(&self) -> u32 {
        self.default_daily_limit.unwrap_or(1)
    }

    /// Returns the effective default sampling percentage, defaulting to 100.
    pub fn effective_sampling_percentage(&self) -> f64 {
        self.default_sampling_percentage.unwrap_or(100.0)
    }
}

// ABOUTME: BMI engine configuration: measurement bounds, category thresholds, display metadata
// ABOUTME: Loaded from BMI_* environment variables on top of defaults and validated once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! BMI Engine Configuration
//!
//! Every bound, threshold, color, and emoji the engine uses lives in one immutable
//! [`BmiConfig`] value. The front end loads it once and hands it to the engine.
//!
//! # Threshold References
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use super::error::ConfigError;
use bmi_core::constants::{
    bmi_thresholds::{legacy, who},
    cache::DEFAULT_CAPACITY,
    gauge::GAUGE_MAX_BMI,
    measurement_limits,
};
use bmi_core::models::BmiCategory;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Admissible interval for one measurement plus the value a form starts at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Initial value shown by the presentation layer
    pub default: f64,
}

impl MeasurementRange {
    /// Whether `value` lies in `[min, max]`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(ConfigError::InvalidRange(what));
        }
        if self.min <= 0.0 || self.min >= self.max {
            return Err(ConfigError::InvalidRange(what));
        }
        if !self.contains(self.default) {
            return Err(ConfigError::ValueOutOfRange(what));
        }
        Ok(())
    }
}

/// Named threshold set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdProfile {
    /// WHO adult cut-offs: 18.5 / 25.0 / 30.0
    #[default]
    Who,
    /// Earlier revision cut-offs: 18.5 / 24.9 / 29.9
    Legacy,
}

impl ThresholdProfile {
    /// Thresholds for this profile
    #[must_use]
    pub const fn thresholds(self) -> ThresholdConfig {
        match self {
            Self::Who => ThresholdConfig::who(),
            Self::Legacy => ThresholdConfig::legacy(),
        }
    }
}

impl fmt::Display for ThresholdProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Who => f.write_str("who"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for ThresholdProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "who" => Ok(Self::Who),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::Parse(format!(
                "Unknown threshold profile '{other}' (expected 'who' or 'legacy')"
            ))),
        }
    }
}

/// Exclusive upper BMI bounds of the three bounded categories
///
/// Obese has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Upper bound of Underweight
    pub underweight_upper: f64,
    /// Upper bound of Normal weight
    pub normal_upper: f64,
    /// Upper bound of Overweight
    pub overweight_upper: f64,
}

impl ThresholdConfig {
    /// WHO cut-offs
    #[must_use]
    pub const fn who() -> Self {
        Self {
            underweight_upper: who::UNDERWEIGHT_UPPER,
            normal_upper: who::NORMAL_UPPER,
            overweight_upper: who::OVERWEIGHT_UPPER,
        }
    }

    /// Earlier revision cut-offs
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            underweight_upper: legacy::UNDERWEIGHT_UPPER,
            normal_upper: legacy::NORMAL_UPPER,
            overweight_upper: legacy::OVERWEIGHT_UPPER,
        }
    }

    /// Upper bound for `category`; `f64::INFINITY` for Obese
    #[must_use]
    pub const fn upper_bound(&self, category: BmiCategory) -> f64 {
        match category {
            BmiCategory::Underweight => self.underweight_upper,
            BmiCategory::Normal => self.normal_upper,
            BmiCategory::Overweight => self.overweight_upper,
            BmiCategory::Obese => f64::INFINITY,
        }
    }

    /// Validate thresholds are finite, positive, and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.underweight_upper,
            self.normal_upper,
            self.overweight_upper,
        ];
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive finite numbers",
            ));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be strictly increasing",
            ));
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::who()
    }
}

/// Color and emoji for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Hex color, `#RRGGBB`
    pub color: String,
    /// Emoji marker
    pub emoji: String,
}

impl CategoryStyle {
    fn for_category(category: BmiCategory) -> Self {
        Self {
            color: category.default_color().to_owned(),
            emoji: category.default_emoji().to_owned(),
        }
    }

    fn validate(&self, category: BmiCategory) -> Result<(), ConfigError> {
        let hex = self.color.strip_prefix('#').unwrap_or_default();
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidDisplay(format!(
                "{category} color '{}' is not a #RRGGBB hex color",
                self.color
            )));
        }
        if self.emoji.trim().is_empty() {
            return Err(ConfigError::InvalidDisplay(format!(
                "{category} emoji must not be empty"
            )));
        }
        Ok(())
    }
}

/// Display metadata per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDisplayConfig {
    /// Underweight style
    pub underweight: CategoryStyle,
    /// Normal weight style
    pub normal: CategoryStyle,
    /// Overweight style
    pub overweight: CategoryStyle,
    /// Obese style
    pub obese: CategoryStyle,
}

impl CategoryDisplayConfig {
    /// Style for `category`
    #[must_use]
    pub const fn style(&self, category: BmiCategory) -> &CategoryStyle {
        match category {
            BmiCategory::Underweight => &self.underweight,
            BmiCategory::Normal => &self.normal,
            BmiCategory::Overweight => &self.overweight,
            BmiCategory::Obese => &self.obese,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for category in BmiCategory::ALL {
            self.style(category).validate(category)?;
        }
        Ok(())
    }
}

impl Default for CategoryDisplayConfig {
    fn default() -> Self {
        Self {
            underweight: CategoryStyle::for_category(BmiCategory::Underweight),
            normal: CategoryStyle::for_category(BmiCategory::Normal),
            overweight: CategoryStyle::for_category(BmiCategory::Overweight),
            obese: CategoryStyle::for_category(BmiCategory::Obese),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Height bounds in centimeters
    pub height: MeasurementRange,
    /// Weight bounds in kilograms
    pub weight: MeasurementRange,
    /// Profile the thresholds were taken from
    pub profile: ThresholdProfile,
    /// Category thresholds
    pub thresholds: ThresholdConfig,
    /// Upper bound of the realistic-BMI check
    pub max_realistic_bmi: f64,
    /// Right edge of the gauge
    pub gauge_max: f64,
    /// Entries kept by the assessment cache
    pub cache_capacity: usize,
    /// Colors and emoji per category
    pub display: CategoryDisplayConfig,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            height: MeasurementRange {
                min: measurement_limits::HEIGHT_MIN_CM,
                max: measurement_limits::HEIGHT_MAX_CM,
                default: measurement_limits::HEIGHT_DEFAULT_CM,
            },
            weight: MeasurementRange {
                min: measurement_limits::WEIGHT_MIN_KG,
                max: measurement_limits::WEIGHT_MAX_KG,
                default: measurement_limits::WEIGHT_DEFAULT_KG,
            },
            profile: ThresholdProfile::Who,
            thresholds: ThresholdConfig::who(),
            max_realistic_bmi: measurement_limits::BMI_MAX_REALISTIC,
            gauge_max: GAUGE_MAX_BMI,
            cache_capacity: DEFAULT_CAPACITY,
            display: CategoryDisplayConfig::default(),
        }
    }
}

impl BmiConfig {
    /// Defaults with the thresholds of `profile`
    #[must_use]
    pub fn with_profile(profile: ThresholdProfile) -> Self {
        Self::default().apply_profile(profile)
    }

    /// Replace thresholds with those of `profile`
    #[must_use]
    pub fn apply_profile(mut self, profile: ThresholdProfile) -> Self {
        self.profile = profile;
        self.thresholds = profile.thresholds();
        self
    }

    /// Build configuration from defaults overridden by `BMI_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        apply_env_var("BMI_HEIGHT_MIN_CM", &mut config.height.min)?;
        apply_env_var("BMI_HEIGHT_MAX_CM", &mut config.height.max)?;
        apply_env_var("BMI_HEIGHT_DEFAULT_CM", &mut config.height.default)?;
        apply_env_var("BMI_WEIGHT_MIN_KG", &mut config.weight.min)?;
        apply_env_var("BMI_WEIGHT_MAX_KG", &mut config.weight.max)?;
        apply_env_var("BMI_WEIGHT_DEFAULT_KG", &mut config.weight.default)?;
        apply_env_var("BMI_MAX_REALISTIC", &mut config.max_realistic_bmi)?;
        apply_env_var("BMI_GAUGE_MAX", &mut config.gauge_max)?;
        apply_env_var("BMI_CACHE_CAPACITY", &mut config.cache_capacity)?;

        if let Ok(val) = env::var("BMI_THRESHOLD_PROFILE") {
            config = config.apply_profile(val.parse()?);
        }

        Ok(config)
    }

    /// Load from the environment and validate
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive or inverted ranges, defaults outside their
    /// range, non-increasing thresholds, a non-positive realistic or gauge maximum,
    /// a zero cache capacity, or unusable display metadata
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.height.validate("height range must satisfy 0 < min < max with min <= default <= max")?;
        self.weight.validate("weight range must satisfy 0 < min < max with min <= default <= max")?;
        self.thresholds.validate()?;

        if !self.max_realistic_bmi.is_finite() || self.max_realistic_bmi <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max realistic BMI must be a positive finite number",
            ));
        }
        if !self.gauge_max.is_finite() || self.gauge_max <= self.thresholds.overweight_upper {
            return Err(ConfigError::ValueOutOfRange(
                "gauge maximum must exceed the overweight threshold",
            ));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "cache capacity must be at least 1",
            ));
        }

        self.display.validate()
    }
}

/// Parse an environment variable into `target` when it is set
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
    }
    Ok(())
}

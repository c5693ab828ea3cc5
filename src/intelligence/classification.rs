// ABOUTME: Maps a BMI value onto one of four ordered weight categories
// ABOUTME: Category table built once from configuration; first band whose upper bound exceeds the value wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! BMI classification
//!
//! The table holds exactly four records ordered by strictly increasing upper
//! threshold; the last one is unbounded, so the bands partition `[0, +inf)`.
//!
//! | Category      | WHO band         |
//! |---------------|------------------|
//! | Underweight   | `[0, 18.5)`      |
//! | Normal weight | `[18.5, 25.0)`   |
//! | Overweight    | `[25.0, 30.0)`   |
//! | Obese         | `[30.0, +inf)`   |

use crate::config::{BmiConfig, ThresholdConfig};
use crate::logging::EngineLogger;
use bmi_core::errors::MeasurementError;
use bmi_core::models::BmiCategory;
use serde::Serialize;

/// One category with everything the presentation layer shows for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    /// Category identity
    pub category: BmiCategory,
    /// Display label
    pub name: &'static str,
    /// Exclusive upper bound; infinite for the last record (serialized as `null`)
    pub upper_threshold: f64,
    /// Hex color
    pub color: String,
    /// Emoji marker
    pub emoji: String,
    /// One-line explanation
    pub description: &'static str,
    /// Markdown list of advice
    pub tips: &'static str,
}

/// Ordered, immutable category table
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    records: [CategoryRecord; 4],
}

impl CategoryTable {
    /// Build the table from thresholds and display metadata in `config`
    #[must_use]
    pub fn from_config(config: &BmiConfig) -> Self {
        let record = |category: BmiCategory| {
            let style = config.display.style(category);
            CategoryRecord {
                category,
                name: category.name(),
                upper_threshold: config.thresholds.upper_bound(category),
                color: style.color.clone(),
                emoji: style.emoji.clone(),
                description: category.description(),
                tips: category.tips(),
            }
        };
        Self {
            records: BmiCategory::ALL.map(record),
        }
    }

    /// Table with WHO thresholds and default display metadata
    #[must_use]
    pub fn who() -> Self {
        Self::from_thresholds(ThresholdConfig::who())
    }

    /// Table with the earlier 18.5 / 24.9 / 29.9 thresholds
    #[must_use]
    pub fn legacy() -> Self {
        Self::from_thresholds(ThresholdConfig::legacy())
    }

    fn from_thresholds(thresholds: ThresholdConfig) -> Self {
        Self::from_config(&BmiConfig {
            thresholds,
            ..BmiConfig::default()
        })
    }

    /// Classify a BMI value
    ///
    /// `+inf` falls into the last record.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::InvalidBmi`] for NaN and
    /// [`MeasurementError::NegativeBmi`] for values below zero
    pub fn classify(&self, bmi: f64) -> Result<&CategoryRecord, MeasurementError> {
        if bmi.is_nan() {
            let error = MeasurementError::InvalidBmi(bmi);
            EngineLogger::log_rejected_input(&error);
            return Err(error);
        }
        if bmi < 0.0 {
            let error = MeasurementError::NegativeBmi(bmi);
            EngineLogger::log_rejected_input(&error);
            return Err(error);
        }

        let [.., last] = &self.records;
        let record = self
            .records
            .iter()
            .find(|r| bmi < r.upper_threshold)
            .unwrap_or(last);

        EngineLogger::log_classification(bmi, record.category);
        Ok(record)
    }

    /// Record for `category`
    #[must_use]
    pub const fn record(&self, category: BmiCategory) -> &CategoryRecord {
        &self.records[category.index()]
    }

    /// Records in ascending threshold order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRecord> {
        self.records.iter()
    }

    /// `[lower, upper)` bounds of every record; the first starts at 0
    #[must_use]
    pub fn bands(&self) -> [(f64, f64); 4] {
        let mut lower = 0.0;
        self.records.each_ref().map(|r| {
            let band = (lower, r.upper_threshold);
            lower = r.upper_threshold;
            band
        })
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::who()
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a CategoryRecord;
    type IntoIter = std::slice::Iter<'a, CategoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_follow_category_order() {
        let table = CategoryTable::who();
        for (record, category) in table.iter().zip(BmiCategory::ALL) {
            assert_eq!(record.category, category);
            assert_eq!(table.record(category), record);
        }
    }

    #[test]
    fn test_bands_are_contiguous() {
        let bands = CategoryTable::who().bands();
        assert_eq!(bands[0], (0.0, 18.5));
        assert_eq!(bands[1], (18.5, 25.0));
        assert_eq!(bands[2], (25.0, 30.0));
        assert_eq!(bands[3].0, 30.0);
        assert!(bands[3].1.is_infinite());
    }

    #[test]
    fn test_infinity_is_obese() {
        let table = CategoryTable::who();
        assert!(matches!(
            table.classify(f64::INFINITY),
            Ok(r) if r.category == BmiCategory::Obese
        ));
    }

    #[test]
    fn test_nan_is_invalid() {
        let table = CategoryTable::who();
        assert!(matches!(
            table.classify(f64::NAN),
            Err(MeasurementError::InvalidBmi(_))
        ));
    }
}

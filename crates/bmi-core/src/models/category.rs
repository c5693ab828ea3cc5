// ABOUTME: Ordered WHO weight categories with their default display metadata
// ABOUTME: Underweight, Normal weight, Overweight, Obese in ascending BMI order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use crate::constants::display::{colors, descriptions, emojis, names, tips};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// WHO adult weight category
///
/// Variants are declared in ascending BMI order, so the derived `Ord` matches the
/// order of the bands on the BMI axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25.0
    Normal,
    /// BMI from 25.0 up to 30.0
    Overweight,
    /// BMI of 30.0 and above
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [Self; 4] = [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese];

    /// Position on the BMI axis, 0 for the lowest band
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Underweight => 0,
            Self::Normal => 1,
            Self::Overweight => 2,
            Self::Obese => 3,
        }
    }

    /// Machine-readable identifier
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Underweight => names::UNDERWEIGHT,
            Self::Normal => names::NORMAL,
            Self::Overweight => names::OVERWEIGHT,
            Self::Obese => names::OBESE,
        }
    }

    /// Default hex color
    #[must_use]
    pub const fn default_color(&self) -> &'static str {
        match self {
            Self::Underweight => colors::UNDERWEIGHT,
            Self::Normal => colors::NORMAL,
            Self::Overweight => colors::OVERWEIGHT,
            Self::Obese => colors::OBESE,
        }
    }

    /// Default emoji indicator
    #[must_use]
    pub const fn default_emoji(&self) -> &'static str {
        match self {
            Self::Underweight => emojis::UNDERWEIGHT,
            Self::Normal => emojis::NORMAL,
            Self::Overweight => emojis::OVERWEIGHT,
            Self::Obese => emojis::OBESE,
        }
    }

    /// One-line explanation
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Underweight => descriptions::UNDERWEIGHT,
            Self::Normal => descriptions::NORMAL,
            Self::Overweight => descriptions::OVERWEIGHT,
            Self::Obese => descriptions::OBESE,
        }
    }

    /// Category-specific advice (markdown)
    #[must_use]
    pub const fn tips(&self) -> &'static str {
        match self {
            Self::Underweight => tips::UNDERWEIGHT,
            Self::Normal => tips::NORMAL,
            Self::Overweight => tips::OVERWEIGHT,
            Self::Obese => tips::OBESE,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Ok(Self::Underweight),
            "normal" | "normal weight" | "normal_weight" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese" => Ok(Self::Obese),
            other => Err(format!("Unknown BMI category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_ordered_by_index() {
        for window in BmiCategory::ALL.windows(2) {
            assert!(window[0] < window[1]);
            assert_eq!(window[0].index() + 1, window[1].index());
        }
    }

    #[test]
    fn test_from_str_accepts_labels_and_keys() {
        assert_eq!("Normal weight".parse::<BmiCategory>(), Ok(BmiCategory::Normal));
        assert_eq!("obese".parse::<BmiCategory>(), Ok(BmiCategory::Obese));
        assert!("heavy".parse::<BmiCategory>().is_err());
        for category in BmiCategory::ALL {
            assert_eq!(category.key().parse::<BmiCategory>(), Ok(category));
        }
    }
}

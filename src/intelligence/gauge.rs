// ABOUTME: Gauge band data for drawing a BMI dial or bar in a presentation layer
// ABOUTME: Derives colored, contiguous bands clipped to a display maximum from the category table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use super::classification::CategoryTable;
use bmi_core::models::BmiCategory;
use serde::Serialize;

/// One colored segment of the gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    /// Category drawn in this segment
    pub category: BmiCategory,
    /// Inclusive left edge
    pub lower: f64,
    /// Exclusive right edge
    pub upper: f64,
    /// Fill color
    pub color: String,
}

/// Gauge geometry: contiguous bands covering `[0, max]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    /// Right edge of the gauge
    pub max: f64,
    /// Bands in ascending order
    pub bands: Vec<GaugeBand>,
}

impl GaugeSpec {
    /// Build bands from `table`, clipping the unbounded last band at `gauge_max`
    ///
    /// Bands that start at or beyond `gauge_max` are dropped.
    #[must_use]
    pub fn from_table(table: &CategoryTable, gauge_max: f64) -> Self {
        let bands = table
            .bands()
            .into_iter()
            .zip(table.iter())
            .filter(|((lower, _), _)| *lower < gauge_max)
            .map(|((lower, upper), record)| GaugeBand {
                category: record.category,
                lower,
                upper: upper.min(gauge_max),
                color: record.color.clone(),
            })
            .collect();

        Self {
            max: gauge_max,
            bands,
        }
    }

    /// Needle position for `bmi`, clamped into `[0, max]`
    ///
    /// NaN maps to 0, as does any `bmi` when `max` is negative or NaN.
    #[must_use]
    pub fn needle(&self, bmi: f64) -> f64 {
        bmi.max(0.0).min(self.max.max(0.0))
    }

    /// Band under the needle for `bmi`
    #[must_use]
    pub fn band_at(&self, bmi: f64) -> Option<&GaugeBand> {
        let position = self.needle(bmi);
        self.bands
            .iter()
            .find(|band| position < band.upper)
            .or_else(|| self.bands.last())
    }
}

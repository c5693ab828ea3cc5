// ABOUTME: LRU memoization of assessments keyed by inputs rounded to one decimal place
// ABOUTME: Tracks hit and miss counts; errors are never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! Assessment cache
//!
//! Interactive front ends re-run the same assessment whenever a form redraws.
//! [`AssessmentCache`] rounds both inputs to one decimal, assesses the rounded
//! values, and keeps the report in a bounded [`LruCache`].

use super::assessment::{BmiAssessment, BmiEngine};
use bmi_core::errors::AppResult;
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

/// Inputs in tenths of a centimeter and tenths of a kilogram
type CacheKey = (i64, i64);

/// Bounded assessment cache owned by its caller
#[derive(Debug)]
pub struct AssessmentCache {
    store: LruCache<CacheKey, BmiAssessment>,
    hits: u64,
    misses: u64,
}

/// Counters snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that ran the engine
    pub misses: u64,
    /// Entries currently held
    pub len: usize,
    /// Maximum entries
    pub capacity: usize,
}

impl AssessmentCache {
    const MIN_CAPACITY: NonZeroUsize = NonZeroUsize::MIN;

    /// Cache holding up to `capacity` entries; zero is treated as one
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::MIN_CAPACITY);
        Self {
            store: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache sized from the engine's configuration
    #[must_use]
    pub fn for_engine(engine: &BmiEngine) -> Self {
        Self::new(engine.config().cache_capacity)
    }

    /// Assess through the cache
    ///
    /// Raw inputs are validated before rounding, so errors always describe what
    /// the caller passed. Rounded values are clamped back into the configured
    /// ranges, so an accepted input next to a bound never fails after rounding.
    ///
    /// # Errors
    ///
    /// Returns the engine's error; failures are not stored
    pub fn assess(
        &mut self,
        engine: &BmiEngine,
        height_cm: f64,
        weight_kg: f64,
    ) -> AppResult<BmiAssessment> {
        engine.validate(height_cm, weight_kg)?;
        let Some(key) = cache_key(height_cm, weight_kg) else {
            return engine.assess(height_cm, weight_kg);
        };

        if let Some(hit) = self.store.get(&key) {
            self.hits += 1;
            debug!(height_cm, weight_kg, "Assessment cache hit");
            return Ok(hit.clone());
        }

        self.misses += 1;
        let config = engine.config();
        let height = from_tenths(key.0).clamp(config.height.min, config.height.max);
        let weight = from_tenths(key.1).clamp(config.weight.min, config.weight.max);
        let assessment = engine.assess(height, weight)?;
        self.store.put(key, assessment.clone());
        Ok(assessment)
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.store.len(),
            capacity: self.store.cap().get(),
        }
    }

    /// Drop all entries and reset counters
    pub fn clear(&mut self) {
        self.store.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

fn to_tenths(value: f64) -> i64 {
    (value * 10.0).round() as i64
}

fn from_tenths(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

fn cache_key(height_cm: f64, weight_kg: f64) -> Option<CacheKey> {
    (height_cm.is_finite() && weight_kg.is_finite())
        .then(|| (to_tenths(height_cm), to_tenths(weight_kg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rounds_to_one_decimal() {
        assert_eq!(cache_key(175.54, 72.26), Some((1755, 723)));
        assert_eq!(cache_key(f64::NAN, 70.0), None);
    }

    #[test]
    fn test_zero_capacity_becomes_one() {
        let cache = AssessmentCache::new(0);
        assert_eq!(cache.stats().capacity, 1);
    }
}

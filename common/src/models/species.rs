//! # Seed Count Models
//!
//! Weights follow the seed-trade convention: `min_weight` and `max_weight` are
//! thousand-seed weights (TKG, grams per 1000 seeds), `available_weight` is the
//! bulk weight bought, in grams.

use crate::error::{InputProblem, Result, StudyError, WeightField};

/// Seeds per thousand-seed weight.
pub const SEEDS_PER_TKG: f64 = 1000.0;

/// 2^64: the first float a `u64` count cannot hold.
const COUNT_LIMIT: f64 = u64::MAX as f64;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesSeedRecord {
    pub name: String,
    pub min_weight: f64,
    pub max_weight: f64,
    pub available_weight: f64,
}

impl SpeciesSeedRecord {
    pub fn new(name: impl Into<String>, min_weight: f64, max_weight: f64, available_weight: f64) -> Self {
        Self {
            name: name.into(),
            min_weight,
            max_weight,
            available_weight,
        }
    }

    /// Checks positivity of every weight, the ordering of the TKG bounds, and
    /// that the largest count still fits a `u64`.
    ///
    /// `index` is the position of the record in its table and is only used to
    /// report which record failed.
    pub fn validate(&self, index: usize) -> Result<()> {
        let fields = [
            (WeightField::MinWeight, self.min_weight),
            (WeightField::MaxWeight, self.max_weight),
            (WeightField::AvailableWeight, self.available_weight),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(index, field, InputProblem::NotPositive(value)));
            }
        }

        if self.min_weight > self.max_weight {
            let problem = InputProblem::ExceedsMax {
                min: self.min_weight,
                max: self.max_weight,
            };
            return Err(self.invalid(index, WeightField::MinWeight, problem));
        }

        // the lower TKG bound yields the larger count, so checking it covers both
        let max_count = self.available_weight * SEEDS_PER_TKG / self.min_weight;
        if !(max_count < COUNT_LIMIT) {
            let problem = InputProblem::CountOverflow(self.min_weight);
            return Err(self.invalid(index, WeightField::MinWeight, problem));
        }

        Ok(())
    }

    fn invalid(&self, index: usize, field: WeightField, problem: InputProblem) -> StudyError {
        StudyError::InvalidInput {
            index,
            species: self.name.clone(),
            field,
            problem,
        }
    }
}

/// Estimated number of seeds available for one species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedCountEstimate {
    pub min_count: u64,
    pub max_count: u64,
    pub mean_count: u64,
}

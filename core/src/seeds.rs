//! Seed count estimation from thousand-seed weight (TKG).
//!
//! A heavier seed means fewer seeds per gram, so the lower TKG bound gives the
//! upper count bound and vice versa. Counts are floored so the estimate never
//! promises more seeds than were bought.

use seedtray_common::Result;
use seedtray_common::models::species::{SEEDS_PER_TKG, SeedCountEstimate, SpeciesSeedRecord};
use tracing::debug;

/// Estimates counts for a whole table, in input order.
///
/// Every record is validated before anything is computed.
pub fn estimate(records: &[SpeciesSeedRecord]) -> Result<Vec<SeedCountEstimate>> {
    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
    }

    Ok(records.iter().map(count_range).collect())
}

/// Validates and estimates a single record.
pub fn estimate_one(record: &SpeciesSeedRecord) -> Result<SeedCountEstimate> {
    record.validate(0)?;
    Ok(count_range(record))
}

/// Callers validate first, so both quotients are finite and below 2^64 and
/// the casts never saturate.
fn count_range(record: &SpeciesSeedRecord) -> SeedCountEstimate {
    let seed_units = record.available_weight * SEEDS_PER_TKG;
    let max_count = (seed_units / record.min_weight).floor() as u64;
    let min_count = (seed_units / record.max_weight).floor() as u64;
    // min_count <= max_count, so this is floor((min + max) / 2) without overflow
    let mean_count = min_count + (max_count - min_count) / 2;

    debug!(
        "{}: {} - {} seeds, mean {}",
        record.name, min_count, max_count, mean_count
    );

    SeedCountEstimate {
        min_count,
        max_count,
        mean_count,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use seedtray_common::StudyError;
    use seedtray_common::error::{InputProblem, WeightField};

    fn record(name: &str, min: f64, max: f64, available: f64) -> SpeciesSeedRecord {
        SpeciesSeedRecord::new(name, min, max, available)
    }

    #[test]
    fn test_picea_abies_example() {
        let estimate = estimate_one(&record("Picea abies", 4.0, 8.0, 100.0)).unwrap();
        assert_eq!(estimate.max_count, 25000);
        assert_eq!(estimate.min_count, 12500);
        assert_eq!(estimate.mean_count, 18750);
    }

    #[test]
    fn test_counts_are_floored() {
        // 200 g of Sorbus aucuparia: 200000 / 3.5 = 57142.86, 200000 / 5 = 40000
        let estimate = estimate_one(&record("Sorbus aucuparia", 3.5, 5.0, 200.0)).unwrap();
        assert_eq!(estimate.max_count, 57142);
        assert_eq!(estimate.min_count, 40000);
        assert_eq!(estimate.mean_count, 48571);
    }

    #[test]
    fn test_mean_floors_odd_sum() {
        // 2000000 / 150 = 13333.3, 2000000 / 300 = 6666.6, (6666 + 13333) / 2 = 9999.5
        let estimate = estimate_one(&record("Pinus cembra", 150.0, 300.0, 2000.0)).unwrap();
        assert_eq!(estimate.min_count, 6666);
        assert_eq!(estimate.max_count, 13333);
        assert_eq!(estimate.mean_count, 9999);
    }

    #[test]
    fn test_estimate_preserves_order() {
        let records = vec![
            record("Acer pseudoplatanus", 100.0, 250.0, 3000.0),
            record("Picea abies", 4.0, 8.0, 100.0),
        ];
        let estimates = estimate(&records).unwrap();
        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].max_count, 30000);
        assert_eq!(estimates[0].min_count, 12000);
        assert_eq!(estimates[1].max_count, 25000);
    }

    #[test]
    fn test_mean_between_bounds() {
        let tables = [
            (0.1, 0.1, 0.1),
            (1.0, 3.0, 7.0),
            (2.7, 900.0, 12.5),
            (333.3, 333.4, 10_000.0),
        ];
        for (min, max, available) in tables {
            let estimate = estimate_one(&record("any", min, max, available)).unwrap();
            assert!(estimate.min_count <= estimate.mean_count);
            assert!(estimate.mean_count <= estimate.max_count);
        }
    }

    #[test]
    fn test_tiny_amount_gives_zero_counts() {
        let estimate = estimate_one(&record("Picea abies", 4.0, 8.0, 0.001)).unwrap();
        assert_eq!(estimate.min_count, 0);
        assert_eq!(estimate.max_count, 0);
        assert_eq!(estimate.mean_count, 0);
    }

    #[test]
    fn test_invalid_record_rejects_whole_table() {
        let records = vec![
            record("Picea abies", 4.0, 8.0, 100.0),
            record("Pinus cembra", 0.0, 300.0, 2000.0),
        ];
        match estimate(&records) {
            Err(StudyError::InvalidInput {
                index,
                species,
                field,
                ..
            }) => {
                assert_eq!(index, 1);
                assert_eq!(species, "Pinus cembra");
                assert_eq!(field, WeightField::MinWeight);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_count_overflow_rejected_instead_of_saturating() {
        let records = vec![
            record("Picea abies", 4.0, 8.0, 100.0),
            record("Sorbus aucuparia", 1e-300, 5.0, 200.0),
        ];
        match estimate(&records) {
            Err(StudyError::InvalidInput { index, field, problem, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, WeightField::MinWeight);
                assert_eq!(problem, InputProblem::CountOverflow(1e-300));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_large_but_countable_amount() {
        // 1e12 g at 1 g per 1000 seeds is 1e15 seeds, well inside u64
        let estimate = estimate_one(&record("Picea abies", 1.0, 2.0, 1e12)).unwrap();
        assert_eq!(estimate.max_count, 1_000_000_000_000_000);
        assert_eq!(estimate.min_count, 500_000_000_000_000);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(estimate(&[]).unwrap(), Vec::new());
    }
}

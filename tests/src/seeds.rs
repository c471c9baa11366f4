#![cfg(test)]
use seedtray_common::StudyError;
use seedtray_common::error::{InputProblem, WeightField};
use seedtray_common::models::species::{SeedCountEstimate, SpeciesSeedRecord};
use seedtray_core::{seeds, study};

/// The study's own species table produces the published report.
#[test]
fn study_species_report() {
    let estimates = seeds::estimate(&study::seed_records()).unwrap();

    let expected = vec![
        SeedCountEstimate { min_count: 12500, max_count: 25000, mean_count: 18750 },
        SeedCountEstimate { min_count: 6666, max_count: 13333, mean_count: 9999 },
        SeedCountEstimate { min_count: 12000, max_count: 30000, mean_count: 21000 },
        SeedCountEstimate { min_count: 40000, max_count: 57142, mean_count: 48571 },
    ];
    assert_eq!(estimates, expected);
}

#[test]
fn reversed_bounds_are_rejected_not_swapped() {
    let records = vec![SpeciesSeedRecord::new("Picea abies", 8.0, 4.0, 100.0)];
    let result = seeds::estimate(&records);

    assert_eq!(
        result,
        Err(StudyError::InvalidInput {
            index: 0,
            species: "Picea abies".to_string(),
            field: WeightField::MinWeight,
            problem: InputProblem::ExceedsMax { min: 8.0, max: 4.0 },
        })
    );
}

#[test]
fn ordering_holds_over_a_sweep() {
    let mut min = 0.5;
    while min < 400.0 {
        for spread in [1.0, 1.3, 2.0, 7.5] {
            let record = SpeciesSeedRecord::new("sweep", min, min * spread, 123.4);
            let estimate = seeds::estimate_one(&record).unwrap();
            assert!(
                estimate.min_count <= estimate.mean_count && estimate.mean_count <= estimate.max_count,
                "ordering violated for {record:?}: {estimate:?}"
            );
        }
        min *= 1.7;
    }
}

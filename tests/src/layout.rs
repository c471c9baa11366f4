#![cfg(test)]
use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seedtray_common::StudyError;
use seedtray_common::models::tray::{Position, Tray, TrayLayoutSpec};
use seedtray_core::study::{self, TrayVariant};
use seedtray_core::{batch, layout};

fn counts<'a>(labels: impl IntoIterator<Item = &'a String>) -> HashMap<&'a str, usize> {
    let mut map = HashMap::new();
    for label in labels {
        *map.entry(label.as_str()).or_insert(0) += 1;
    }
    map
}

fn assert_valid_tray(spec: &TrayLayoutSpec, tray: &Tray) {
    assert_eq!(tray.shape(), (spec.rows, spec.cols));
    assert_eq!(tray.get(spec.pinned), Some(spec.pinned_label.as_str()));

    let others: Vec<String> = spec
        .free_positions()
        .into_iter()
        .filter_map(|pos| tray.get(pos).map(str::to_owned))
        .collect();
    assert_eq!(others.len(), spec.fill_labels.len());
    assert_eq!(counts(&others), counts(&spec.fill_labels));
}

/// 4x6 tray, logger at (2, 2), 3 controls and 5 pots of each species.
#[test]
fn study_tray_shape_and_contents() {
    for variant in [TrayVariant::Control, TrayVariant::Empty] {
        let spec = variant.layout_spec();
        let tray = layout::generate(&spec, &mut ChaCha8Rng::seed_from_u64(study::STUDY_SEED)).unwrap();

        assert_eq!(tray.get(Position::new(2, 2)), Some("L"));
        assert_eq!(tray.rows().len(), 4);
        assert!(tray.rows().all(|row| row.len() == 6));
        assert_valid_tray(&spec, &tray);
    }
}

#[test]
fn full_study_batch() {
    let spec = TrayVariant::Control.layout_spec();
    let trays = batch::generate_batch(&spec, study::STUDY_SEED, study::TRAY_COUNT).unwrap();

    assert_eq!(trays.len(), 72);
    for tray in &trays {
        assert_valid_tray(&spec, tray);
    }

    let again = batch::generate_batch(&spec, study::STUDY_SEED, study::TRAY_COUNT).unwrap();
    assert_eq!(trays, again);

    let test_tray = batch::generate_single(&spec, study::STUDY_SEED).unwrap();
    assert_eq!(test_tray, trays[0]);
}

#[test]
fn different_master_seeds_give_different_batches() {
    let spec = TrayVariant::Control.layout_spec();
    let a = batch::generate_batch(&spec, 69, 3).unwrap();
    let b = batch::generate_batch(&spec, 70, 3).unwrap();
    assert_ne!(a, b);
}

#[test]
fn missing_label_is_a_size_mismatch() {
    let mut spec = TrayVariant::Control.layout_spec();
    spec.fill_labels.remove(0);

    let result = layout::generate(&spec, &mut ChaCha8Rng::seed_from_u64(69));
    assert_eq!(
        result,
        Err(StudyError::LayoutSizeMismatch {
            expected: 23,
            actual: 22
        })
    );
}

#[test]
fn pinned_outside_grid_is_rejected() {
    let mut spec = TrayVariant::Empty.layout_spec();
    spec.pinned = Position::new(0, 6);

    let result = batch::generate_batch(&spec, 69, 2);
    assert!(matches!(result, Err(StudyError::OutOfBounds { rows: 4, cols: 6, .. })));
}

#[test]
fn variants_share_positions_for_the_same_seed() {
    // Only the blank label differs, so the shuffle places every label identically.
    let control = batch::generate_single(&TrayVariant::Control.layout_spec(), 69).unwrap();
    let empty = batch::generate_single(&TrayVariant::Empty.layout_spec(), 69).unwrap();

    for (c, e) in control.cells().iter().zip(empty.cells()) {
        match c.as_str() {
            "C" => assert_eq!(e, "E"),
            _ => assert_eq!(c, e),
        }
    }
}

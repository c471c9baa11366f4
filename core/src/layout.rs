//! Randomized tray layout with one pinned cell.
//!
//! The free coordinates are listed row-major, shuffled with a uniform
//! Fisher-Yates shuffle drawn from the caller's random source, and paired
//! positionally with the fill labels. For a given seed the result depends on
//! the order of the fill labels, so that order is part of the layout input.

use rand::Rng;
use rand::seq::SliceRandom;
use seedtray_common::models::tray::{Position, Tray, TrayLayoutSpec};
use seedtray_common::{Result, StudyError};
use tracing::trace;

/// Lays out one tray.
///
/// Fails with [`StudyError::OutOfBounds`] or [`StudyError::LayoutSizeMismatch`]
/// before anything is allocated or any entropy is consumed.
pub fn generate<R: Rng + ?Sized>(spec: &TrayLayoutSpec, rng: &mut R) -> Result<Tray> {
    spec.validate()?;

    let mut cells: Vec<Option<&str>> = vec![None; spec.cell_count()];
    cells[index_of(spec.pinned, spec.cols)] = Some(spec.pinned_label.as_str());

    let mut free: Vec<Position> = spec.free_positions();
    free.shuffle(rng);

    for (label, pos) in spec.fill_labels.iter().zip(&free) {
        cells[index_of(*pos, spec.cols)] = Some(label.as_str());
    }
    trace!("placed {} fill labels", spec.fill_labels.len());

    let mismatch = || StudyError::LayoutSizeMismatch {
        expected: spec.cell_count() - 1,
        actual: spec.fill_labels.len(),
    };

    // validate() guarantees one label per free cell, so every cell is Some here
    let cells: Vec<String> = cells
        .into_iter()
        .map(|cell| cell.map(str::to_owned))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(mismatch)?;

    Tray::from_cells(spec.rows, spec.cols, cells).ok_or_else(mismatch)
}

fn index_of(pos: Position, cols: usize) -> usize {
    pos.row * cols + pos.col
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

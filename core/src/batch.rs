//! Reproducible batches of trays.
//!
//! A batch is fully determined by its master seed: one per-tray seed is drawn
//! in order from a ChaCha8 stream keyed by the master seed, and each tray is
//! laid out from its own generator. Trays are therefore independent of each
//! other and of the thread that generates them.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use seedtray_common::Result;
use seedtray_common::models::tray::{Tray, TrayLayoutSpec};
use tracing::{debug, info};

use crate::layout;

/// Per-tray seeds for a batch of `count` trays.
pub fn derive_seeds(master_seed: u64, count: usize) -> Vec<u64> {
    let mut master = master_rng(master_seed);
    (0..count).map(|_| master.random::<u64>()).collect()
}

fn master_rng(master_seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(master_seed)
}

/// Generator for a single tray seed.
pub fn tray_rng(tray_seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(tray_seed)
}

/// Lays out `count` trays in parallel, returned in tray order.
///
/// The layout is validated once up front so an invalid one fails before any
/// tray is generated.
pub fn generate_batch(spec: &TrayLayoutSpec, master_seed: u64, count: usize) -> Result<Vec<Tray>> {
    spec.validate()?;
    info!("Generating {count} trays from seed {master_seed}");

    let trays = derive_seeds(master_seed, count)
        .into_par_iter()
        .map(|seed| layout::generate(spec, &mut tray_rng(seed)))
        .collect::<Result<Vec<Tray>>>()?;

    debug!("Generated {} trays", trays.len());
    Ok(trays)
}

/// The test tray: identical to the first tray of a batch with the same
/// master seed.
pub fn generate_single(spec: &TrayLayoutSpec, master_seed: u64) -> Result<Tray> {
    spec.validate()?;
    // first draw of the batch seed stream
    let seed = master_rng(master_seed).random::<u64>();
    layout::generate(spec, &mut tray_rng(seed))
}

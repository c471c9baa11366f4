use anyhow::Context;
use colored::*;
use tracing::debug;

use crate::{mprint, success, terminal::{format, print}};
use seedtray_common::config::Config;
use seedtray_common::models::species::{SeedCountEstimate, SpeciesSeedRecord};
use seedtray_core::seeds::estimate;
use seedtray_core::study;

pub fn seeds(cfg: &Config) -> anyhow::Result<()> {
    let records: Vec<SpeciesSeedRecord> = study::seed_records();
    debug!("Estimating seed counts for {} species", records.len());

    let estimates: Vec<SeedCountEstimate> =
        estimate(&records).context("invalid species table")?;

    print_report(&records, &estimates, cfg);
    print_summary(&estimates, cfg);
    Ok(())
}

fn print_report(records: &[SpeciesSeedRecord], estimates: &[SeedCountEstimate], cfg: &Config) {
    for (idx, (record, estimate)) in records.iter().zip(estimates).enumerate() {
        match cfg.quiet {
            0 | 1 => {
                print::tree_head(idx, &record.name);
                print::as_tree_one_level(format::estimate_to_details(record, estimate));
            }
            _ => print::print_status(format!(
                "{}: {} - {} (mean {})",
                record.name, estimate.min_count, estimate.max_count, estimate.mean_count
            )),
        }
        if idx + 1 != records.len() && cfg.quiet < 2 {
            mprint!();
        }
    }
}

fn print_summary(estimates: &[SeedCountEstimate], cfg: &Config) {
    let total: u64 = estimates.iter().map(|e| e.mean_count).sum();
    let species: ColoredString = format!("{} species", estimates.len()).bold().green();
    let total: ColoredString = format!("{total} seeds").bold().yellow();
    let output: String = format!("Estimate Complete: {species}, about {total} in total");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}

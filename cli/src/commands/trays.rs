use anyhow::Context;
use colored::*;

use crate::{mprint, success, terminal::{colors, format::DisplayMap, print, table}};
use seedtray_common::config::Config;
use seedtray_common::models::tray::{Tray, TrayLayoutSpec};
use seedtray_core::{batch, study::{self, TrayVariant}};

const KEY_WIDTH: usize = 7;

pub fn trays(test: bool, variant: TrayVariant, cfg: &Config) -> anyhow::Result<()> {
    let spec: TrayLayoutSpec = variant.layout_spec();
    let display: DisplayMap = DisplayMap::for_variant(variant);

    print_plan(test, variant, cfg);

    if test {
        let tray: Tray = batch::generate_single(&spec, study::STUDY_SEED)
            .context("failed to lay out the test tray")?;
        print_tray(&plate_title(None), &tray, &display, cfg);
        return Ok(());
    }

    let trays: Vec<Tray> = batch::generate_batch(&spec, study::STUDY_SEED, study::TRAY_COUNT)
        .context("failed to lay out the tray batch")?;

    for (idx, tray) in trays.iter().enumerate() {
        print_tray(&plate_title(Some(idx + 1)), tray, &display, cfg);
        if idx + 1 != trays.len() {
            mprint!();
        }
    }
    print_summary(trays.len(), variant, cfg);
    Ok(())
}

fn print_plan(test: bool, variant: TrayVariant, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let count: usize = if test { 1 } else { study::TRAY_COUNT };
    print::aligned_line("Variant", KEY_WIDTH, variant);
    print::aligned_line("Seed", KEY_WIDTH, study::STUDY_SEED);
    print::aligned_line("Trays", KEY_WIDTH, count);
    print::aligned_line(
        "Shape",
        KEY_WIDTH,
        format!("{}x{}, logger at {}", study::TRAY_ROWS, study::TRAY_COLS, study::LOGGER_POSITION),
    );
    mprint!();
}

/// "Plate N" for batch trays (1-based), "Test plate" for the single test tray.
/// Headers print it uppercased.
fn plate_title(number: Option<usize>) -> String {
    match number {
        Some(n) => format!("Plate {n}"),
        None => "Test plate".to_string(),
    }
}

fn print_tray(title: &str, tray: &Tray, display: &DisplayMap, cfg: &Config) {
    match cfg.quiet {
        0 => print::header(title, cfg.quiet),
        _ => print::print(&format!("{}", title.to_uppercase().color(colors::PRIMARY))),
    }
    for line in table::render_tray(tray, display) {
        print::print(&line);
    }
}

fn print_summary(count: usize, variant: TrayVariant, cfg: &Config) {
    let trays: ColoredString = format!("{count} trays").bold().green();
    let seed: ColoredString = study::STUDY_SEED.to_string().bold().yellow();
    let output: String = format!("Layout Complete: {trays} ({variant}) from seed {seed}");

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

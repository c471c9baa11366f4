//! # Study Presets
//!
//! Fixed constants of the forest-regeneration seed study. The functions in
//! [`crate::seeds`] and [`crate::layout`] never read these directly; callers
//! pass them in.
//!
//! Thousand-seed weights: gebirgswald.ch, confirmed by Schuck et al.

use std::fmt;
use std::str::FromStr;

use seedtray_common::models::species::SpeciesSeedRecord;
use seedtray_common::models::tray::{Position, TrayLayoutSpec};

/// Master seed recorded for the study randomization.
pub const STUDY_SEED: u64 = 69;
/// Number of trays in the full batch.
pub const TRAY_COUNT: usize = 72;
pub const TRAY_ROWS: usize = 4;
pub const TRAY_COLS: usize = 6;
/// Cell occupied by the microclimate logger.
pub const LOGGER_POSITION: Position = Position::new(2, 2);
pub const LOGGER_LABEL: &str = "L";
/// Pots per tray without seeds.
pub const BLANK_POTS: usize = 3;
pub const POTS_PER_SPECIES: usize = 5;

/// A species sown in the study.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Species {
    /// Full scientific name, used in the seed report.
    pub name: &'static str,
    /// Label placed on tray cells.
    pub label: &'static str,
    /// Four-letter code (first two letters of genus and epithet).
    pub code: &'static str,
    pub abbreviation: &'static str,
    /// Thousand-seed weight bounds, grams.
    pub min_tkg: f64,
    pub max_tkg: f64,
    /// Seed weight bought for the study, grams.
    pub bought: f64,
}

pub const SPECIES: [Species; 4] = [
    Species {
        name: "Picea abies",
        label: "P. abies",
        code: "Piab",
        abbreviation: "P. abi",
        min_tkg: 4.0,
        max_tkg: 8.0,
        bought: 100.0,
    },
    Species {
        name: "Pinus cembra",
        label: "P. cembra",
        code: "Pice",
        abbreviation: "P. cem",
        min_tkg: 150.0,
        max_tkg: 300.0,
        bought: 2000.0,
    },
    Species {
        name: "Acer pseudoplatanus",
        label: "A. pseudoplatanus",
        code: "Acps",
        abbreviation: "A. pse",
        min_tkg: 100.0,
        max_tkg: 250.0,
        bought: 3000.0,
    },
    Species {
        name: "Sorbus aucuparia",
        label: "S. aucuparia",
        code: "Soau",
        abbreviation: "S. auc",
        min_tkg: 3.5,
        max_tkg: 5.0,
        bought: 200.0,
    },
];

/// Seed-count input table, one record per species in [`SPECIES`] order.
pub fn seed_records() -> Vec<SpeciesSeedRecord> {
    SPECIES
        .iter()
        .map(|s| SpeciesSeedRecord::new(s.name, s.min_tkg, s.max_tkg, s.bought))
        .collect()
}

/// What the blank pots of a tray hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrayVariant {
    /// Pots with soil but no seeds.
    #[default]
    Control,
    /// Empty pots.
    Empty,
}

impl TrayVariant {
    pub fn blank_label(self) -> &'static str {
        match self {
            TrayVariant::Control => "C",
            TrayVariant::Empty => "E",
        }
    }

    /// Fill labels in their fixed order: blanks first, then every species in
    /// [`SPECIES`] order. Changing this order changes every tray for a given
    /// seed.
    pub fn fill_labels(self) -> Vec<String> {
        let blanks = std::iter::repeat_n(self.blank_label(), BLANK_POTS);
        let species = SPECIES
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.label, POTS_PER_SPECIES));

        blanks.chain(species).map(str::to_owned).collect()
    }

    pub fn layout_spec(self) -> TrayLayoutSpec {
        TrayLayoutSpec {
            rows: TRAY_ROWS,
            cols: TRAY_COLS,
            pinned: LOGGER_POSITION,
            pinned_label: LOGGER_LABEL.to_string(),
            fill_labels: self.fill_labels(),
        }
    }
}

impl fmt::Display for TrayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayVariant::Control => f.write_str("control"),
            TrayVariant::Empty => f.write_str("empty"),
        }
    }
}

impl FromStr for TrayVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "control" | "c" => Ok(TrayVariant::Control),
            "empty" | "leer" | "e" => Ok(TrayVariant::Empty),
            _ => Err(format!("invalid tray variant: {s} (expected 'control' or 'empty')")),
        }
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

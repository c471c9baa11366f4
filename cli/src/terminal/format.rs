use std::collections::HashMap;

use crate::terminal::colors;
use colored::*;
use seedtray_common::models::species::{SeedCountEstimate, SpeciesSeedRecord};
use seedtray_core::study::{self, TrayVariant};

pub type Detail = (String, ColoredString);

/// Maps core tray labels to what is printed in a tray cell.
pub struct DisplayMap {
    labels: HashMap<String, ColoredString>,
}

impl DisplayMap {
    /// The control variant prints four-letter species codes, the empty
    /// variant prints short abbreviations.
    pub fn for_variant(variant: TrayVariant) -> Self {
        let mut labels: HashMap<String, ColoredString> = HashMap::new();
        labels.insert(study::LOGGER_LABEL.to_string(), "logger".color(colors::NEUTRAL));

        let blank = match variant {
            TrayVariant::Control => "control",
            TrayVariant::Empty => "leer",
        };
        labels.insert(variant.blank_label().to_string(), blank.color(colors::NEUTRAL));

        for (species, color) in study::SPECIES.iter().zip(colors::SPECIES) {
            let text = match variant {
                TrayVariant::Control => species.code,
                TrayVariant::Empty => species.abbreviation,
            };
            labels.insert(species.label.to_string(), text.color(color));
        }

        Self { labels }
    }

    /// Unknown labels are printed as they are.
    pub fn render(&self, label: &str) -> ColoredString {
        self.labels
            .get(label)
            .cloned()
            .unwrap_or_else(|| label.normal())
    }
}

pub fn estimate_to_details(record: &SpeciesSeedRecord, estimate: &SeedCountEstimate) -> Vec<Detail> {
    vec![
        (
            "TKG".to_string(),
            format!("{} - {} g", record.min_weight, record.max_weight).normal(),
        ),
        (
            "Bought".to_string(),
            format!("{} g", record.available_weight).normal(),
        ),
        (
            "Seeds".to_string(),
            format!("{} - {}", estimate.min_count, estimate.max_count)
                .green()
                .bold(),
        ),
        (
            "Mean".to_string(),
            estimate.mean_count.to_string().yellow().bold(),
        ),
    ]
}

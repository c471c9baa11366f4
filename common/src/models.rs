//! # Domain Models
//!
//! * [`species::SpeciesSeedRecord`] and [`species::SeedCountEstimate`]: input and
//!   output of the seed count estimation.
//! * [`tray::TrayLayoutSpec`] and [`tray::Tray`]: input and output of the tray
//!   layout generator.

pub mod species;
pub mod tray;

//! # Seedtray Core
//!
//! The two pure computations of the study and the fixed study presets:
//!
//! * [`seeds`]: seed count ranges from bulk weight and thousand-seed weight.
//! * [`layout`]: randomized placement of pots onto a tray with one pinned cell.
//! * [`batch`]: many reproducible trays from one recorded master seed.
//! * [`study`]: species table, tray shape and label sets used by the study.

pub mod batch;
pub mod layout;
pub mod seeds;
pub mod study;

//! # Error Taxonomy
//!
//! Every failure is a validation failure detected before any result is
//! produced, so none of these are retryable.

use std::fmt;

use thiserror::Error;

use crate::models::tray::Position;

pub type Result<T> = std::result::Result<T, StudyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StudyError {
    /// A species record carries a weight that cannot be turned into a count.
    #[error("record {index} ({species}): {field} {problem}")]
    InvalidInput {
        index: usize,
        species: String,
        field: WeightField,
        problem: InputProblem,
    },

    /// The fill labels do not cover every free cell exactly once.
    #[error("layout needs {expected} fill labels, got {actual}")]
    LayoutSizeMismatch { expected: usize, actual: usize },

    #[error("pinned position {position} lies outside a {rows}x{cols} tray")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

/// Names the offending field of a [`crate::models::species::SpeciesSeedRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightField {
    MinWeight,
    MaxWeight,
    AvailableWeight,
}

impl fmt::Display for WeightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightField::MinWeight => "min weight",
            WeightField::MaxWeight => "max weight",
            WeightField::AvailableWeight => "available weight",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputProblem {
    /// Zero, negative, NaN or infinite.
    NotPositive(f64),
    /// The lower thousand-seed weight is above the upper one.
    ExceedsMax { min: f64, max: f64 },
    /// The weight is so small the seed count does not fit a `u64`.
    CountOverflow(f64),
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::NotPositive(value) => {
                write!(f, "must be a finite positive number, got {value}")
            }
            InputProblem::ExceedsMax { min, max } => {
                write!(f, "{min} g exceeds max weight {max} g")
            }
            InputProblem::CountOverflow(value) => {
                write!(f, "{value} g yields more seeds than can be counted")
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_record_and_field() {
        let err = StudyError::InvalidInput {
            index: 2,
            species: "Acer pseudoplatanus".to_string(),
            field: WeightField::AvailableWeight,
            problem: InputProblem::NotPositive(0.0),
        };
        assert_eq!(
            err.to_string(),
            "record 2 (Acer pseudoplatanus): available weight must be a finite positive number, got 0"
        );
    }

    #[test]
    fn test_reversed_bounds_message() {
        let err = StudyError::InvalidInput {
            index: 0,
            species: "Picea abies".to_string(),
            field: WeightField::MinWeight,
            problem: InputProblem::ExceedsMax { min: 8.0, max: 4.0 },
        };
        assert_eq!(
            err.to_string(),
            "record 0 (Picea abies): min weight 8 g exceeds max weight 4 g"
        );
    }

    #[test]
    fn test_layout_errors_display() {
        let mismatch = StudyError::LayoutSizeMismatch {
            expected: 23,
            actual: 22,
        };
        assert_eq!(mismatch.to_string(), "layout needs 23 fill labels, got 22");

        let oob = StudyError::OutOfBounds {
            position: Position::new(4, 1),
            rows: 4,
            cols: 6,
        };
        assert_eq!(
            oob.to_string(),
            "pinned position (4, 1) lies outside a 4x6 tray"
        );
    }
}

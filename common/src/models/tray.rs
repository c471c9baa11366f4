//! # Tray Models
//!
//! A tray is a fixed `rows x cols` grid of pots. One cell is pinned (the
//! microclimate logger) and every other cell receives exactly one fill label.

use std::fmt;

use crate::error::{Result, StudyError};

/// Zero-based grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Everything needed to lay out one tray.
///
/// The order of `fill_labels` is part of the reproducibility contract: the
/// same seed with a reordered label list yields a different tray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrayLayoutSpec {
    pub rows: usize,
    pub cols: usize,
    pub pinned: Position,
    pub pinned_label: String,
    pub fill_labels: Vec<String>,
}

impl TrayLayoutSpec {
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Bounds are checked first so a zero-sized grid never reaches the size
    /// arithmetic.
    pub fn validate(&self) -> Result<()> {
        if self.pinned.row >= self.rows || self.pinned.col >= self.cols {
            return Err(StudyError::OutOfBounds {
                position: self.pinned,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let expected = self.cell_count() - 1;
        if self.fill_labels.len() != expected {
            return Err(StudyError::LayoutSizeMismatch {
                expected,
                actual: self.fill_labels.len(),
            });
        }

        Ok(())
    }

    /// Every coordinate except the pinned one, row-major.
    pub fn free_positions(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Position::new(row, col)))
            .filter(|pos| *pos != self.pinned)
            .collect()
    }
}

/// A fully populated tray. Cells are stored row-major and never change after
/// generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tray {
    rows: usize,
    cols: usize,
    cells: Vec<String>,
}

impl Tray {
    /// Builds a tray from row-major cells.
    ///
    /// Returns `None` when the cell count does not match the shape.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<String>) -> Option<Self> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, pos: Position) -> Option<&str> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).map(String::as_str)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[String]> {
        self.cells.chunks(self.cols)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
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

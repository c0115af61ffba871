//! Grid construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building a [`Grid`](super::Grid) from a height map.
///
/// Only construction can fail; every query on a built grid answers with a
/// value (off-map tiles report [`Grid::OFF_MAP`](super::Grid::OFF_MAP)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Height map rows do not all have the same length.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Negative heights are reserved for the off-map sentinel.
    #[error("tile ({x}, {y}) has negative elevation {elevation}")]
    NegativeElevation { x: i32, y: i32, elevation: i32 },

    /// Dimensions do not fit in grid coordinates.
    #[error("height map of {columns}x{rows} tiles is too large")]
    TooLarge { columns: usize, rows: usize },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::RaggedRow { .. } => "GRID_RAGGED_ROW",
            GridError::NegativeElevation { .. } => "GRID_NEGATIVE_ELEVATION",
            GridError::TooLarge { .. } => "GRID_TOO_LARGE",
        }
    }
}

use std::{error::Error, fmt};

use crate::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The persisted matrix has a different number of rows than columns.
    NotSquare { rows: usize, cols: usize },

    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    OutOfBounds { pos: Position, side_len: usize },

    TooManyCells { requested: usize, available: usize },

    TooLarge { side_len: usize, max_tiles: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "Board must be square, got {rows} rows of {cols} columns")
            }
            Self::Ragged { row, len, expected } => {
                write!(f, "Row {row} has {len} cells, expected {expected}")
            }
            Self::OutOfBounds { pos, side_len } => {
                write!(
                    f,
                    "Position {pos} is outside the {side_len}x{side_len} board"
                )
            }
            Self::TooManyCells {
                requested,
                available,
            } => write!(
                f,
                "Board size too small for {requested} alive cells ({available} available)"
            ),
            Self::TooLarge {
                side_len,
                max_tiles,
            } => write!(
                f,
                "Side length {side_len} is too large, boards hold at most {max_tiles} tiles"
            ),
        }
    }
}

impl Error for BoardError {}

//! Board square identifiers.
//!
//! Squares are numbered 1 to 100. Square 1 doubles as the starting square:
//! tokens that have not moved yet sit on it.
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::Cell;
//!
//! let start = Cell::START;
//! assert_eq!(start.get(), 1);
//!
//! let cell = Cell::new(42).unwrap();
//! assert_eq!(cell.get(), 42);
//!
//! assert!(Cell::new(0).is_err());
//! assert!(Cell::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A validated board square in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(pub(crate) u8);

impl Cell {
    /// Number of squares along one edge of the board.
    pub const SIDE: u8 = 10;

    /// Lowest square, where both tokens start.
    pub const START: Cell = Cell(1);

    /// Highest square. Landing here wins the game.
    pub const FINISH: Cell = Cell(100);

    /// Create a cell, rejecting values outside `1..=100`.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::START.0..=Self::FINISH.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidInput(format!("cell {value} is outside 1..=100")))
        }
    }

    /// Get the raw square number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check if this is the winning square.
    #[must_use]
    pub const fn is_finish(self) -> bool {
        self.0 == Self::FINISH.0
    }

    /// Zero-based offset from square 1, used by the grid geometry.
    #[must_use]
    pub(crate) const fn offset(self) -> u8 {
        self.0 - 1
    }

    /// Iterate over every square, 1 through 100.
    pub fn all() -> impl Iterator<Item = Cell> {
        (Self::START.0..=Self::FINISH.0).map(Cell)
    }
}

impl TryFrom<u8> for Cell {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

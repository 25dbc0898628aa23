//! Boustrophedon grid geometry.
//!
//! Rows run bottom to top. Even rows (0, 2, ...) number their squares left
//! to right, odd rows right to left, so square 10 sits directly below 11:
//!
//! ```text
//! row 9: 100 99 98 97 96 95 94 93 92 91
//! row 8:  81 82 83 84 85 86 87 88 89 90
//!  ...
//! row 1:  20 19 18 17 16 15 14 13 12 11
//! row 0:   1  2  3  4  5  6  7  8  9 10
//! ```
//!
//! Nothing in the turn engine uses this; it exists for the presentation
//! layer to place tokens.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameError, Result};

/// Grid column and row of a square, both in `0..10`. Row 0 is the bottom.
pub fn grid_of(cell: Cell) -> (u8, u8) {
    let row = cell.offset() / Cell::SIDE;
    let mut col = cell.offset() % Cell::SIDE;
    if row % 2 == 1 {
        col = Cell::SIDE - 1 - col;
    }
    (col, row)
}

/// Inverse of [`grid_of`].
pub fn cell_at(col: u8, row: u8) -> Result<Cell> {
    if col >= Cell::SIDE || row >= Cell::SIDE {
        return Err(GameError::InvalidInput(format!(
            "grid position ({col}, {row}) is off the board"
        )));
    }
    let col = if row % 2 == 1 { Cell::SIDE - 1 - col } else { col };
    Cell::new(row * Cell::SIDE + col + 1)
}

/// Pixel layout of the board for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Geometry {
    cell_pixels: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { cell_pixels: 60 }
    }
}

impl Geometry {
    /// Largest square edge accepted, in pixels.
    pub const MAX_CELL_PIXELS: u32 = 4096;

    /// Geometry with squares `cell_pixels` wide.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless `cell_pixels` is in `1..=MAX_CELL_PIXELS`.
    pub fn new(cell_pixels: u32) -> Result<Self> {
        if !(1..=Self::MAX_CELL_PIXELS).contains(&cell_pixels) {
            return Err(GameError::InvalidInput(format!(
                "cell size {cell_pixels}px is outside 1..={}",
                Self::MAX_CELL_PIXELS
            )));
        }
        Ok(Self { cell_pixels })
    }

    /// Edge length of one square in pixels.
    #[must_use]
    pub const fn cell_pixels(&self) -> u32 {
        self.cell_pixels
    }

    /// Edge length of the whole board in pixels.
    #[must_use]
    pub const fn board_pixels(&self) -> u32 {
        self.cell_pixels * Cell::SIDE as u32
    }

    /// Pixel centre `(x, y)` of a square, origin top-left.
    ///
    /// ```
    /// use snakes_ladders::board::Geometry;
    /// use snakes_ladders::core::Cell;
    ///
    /// let geometry = Geometry::new(60).unwrap();
    /// assert_eq!(geometry.coordinates_of(Cell::START), (30, 570));
    /// assert_eq!(geometry.coordinates_of(Cell::FINISH), (30, 30));
    /// ```
    #[must_use]
    pub fn coordinates_of(&self, cell: Cell) -> (u32, u32) {
        let (col, row) = grid_of(cell);
        let half = self.cell_pixels / 2;
        let x = u32::from(col) * self.cell_pixels + half;
        let y = u32::from(Cell::SIDE - 1 - row) * self.cell_pixels + half;
        (x, y)
    }
}

impl TryFrom<u32> for Geometry {
    type Error = GameError;

    fn try_from(cell_pixels: u32) -> Result<Self> {
        Self::new(cell_pixels)
    }
}

impl From<Geometry> for u32 {
    fn from(geometry: Geometry) -> u32 {
        geometry.cell_pixels
    }
}

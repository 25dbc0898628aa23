//! Game configuration types.
//!
//! The board layout is data, not code:
//! - `TransitionSpec`: one snake or ladder (kind, head, tail)
//! - `BoardConfig`: the full snake/ladder table
//! - `GameConfig`: board table plus presentation geometry and RNG seed
//!
//! Configs are plain serde values so a front end can load a table from
//! JSON once at startup. They are validated when a `Board` is built.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::{GameError, Result};

/// Whether a transition moves a token up or down the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Moves the token to a higher square.
    Ladder,
    /// Moves the token to a lower square.
    Snake,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Ladder => write!(f, "ladder"),
            TransitionKind::Snake => write!(f, "snake"),
        }
    }
}

/// One row of the snake/ladder table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub kind: TransitionKind,
    /// Square that triggers the jump.
    pub head: Cell,
    /// Square the token lands on after the jump.
    pub tail: Cell,
}

impl TransitionSpec {
    /// Create a ladder from `head` up to `tail`.
    pub fn ladder(head: u8, tail: u8) -> Result<Self> {
        Ok(Self {
            kind: TransitionKind::Ladder,
            head: Cell::new(head)?,
            tail: Cell::new(tail)?,
        })
    }

    /// Create a snake from `head` down to `tail`.
    pub fn snake(head: u8, tail: u8) -> Result<Self> {
        Ok(Self {
            kind: TransitionKind::Snake,
            head: Cell::new(head)?,
            tail: Cell::new(tail)?,
        })
    }
}

/// Snake and ladder table.
///
/// `Default` is the classic layout the game ships with:
///
/// | kind   | head → tail                                   |
/// |--------|-----------------------------------------------|
/// | snake  | 99→54, 70→55, 52→42, 25→2, 95→72              |
/// | ladder | 6→25, 11→40, 60→85, 46→90, 17→69              |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub transitions: Vec<TransitionSpec>,
}

const DEFAULT_SNAKES: [(u8, u8); 5] = [(99, 54), (70, 55), (52, 42), (25, 2), (95, 72)];
const DEFAULT_LADDERS: [(u8, u8); 5] = [(6, 25), (11, 40), (60, 85), (46, 90), (17, 69)];

impl Default for BoardConfig {
    fn default() -> Self {
        let snakes = DEFAULT_SNAKES.iter().map(|&(head, tail)| TransitionSpec {
            kind: TransitionKind::Snake,
            head: Cell(head),
            tail: Cell(tail),
        });
        let ladders = DEFAULT_LADDERS.iter().map(|&(head, tail)| TransitionSpec {
            kind: TransitionKind::Ladder,
            head: Cell(head),
            tail: Cell(tail),
        });

        Self {
            transitions: snakes.chain(ladders).collect(),
        }
    }
}

impl BoardConfig {
    /// A board with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a ladder.
    pub fn with_ladder(mut self, head: u8, tail: u8) -> Result<Self> {
        self.transitions.push(TransitionSpec::ladder(head, tail)?);
        Ok(self)
    }

    /// Add a snake.
    pub fn with_snake(mut self, head: u8, tail: u8) -> Result<Self> {
        self.transitions.push(TransitionSpec::snake(head, tail)?);
        Ok(self)
    }

    /// Parse a table from JSON.
    ///
    /// ```
    /// use snakes_ladders::core::{BoardConfig, TransitionKind};
    ///
    /// let config = BoardConfig::from_json(
    ///     r#"{"transitions": [{"kind": "ladder", "head": 3, "tail": 30}]}"#,
    /// ).unwrap();
    /// assert_eq!(config.transitions[0].kind, TransitionKind::Ladder);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidBoard(e.to_string()))
    }

    /// Iterate over the table rows of one kind.
    pub fn of_kind(&self, kind: TransitionKind) -> impl Iterator<Item = &TransitionSpec> {
        self.transitions.iter().filter(move |t| t.kind == kind)
    }
}

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Snake and ladder table.
    pub board: BoardConfig,

    /// Edge length of one square in pixels, for `coordinates_of`.
    /// The default 60 gives a 600×600 board. Checked against
    /// `Geometry::MAX_CELL_PIXELS` when the board is built.
    pub cell_pixels: u32,

    /// Dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            cell_pixels: 60,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with the default board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snake/ladder table.
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the square size in pixels.
    pub fn with_cell_pixels(mut self, pixels: u32) -> Self {
        self.cell_pixels = pixels;
        self
    }

    /// Set a fixed dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_table() {
        let config = BoardConfig::default();
        assert_eq!(config.transitions.len(), 10);
        assert_eq!(config.of_kind(TransitionKind::Snake).count(), 5);
        assert_eq!(config.of_kind(TransitionKind::Ladder).count(), 5);

        assert!(config.transitions.contains(&TransitionSpec::snake(99, 54).unwrap()));
        assert!(config.transitions.contains(&TransitionSpec::ladder(6, 25).unwrap()));
    }

    #[test]
    fn test_builder_pattern() {
        let board = BoardConfig::empty()
            .with_ladder(2, 38)
            .unwrap()
            .with_snake(87, 24)
            .unwrap();
        let config = GameConfig::new()
            .with_board(board.clone())
            .with_cell_pixels(80)
            .with_seed(123);

        assert_eq!(config.board, board);
        assert_eq!(config.cell_pixels, 80);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_builder_rejects_off_board_cells() {
        assert!(BoardConfig::empty().with_ladder(0, 10).is_err());
        assert!(BoardConfig::empty().with_snake(120, 10).is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_rows() {
        let bad_cell = r#"{"transitions": [{"kind": "snake", "head": 0, "tail": 1}]}"#;
        assert!(matches!(BoardConfig::from_json(bad_cell), Err(GameError::InvalidBoard(_))));

        let bad_kind = r#"{"transitions": [{"kind": "chute", "head": 40, "tail": 1}]}"#;
        assert!(matches!(BoardConfig::from_json(bad_kind), Err(GameError::InvalidBoard(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

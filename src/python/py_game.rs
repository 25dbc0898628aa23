//! Game bindings for Python.

use pyo3::prelude::*;

use crate::board::Board;
use crate::core::{BoardConfig, GameConfig, Player};
use crate::play::{AutoPlayConfig, AutoPlayer, Match};

use super::py_core::{cell_arg, player_name, PyMoveResult};

/// Python wrapper for a human-vs-computer match.
///
/// The front end calls `roll()` when the player presses the button, then
/// `computer_turn()` once its own delay has passed.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Match,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: Dice seed, or None to seed from the OS
    /// - cell_pixels: Square size used by coordinates_of (default 60)
    /// - board_json: Snake/ladder table as JSON, or None for the default board
    #[new]
    #[pyo3(signature = (seed = None, cell_pixels = 60, board_json = None))]
    fn new(seed: Option<u64>, cell_pixels: u32, board_json: Option<&str>) -> PyResult<Self> {
        let board = match board_json {
            Some(json) => BoardConfig::from_json(json)?,
            None => BoardConfig::default(),
        };
        let mut config = GameConfig::new().with_board(board).with_cell_pixels(cell_pixels);
        config.seed = seed;

        Ok(Self {
            game: Match::from_config(&config)?,
        })
    }

    /// Roll for the human. Raises RuntimeError out of turn or after a win.
    fn roll(&mut self) -> PyResult<PyMoveResult> {
        Ok(PyMoveResult(self.game.human_roll()?))
    }

    /// Roll for the computer. Raises RuntimeError out of turn or after a win.
    fn computer_turn(&mut self) -> PyResult<PyMoveResult> {
        Ok(PyMoveResult(self.game.computer_turn()?))
    }

    /// Start a new game on the same board.
    fn restart(&mut self) {
        self.game.restart();
    }

    /// (human, computer) positions.
    #[getter]
    fn positions(&self) -> (u8, u8) {
        let state = self.game.state();
        (
            state.position(Player::Human).get(),
            state.position(Player::Computer).get(),
        )
    }

    /// "human" or "computer" while the game runs, None once won.
    #[getter]
    fn turn(&self) -> Option<&'static str> {
        self.game.state().turn().map(player_name)
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.game.state().winner().map(player_name)
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.game.state().turn_number()
    }

    /// Pixel centre (x, y) of a square.
    fn coordinates_of(&self, cell: u8) -> PyResult<(u32, u32)> {
        Ok(self.game.engine().board().coordinates_of(cell_arg(cell)?))
    }

    /// Destination of the snake or ladder starting on `cell`, or None.
    fn special_transition(&self, cell: u8) -> PyResult<Option<u8>> {
        let board = self.game.engine().board();
        Ok(board.special_transition(cell_arg(cell)?).map(|c| c.get()))
    }

    /// The game so far as a JSON record.
    fn record_json(&self) -> PyResult<String> {
        self.game
            .record()
            .to_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let (human, computer) = self.positions();
        let status = match self.game.state().winner() {
            Some(winner) => format!("won by {}", player_name(winner)),
            None => "ongoing".to_string(),
        };
        format!("Game(human={human}, computer={computer}, {status})")
    }
}

/// Play `games` unattended games on the default board.
///
/// Returns (human_wins, computer_wins, mean_turns).
#[pyfunction]
#[pyo3(signature = (games = 100, seed_offset = 0, max_turns = 1000))]
pub fn simulate(games: u32, seed_offset: u64, max_turns: u32) -> PyResult<(u32, u32, f64)> {
    let config = AutoPlayConfig::new()
        .with_games(games)
        .with_seed_offset(seed_offset)
        .with_max_turns(max_turns);
    let summary = AutoPlayer::new(Board::default(), config).simulate()?;
    Ok((
        summary.wins[Player::Human],
        summary.wins[Player::Computer],
        summary.mean_turns,
    ))
}

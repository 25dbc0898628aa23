//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Cell, GameError, LegKind, MoveEvent, MoveResult, Player};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        match err {
            GameError::InvalidInput(_) | GameError::InvalidBoard(_) => {
                PyErr::new::<PyValueError, _>(err.to_string())
            }
            GameError::InvalidState(_) | GameError::TurnLimit(_) => {
                PyErr::new::<PyRuntimeError, _>(err.to_string())
            }
        }
    }
}

pub(crate) fn player_name(player: Player) -> &'static str {
    match player {
        Player::Human => "human",
        Player::Computer => "computer",
    }
}

pub(crate) fn cell_arg(value: u8) -> PyResult<Cell> {
    Ok(Cell::new(value)?)
}

/// Python wrapper for MoveResult.
///
/// Read-only view of one resolved roll.
#[pyclass(name = "MoveResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    /// "human" or "computer".
    #[getter]
    fn player(&self) -> &'static str {
        player_name(self.0.player)
    }

    #[getter]
    fn start(&self) -> u8 {
        self.0.start.get()
    }

    #[getter]
    fn dice(&self) -> u8 {
        self.0.dice
    }

    #[getter]
    fn straight(&self) -> u8 {
        self.0.straight
    }

    #[getter]
    fn bounced(&self) -> u8 {
        self.0.bounced.get()
    }

    #[getter]
    fn final_cell(&self) -> u8 {
        self.0.final_cell.get()
    }

    /// "ladder", "snake", or None.
    #[getter]
    fn event(&self) -> Option<&'static str> {
        match self.0.event {
            MoveEvent::None => None,
            MoveEvent::LadderClimb { .. } => Some("ladder"),
            MoveEvent::SnakeBite { .. } => Some("snake"),
        }
    }

    /// (from, to) of the snake or ladder taken, or None.
    #[getter]
    fn jump(&self) -> Option<(u8, u8)> {
        self.0.event.jump().map(|(from, to)| (from.get(), to.get()))
    }

    #[getter]
    fn won(&self) -> bool {
        self.0.won
    }

    /// Animation legs as (kind, from, to) with kind "walk" or "jump".
    fn legs(&self) -> Vec<(&'static str, u8, u8)> {
        self.0
            .legs()
            .iter()
            .map(|leg| {
                let kind = match leg.kind {
                    LegKind::Walk => "walk",
                    LegKind::Jump => "jump",
                };
                (kind, leg.from.get(), leg.to.get())
            })
            .collect()
    }

    /// Squares stepped on during the walk, in order.
    fn steps(&self) -> Vec<u8> {
        self.0.steps().iter().map(|c| c.get()).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveResult(player={}, dice={}, {} -> {} -> {})",
            player_name(self.0.player),
            self.0.dice,
            self.0.start,
            self.0.bounced,
            self.0.final_cell
        )
    }
}

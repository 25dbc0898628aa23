//! Python bindings for the snakes-ladders engine.
//!
//! Lets a Python front end (Tk, pygame, ...) own the window and animation
//! while the rules run here.
//!
//! # Quick Start
//!
//! ```python
//! import snakes_ladders as sl
//!
//! game = sl.Game(seed=42)
//!
//! move = game.roll()
//! for kind, start, end in move.legs():
//!     animate(start, end)
//!
//! if move.won:
//!     show_winner(game.winner)
//! else:
//!     root.after(1500, lambda: game.computer_turn())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// snakes_ladders: a Snakes & Ladders turn engine.
#[pymodule]
fn snakes_ladders(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveResult>()?;
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;

    Ok(())
}

//! # snakes-ladders
//!
//! A Snakes & Ladders turn engine for one human against an automated
//! opponent, with the board, window and animation left to a front end.
//!
//! ## Design Principles
//!
//! 1. **State as values**: `resolve_turn` takes a `GameState` and returns a
//!    new one. Nothing global, nothing hidden.
//!
//! 2. **No timing**: the engine never sleeps or waits. It returns a
//!    `MoveResult` describing the walk and the jump; the front end animates
//!    them on its own schedule.
//!
//! 3. **Injectable dice**: every roll comes from a `DiceSource`, so games
//!    can be seeded, scripted and replayed.
//!
//! ## Modules
//!
//! - `core`: cells, players, state, dice, configuration, errors
//! - `board`: snake/ladder lookup and square geometry
//! - `rules`: the turn engine and move results
//! - `play`: match driver, game records, unattended play
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{Cell, Player, TurnEngine};
//!
//! let engine = TurnEngine::with_seed(42);
//! let state = engine.new_game();
//!
//! // Roll a 5 from square 1: land on 6, climb the ladder to 25.
//! let (state, result) = engine.resolve_turn(&state, 5).unwrap();
//! assert_eq!(result.final_cell, Cell::new(25).unwrap());
//! assert_eq!(state.turn(), Some(Player::Computer));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Player, PlayerMap,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    BoardConfig, GameConfig, TransitionKind, TransitionSpec,
    GameError, Result,
    GameState, Status,
};

pub use crate::board::{Board, Geometry, Transition};

pub use crate::rules::{bounce, Leg, LegKind, MoveEvent, MoveResult, TurnEngine};

pub use crate::play::{AutoPlayConfig, AutoPlayer, GameRecord, Match, RecordError, SimulationSummary};

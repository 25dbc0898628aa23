//! Core engine types: cells, players, moves, state, dice, configuration,
//! errors.
//!
//! Everything here is plain data with no knowledge of the presentation
//! layer. The board model and turn engine build on these types.

pub mod cell;
pub mod config;
pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use cell::Cell;
pub use config::{BoardConfig, GameConfig, TransitionKind, TransitionSpec};
pub use error::{GameError, Result};
pub use outcome::{bounce, Leg, LegKind, MoveEvent, MoveResult};
pub use player::{Player, PlayerMap};
pub use rng::{validate_die, DiceSource, GameRng, GameRngState, ScriptedDice, DIE_MAX, DIE_MIN};
pub use state::{GameState, Status};

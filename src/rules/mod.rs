//! Turn engine and move results.
//!
//! - `TurnEngine`: rolls, resolves, and sequences turns
//! - `MoveResult`: everything one roll did, for animation and display
//!   (defined in `core` so game state can keep a history of them)

mod engine;

pub use engine::TurnEngine;
pub use crate::core::{bounce, Leg, LegKind, MoveEvent, MoveResult};

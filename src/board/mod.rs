//! Board model: snake/ladder lookup and square geometry.
//!
//! Pure and stateless once built. The turn engine only uses
//! `special_transition`; the geometry is for the presentation layer.

mod geometry;
mod layout;

pub use geometry::{cell_at, grid_of, Geometry};
pub use layout::{validate, Board, Transition};

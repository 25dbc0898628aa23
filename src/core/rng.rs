//! Dice sources.
//!
//! The engine never reaches for a global generator. It draws every die
//! from a [`DiceSource`] it owns, so tests and replays can supply exact
//! sequences.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedDice` replays a fixed list of faces
//!
//! ```
//! use snakes_ladders::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let face = a.next_die();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.next_die());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Lowest face of the die.
pub const DIE_MIN: u8 = 1;

/// Highest face of the die.
pub const DIE_MAX: u8 = 6;

/// Check that a die face is in `1..=6`.
pub fn validate_die(face: u8) -> Result<u8> {
    if (DIE_MIN..=DIE_MAX).contains(&face) {
        Ok(face)
    } else {
        Err(GameError::InvalidInput(format!("dice value {face} is outside 1..=6")))
    }
}

/// Source of die rolls.
///
/// Implementations must only ever return faces in `1..=6`.
pub trait DiceSource {
    /// Roll one die.
    fn next_die(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn next_die(&mut self) -> u8 {
        (**self).next_die()
    }
}

/// Deterministic, seedable six-sided die.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so the game can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn next_die(&mut self) -> u8 {
        self.inner.gen_range(DIE_MIN..=DIE_MAX)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a scripted die. Every face must be in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self> {
        let faces = faces
            .into_iter()
            .map(validate_die)
            .collect::<Result<Vec<_>>>()?;

        if faces.is_empty() {
            return Err(GameError::InvalidInput("scripted dice need at least one face".into()));
        }

        Ok(Self { faces, cursor: 0 })
    }

    /// Number of faces rolled so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn next_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

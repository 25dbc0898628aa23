//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the table: the human at the keyboard and the
//! automated opponent. The human always moves first.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person driving the presentation layer.
    Human,
    /// The automated opponent, which only ever rolls the dice.
    Computer,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    /// The player who moves after this one.
    ///
    /// ```
    /// use snakes_ladders::core::Player;
    ///
    /// assert_eq!(Player::Human.other(), Player::Computer);
    /// assert_eq!(Player::Computer.other(), Player::Human);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Seat index (0 for the human, 1 for the computer).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{Player, PlayerMap};
///
/// let mut rolls: PlayerMap<u32> = PlayerMap::with_value(0);
/// rolls[Player::Computer] += 1;
///
/// assert_eq!(rolls[Player::Human], 0);
/// assert_eq!(rolls[Player::Computer], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: Player::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

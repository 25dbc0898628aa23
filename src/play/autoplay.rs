//! Unattended play.
//!
//! Plays whole games with both seats rolling automatically, for smoke
//! testing boards and gathering statistics about a layout (how long games
//! run, how often each side wins, how often snakes and ladders fire).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameError, GameRng, Player, PlayerMap, Result};
use crate::rules::TurnEngine;

use super::driver::Match;
use super::record::GameRecord;

/// Configuration for unattended play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlayConfig {
    /// Give up on a game after this many turns.
    pub max_turns: u32,

    /// Number of games `simulate` plays.
    pub games: u32,

    /// Seed of the first game. Game `i` uses `seed_offset + i`, wrapping
    /// past `u64::MAX`.
    pub seed_offset: u64,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            max_turns: 1_000,
            games: 100,
            seed_offset: 0,
        }
    }
}

impl AutoPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn limit per game.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the number of games to simulate.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the first game's seed.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Aggregate results over many games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub games: u32,
    pub wins: PlayerMap<u32>,
    pub shortest: u32,
    pub longest: u32,
    pub mean_turns: f64,
    pub ladders: u32,
    pub snakes: u32,
    pub bounces: u32,
}

impl SimulationSummary {
    /// Fraction of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.games)
        }
    }
}

/// Plays games on one board without a front end.
#[derive(Clone, Debug)]
pub struct AutoPlayer {
    board: Board,
    config: AutoPlayConfig,
}

impl AutoPlayer {
    pub fn new(board: Board, config: AutoPlayConfig) -> Self {
        Self { board, config }
    }

    #[must_use]
    pub fn config(&self) -> &AutoPlayConfig {
        &self.config
    }

    /// Play one game to the finish.
    ///
    /// # Errors
    ///
    /// `TurnLimit` if nobody has won after `max_turns` turns.
    pub fn play_game(&self, seed: u64) -> Result<GameRecord> {
        let engine = TurnEngine::new(self.board.clone(), GameRng::new(seed));
        let mut game = Match::new(engine);

        for _ in 0..self.config.max_turns {
            let result = game.advance()?;
            if result.won {
                let record = GameRecord {
                    seed: Some(seed),
                    ..game.record()
                };
                debug!("seed {seed}: {} won in {} turns", result.player, record.len());
                return Ok(record);
            }
        }

        Err(GameError::TurnLimit(self.config.max_turns))
    }

    /// Play `games` seeded games and summarise them.
    pub fn simulate(&self) -> Result<SimulationSummary> {
        let mut summary = SimulationSummary {
            games: 0,
            wins: PlayerMap::with_value(0),
            shortest: u32::MAX,
            longest: 0,
            mean_turns: 0.0,
            ladders: 0,
            snakes: 0,
            bounces: 0,
        };
        let mut total_turns: u64 = 0;

        for i in 0..self.config.games {
            let record = self.play_game(self.config.seed_offset.wrapping_add(u64::from(i)))?;
            let turns = record.len() as u32;

            summary.games += 1;
            if let Some(winner) = record.winner {
                summary.wins[winner] += 1;
            }
            summary.shortest = summary.shortest.min(turns);
            summary.longest = summary.longest.max(turns);
            total_turns += u64::from(turns);

            for (_, tally) in record.tally().iter() {
                summary.ladders += tally.ladders;
                summary.snakes += tally.snakes;
                summary.bounces += tally.bounces;
            }
        }

        if summary.games == 0 {
            summary.shortest = 0;
        } else {
            summary.mean_turns = total_turns as f64 / f64::from(summary.games);
        }

        info!(
            "simulated {} games: human {} / computer {}, mean {:.1} turns",
            summary.games,
            summary.wins[Player::Human],
            summary.wins[Player::Computer],
            summary.mean_turns
        );
        Ok(summary)
    }
}

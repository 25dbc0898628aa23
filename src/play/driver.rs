//! Human-vs-computer match driver.
//!
//! Holds one game and sequences it the way a front end expects: the human
//! rolls when they press the button, then the front end (after its own
//! animation delay) asks the computer to take its turn. Asking the wrong
//! side to move is rejected instead of silently resolved.

use log::debug;

use crate::core::{
    DiceSource, GameConfig, GameError, GameRng, GameState, MoveResult, Player, Result, Status,
};
use crate::rules::TurnEngine;

use super::record::GameRecord;

/// One game in progress, with its engine.
#[derive(Clone, Debug)]
pub struct Match<D = GameRng> {
    engine: TurnEngine<D>,
    state: GameState,
    seed: Option<u64>,
}

impl Match<GameRng> {
    /// Default board, seeded die.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            engine: TurnEngine::with_seed(seed),
            state: GameState::new(),
            seed: Some(seed),
        }
    }

    /// Board and die from `config`. The seed is recorded even when it was
    /// drawn from the operating system.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let engine = TurnEngine::from_config(config)?;
        let seed = Some(engine.dice().seed());
        Ok(Self {
            engine,
            state: GameState::new(),
            seed,
        })
    }
}

impl<D: DiceSource> Match<D> {
    /// Start a game on an existing engine. No seed is recorded.
    pub fn new(engine: TurnEngine<D>) -> Self {
        let state = engine.new_game();
        Self {
            engine,
            state,
            seed: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine<D> {
        &self.engine
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The human's roll. Fails unless it is the human's turn.
    pub fn human_roll(&mut self) -> Result<MoveResult> {
        self.take_turn(Player::Human)
    }

    /// The computer's roll. Fails unless it is the computer's turn.
    pub fn computer_turn(&mut self) -> Result<MoveResult> {
        self.take_turn(Player::Computer)
    }

    /// Roll for whichever player is due.
    pub fn advance(&mut self) -> Result<MoveResult> {
        match self.state.status() {
            Status::InProgress { turn } => self.take_turn(turn),
            Status::Won { winner } => Err(GameError::game_over(winner)),
        }
    }

    fn take_turn(&mut self, player: Player) -> Result<MoveResult> {
        match self.state.status() {
            Status::Won { winner } => return Err(GameError::game_over(winner)),
            Status::InProgress { turn } if turn != player => {
                debug!("{player} tried to roll out of turn");
                return Err(GameError::not_your_turn(player, turn));
            }
            Status::InProgress { .. } => {}
        }

        let (next, result) = self.engine.play_turn(&self.state)?;
        self.state = next;
        Ok(result)
    }

    /// Start over on the same board. The die keeps its current position,
    /// so the new game gets fresh rolls and its record carries no seed.
    pub fn restart(&mut self) {
        self.state = self.engine.new_game();
        self.seed = None;
    }

    /// History of the game so far.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord::from_state(&self.state, self.seed)
    }
}

//! Turn engine.
//!
//! Resolves one roll at a time:
//! 1. Walk `dice` squares forward
//! 2. Bounce back off square 100 by the excess
//! 3. Apply at most one snake or ladder
//! 4. Win on exactly 100, otherwise pass the turn
//!
//! The engine holds the board and the dice. Game state is passed in and a
//! new state handed back, so the same engine can drive any number of
//! independent games and tests never need a display.

use log::{debug, info, warn};

use crate::board::{Board, Transition};
use crate::core::{
    bounce, validate_die, Cell, DiceSource, GameConfig, GameError, GameRng, GameState,
    MoveEvent, MoveResult, Result, Status,
};

/// Snakes & Ladders rules over a fixed board and an injected die.
#[derive(Clone, Debug)]
pub struct TurnEngine<D = GameRng> {
    board: Board,
    dice: D,
}

impl TurnEngine<GameRng> {
    /// Default board with a seeded die.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Board::default(), GameRng::new(seed))
    }

    /// Build the board and die described by `config`.
    ///
    /// Without a seed the die is seeded from the operating system.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let board = Board::from_config(config)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self::new(board, rng))
    }
}

impl<D: DiceSource> TurnEngine<D> {
    pub fn new(board: Board, dice: D) -> Self {
        Self { board, dice }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// A fresh game: both tokens on square 1, human to move.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new()
    }

    /// Roll the die once.
    pub fn roll_dice(&mut self) -> u8 {
        self.dice.next_die()
    }

    /// Resolve a roll of `dice` for the player whose turn it is.
    ///
    /// Returns the new state and the full breakdown of the move. `state`
    /// itself is left unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game has already been won
    /// - `InvalidInput` if `dice` is not in `1..=6`
    pub fn resolve_turn(&self, state: &GameState, dice: u8) -> Result<(GameState, MoveResult)> {
        let player = match state.status() {
            Status::InProgress { turn } => turn,
            Status::Won { winner } => {
                warn!("resolve_turn called after {winner} won");
                return Err(GameError::game_over(winner));
            }
        };
        let dice = validate_die(dice).inspect_err(|e| warn!("rejected roll: {e}"))?;

        let start = state.position(player);
        let straight = start.get() + dice;
        let bounced = Cell::new(bounce(straight))?;

        let transition = self.board.transition_at(bounced);
        let final_cell = transition.map_or(bounced, |t| t.to);
        let event = transition.map_or(MoveEvent::None, Transition::event);

        let result = MoveResult {
            player,
            start,
            dice,
            straight,
            bounced,
            final_cell,
            event,
            won: final_cell.is_finish(),
        };

        debug!(
            "{player} rolled {dice}: {start} -> {straight} -> {bounced} -> {final_cell} ({event:?})"
        );
        if result.won {
            info!("{player} wins after {} turns", state.turn_number() + 1);
        }

        let mut next = state.clone();
        next.apply(&result);
        Ok((next, result))
    }

    /// Roll and resolve in one step for the player whose turn it is.
    ///
    /// A finished game is rejected before the die is touched, so no
    /// randomness is consumed by an invalid call.
    pub fn play_turn(&mut self, state: &GameState) -> Result<(GameState, MoveResult)> {
        if let Some(winner) = state.winner() {
            warn!("play_turn called after {winner} won");
            return Err(GameError::game_over(winner));
        }
        let dice = self.roll_dice();
        self.resolve_turn(state, dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Player, ScriptedDice};

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    fn engine() -> TurnEngine {
        TurnEngine::with_seed(42)
    }

    #[test]
    fn test_plain_move() {
        let engine = engine();
        let state = engine.new_game();

        let (next, result) = engine.resolve_turn(&state, 3).unwrap();
        assert_eq!(result.player, Player::Human);
        assert_eq!(result.straight, 4);
        assert_eq!(result.bounced, cell(4));
        assert_eq!(result.final_cell, cell(4));
        assert_eq!(result.event, MoveEvent::None);
        assert!(!result.won);

        assert_eq!(next.position(Player::Human), cell(4));
        assert_eq!(next.position(Player::Computer), Cell::START);
        assert_eq!(next.turn(), Some(Player::Computer));
    }

    #[test]
    fn test_input_state_untouched() {
        let engine = engine();
        let state = engine.new_game();
        let before = state.clone();

        let _ = engine.resolve_turn(&state, 5).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_ladder_climb() {
        let engine = engine();
        let (next, result) = engine.resolve_turn(&engine.new_game(), 5).unwrap();

        assert_eq!(result.straight, 6);
        assert_eq!(result.final_cell, cell(25));
        assert_eq!(
            result.event,
            MoveEvent::LadderClimb {
                from: cell(6),
                to: cell(25)
            }
        );
        // Square 25 is also a snake head; jumps never chain.
        assert_eq!(next.position(Player::Human), cell(25));
    }

    #[test]
    fn test_bounce_into_snake() {
        let engine = engine();
        let state = engine.new_game().with_position(Player::Human, cell(95));

        let (next, result) = engine.resolve_turn(&state, 6).unwrap();
        assert_eq!(result.straight, 101);
        assert_eq!(result.bounced, cell(99));
        assert_eq!(result.final_cell, cell(54));
        assert!(matches!(result.event, MoveEvent::SnakeBite { .. }));
        assert!(!next.is_terminal());
    }

    #[test]
    fn test_exact_finish_wins() {
        let engine = engine();
        let state = engine.new_game().with_position(Player::Human, cell(98));

        let (next, result) = engine.resolve_turn(&state, 2).unwrap();
        assert!(result.won);
        assert_eq!(next.winner(), Some(Player::Human));
        assert_eq!(next.position(Player::Human), Cell::FINISH);
    }

    #[test]
    fn test_ladder_to_finish_wins() {
        let board = Board::new(&BoardConfig::empty().with_ladder(80, 100).unwrap()).unwrap();
        let engine = TurnEngine::new(board, GameRng::new(0));
        let state = engine.new_game().with_position(Player::Human, cell(77));

        let (next, result) = engine.resolve_turn(&state, 3).unwrap();
        assert_eq!(result.bounced, cell(80));
        assert!(result.won);
        assert_eq!(next.winner(), Some(Player::Human));
    }

    #[test]
    fn test_rejects_bad_dice() {
        let engine = engine();
        let state = engine.new_game();

        for dice in [0, 7, 12, 255] {
            assert!(matches!(
                engine.resolve_turn(&state, dice),
                Err(GameError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_rejects_after_win() {
        let engine = engine();
        let state = engine.new_game().with_position(Player::Human, cell(99));
        let (won, _) = engine.resolve_turn(&state, 1).unwrap();

        for dice in 0..=7 {
            assert!(matches!(
                engine.resolve_turn(&won, dice),
                Err(GameError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn test_play_turn_does_not_roll_after_win() {
        let mut engine = TurnEngine::new(Board::default(), ScriptedDice::new([1, 2]).unwrap());
        let state = engine.new_game().with_position(Player::Human, cell(99));

        let (won, result) = engine.play_turn(&state).unwrap();
        assert!(result.won);
        assert_eq!(engine.dice().rolled(), 1);

        assert!(engine.play_turn(&won).is_err());
        assert_eq!(engine.dice().rolled(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::default().with_seed(5);
        let mut a = TurnEngine::from_config(&config).unwrap();
        let mut b = TurnEngine::with_seed(5);
        for _ in 0..10 {
            assert_eq!(a.roll_dice(), b.roll_dice());
        }

        let bad = GameConfig::default().with_board(BoardConfig::empty().with_snake(10, 20).unwrap());
        assert!(matches!(TurnEngine::from_config(&bad), Err(GameError::InvalidBoard(_))));
    }
}

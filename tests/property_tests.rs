//! Property tests for movement, lookup, geometry and board validation.

use proptest::prelude::*;

use snakes_ladders::board::{cell_at, grid_of, Board};
use snakes_ladders::core::{BoardConfig, Cell, GameError, GameRng, Player};
use snakes_ladders::rules::{bounce, MoveEvent, TurnEngine};

fn empty_engine() -> TurnEngine {
    TurnEngine::new(Board::new(&BoardConfig::empty()).unwrap(), GameRng::new(0))
}

proptest! {
    /// From any square at or below 94, the bounce rule holds.
    #[test]
    fn prop_bounce_rule(start in 1u8..=94, dice in 1u8..=6) {
        let engine = TurnEngine::with_seed(0);
        let state = engine.new_game().with_position(Player::Human, Cell::new(start).unwrap());
        let (_, result) = engine.resolve_turn(&state, dice).unwrap();

        prop_assert_eq!(result.straight, start + dice);
        if result.straight <= 100 {
            prop_assert_eq!(result.bounced.get(), result.straight);
        } else {
            prop_assert_eq!(result.bounced.get(), 100 - (result.straight - 100));
            prop_assert!((1..=99).contains(&result.bounced.get()));
        }
    }

    /// Every square and face resolves to a legal square, and the result
    /// is consistent with the board.
    #[test]
    fn prop_resolution_consistent(start in 1u8..=99, dice in 1u8..=6) {
        let engine = TurnEngine::with_seed(0);
        let state = engine.new_game().with_position(Player::Human, Cell::new(start).unwrap());
        let (next, result) = engine.resolve_turn(&state, dice).unwrap();

        prop_assert_eq!(result.bounced.get(), bounce(start + dice));
        match engine.board().special_transition(result.bounced) {
            Some(to) => {
                prop_assert_eq!(result.final_cell, to);
                prop_assert!(result.event != MoveEvent::None);
            }
            None => {
                prop_assert_eq!(result.final_cell, result.bounced);
                prop_assert_eq!(result.event, MoveEvent::None);
            }
        }
        prop_assert_eq!(next.position(Player::Human), result.final_cell);
        prop_assert_eq!(result.won, result.final_cell == Cell::FINISH);
        prop_assert_eq!(next.is_terminal(), result.won);
    }

    /// The walk always covers exactly `dice` squares and ends on `bounced`.
    #[test]
    fn prop_steps_end_on_bounced(start in 1u8..=99, dice in 1u8..=6) {
        let engine = empty_engine();
        let state = engine.new_game().with_position(Player::Human, Cell::new(start).unwrap());
        let (_, result) = engine.resolve_turn(&state, dice).unwrap();

        let steps = result.steps();
        prop_assert_eq!(steps.len(), dice as usize);
        prop_assert_eq!(*steps.last().unwrap(), result.bounced);
    }

    /// A non-winning move always hands the turn to the other player.
    #[test]
    fn prop_turn_alternates(start in 1u8..=93, dice in 1u8..=6, computer_first: bool) {
        let engine = empty_engine();
        let mover = if computer_first { Player::Computer } else { Player::Human };
        let state = engine
            .new_game()
            .with_position(mover, Cell::new(start).unwrap())
            .with_turn(mover);

        let (next, result) = engine.resolve_turn(&state, dice).unwrap();
        prop_assert_eq!(result.player, mover);
        prop_assert_eq!(next.turn(), Some(mover.other()));
    }

    /// Out-of-range faces are always rejected.
    #[test]
    fn prop_bad_dice_rejected(dice in prop_oneof![Just(0u8), 7u8..=255]) {
        let engine = TurnEngine::with_seed(0);
        let result = engine.resolve_turn(&engine.new_game(), dice);
        prop_assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    /// Grid lookup round-trips for every square.
    #[test]
    fn prop_grid_round_trip(n in 1u8..=100) {
        let cell = Cell::new(n).unwrap();
        let (col, row) = grid_of(cell);
        prop_assert!(col < 10 && row < 10);
        prop_assert_eq!(cell_at(col, row).unwrap(), cell);
    }

    /// Any board that puts a snake and a ladder on the same head fails.
    #[test]
    fn prop_shared_head_rejected(head in 3u8..=98, up in 1u8..=2, down in 1u8..=2) {
        let config = BoardConfig::empty()
            .with_ladder(head, head + up)
            .unwrap()
            .with_snake(head, head - down)
            .unwrap();
        prop_assert!(matches!(Board::new(&config), Err(GameError::InvalidBoard(_))));
    }
}

/// 101..=106 bounce to 99..=94 respectively.
#[test]
fn test_bounce_region() {
    let bounced: Vec<u8> = (101..=106).map(bounce).collect();
    assert_eq!(bounced, vec![99, 98, 97, 96, 95, 94]);
}

/// `special_transition` gives the same answer every time.
#[test]
fn test_special_transition_is_pure() {
    let board = Board::default();
    let first: Vec<_> = Cell::all().map(|c| board.special_transition(c)).collect();
    let second: Vec<_> = Cell::all().map(|c| board.special_transition(c)).collect();
    assert_eq!(first, second);
}

//! Per-roll move results.
//!
//! A `MoveResult` carries every intermediate position of one roll so the
//! presentation layer can animate it in two legs (walk, then jump) and
//! decide how to announce snakes, ladders and wins.
//!
//! Results decoded from JSON or bincode are checked for internal
//! consistency, so a stored record can never hold an impossible move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::error::{GameError, Result};
use super::player::Player;
use super::rng::{validate_die, DIE_MAX};

/// Reflect a straight-line target off square 100.
///
/// `straight` is `position + dice`, at most 106 in play. Values up to 100
/// pass through; 101 becomes 99 and 106 becomes 94.
///
/// ```
/// use snakes_ladders::rules::bounce;
///
/// assert_eq!(bounce(57), 57);
/// assert_eq!(bounce(100), 100);
/// assert_eq!(bounce(101), 99);
/// assert_eq!(bounce(106), 94);
/// ```
///
/// # Panics
///
/// If `straight` is above 200, which reflects to no square at all.
#[must_use]
pub const fn bounce(straight: u8) -> u8 {
    let finish = Cell::FINISH.get();
    assert!(straight <= 2 * finish, "straight-line target above 200");
    if straight > finish {
        finish - (straight - finish)
    } else {
        straight
    }
}

/// What happened after the token stopped walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEvent {
    /// Landed on a plain square.
    None,
    /// Landed on the foot of a ladder and climbed it.
    LadderClimb { from: Cell, to: Cell },
    /// Landed on a snake's head and slid down.
    SnakeBite { from: Cell, to: Cell },
}

impl MoveEvent {
    /// The jump `(from, to)`, if there was one.
    #[must_use]
    pub fn jump(&self) -> Option<(Cell, Cell)> {
        match *self {
            MoveEvent::None => None,
            MoveEvent::LadderClimb { from, to } | MoveEvent::SnakeBite { from, to } => {
                Some((from, to))
            }
        }
    }
}

/// How a token travels along one animation leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegKind {
    /// Walking the rolled number of squares (including any bounce).
    Walk,
    /// Following a snake or ladder.
    Jump,
}

/// One animation segment of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub kind: LegKind,
    pub from: Cell,
    pub to: Cell,
}

/// Fully resolved outcome of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedMove")]
pub struct MoveResult {
    /// Who moved.
    pub player: Player,

    /// Square before the roll.
    pub start: Cell,

    /// Die face, 1 to 6.
    pub dice: u8,

    /// `start + dice` before any bounce. Can exceed 100 (up to 106).
    pub straight: u8,

    /// Square after bouncing back off 100, before snakes and ladders.
    pub bounced: Cell,

    /// Square after snakes and ladders. The mover's new position.
    pub final_cell: Cell,

    pub event: MoveEvent,

    /// The mover reached square 100 and won.
    pub won: bool,
}

impl MoveResult {
    /// Whether the roll overshot 100 and bounced back.
    #[must_use]
    pub fn did_bounce(&self) -> bool {
        self.straight > Cell::FINISH.get()
    }

    /// Animation legs: the walk, then the jump if any.
    ///
    /// The walk leg can start and end on the same square when a bounce
    /// cancels out (99 + 2 walks to 100 and back to 99). It is kept so the
    /// roll still gets shown.
    pub fn legs(&self) -> SmallVec<[Leg; 2]> {
        let mut legs = SmallVec::new();
        legs.push(Leg {
            kind: LegKind::Walk,
            from: self.start,
            to: self.bounced,
        });
        if let Some((from, to)) = self.event.jump() {
            legs.push(Leg {
                kind: LegKind::Jump,
                from,
                to,
            });
        }
        legs
    }

    /// Every square the token steps on while walking, in order, ending on
    /// `bounced`. Overshooting walks up to 100 then back down.
    ///
    /// ```
    /// use snakes_ladders::core::{Cell, Player};
    /// use snakes_ladders::rules::TurnEngine;
    ///
    /// let engine = TurnEngine::with_seed(1);
    /// let state = engine.new_game().with_position(Player::Human, Cell::new(97).unwrap());
    ///
    /// let (_, result) = engine.resolve_turn(&state, 5).unwrap();
    /// let steps: Vec<u8> = result.steps().iter().map(|c| c.get()).collect();
    /// assert_eq!(steps, vec![98, 99, 100, 99, 98]);
    /// ```
    pub fn steps(&self) -> SmallVec<[Cell; 6]> {
        // Fields are public; never walk more than one die face.
        (1..=self.dice.min(DIE_MAX))
            .map(|i| Cell(bounce(self.start.get() + i)))
            .collect()
    }
}

/// Wire form of `MoveResult`, checked before it becomes one.
#[derive(Deserialize)]
struct UncheckedMove {
    player: Player,
    start: Cell,
    dice: u8,
    straight: u8,
    bounced: Cell,
    final_cell: Cell,
    event: MoveEvent,
    won: bool,
}

impl TryFrom<UncheckedMove> for MoveResult {
    type Error = GameError;

    fn try_from(raw: UncheckedMove) -> Result<Self> {
        let inconsistent = |what: &str| {
            Err(GameError::InvalidInput(format!(
                "move from {} with die {}: {what}",
                raw.start, raw.dice
            )))
        };

        let dice = validate_die(raw.dice)?;
        if raw.straight != raw.start.get() + dice {
            return inconsistent("straight-line target does not match");
        }
        if raw.bounced.get() != bounce(raw.straight) {
            return inconsistent("bounced square does not match");
        }
        match raw.event {
            MoveEvent::None if raw.final_cell != raw.bounced => {
                return inconsistent("moved without a snake or ladder");
            }
            MoveEvent::LadderClimb { from, to } if from >= to => {
                return inconsistent("ladder does not climb");
            }
            MoveEvent::SnakeBite { from, to } if from <= to => {
                return inconsistent("snake does not descend");
            }
            event => {
                if let Some((from, to)) = event.jump() {
                    if from != raw.bounced || to != raw.final_cell {
                        return inconsistent("jump does not start on the landing square");
                    }
                }
            }
        }
        if raw.won != raw.final_cell.is_finish() {
            return inconsistent("win flag does not match the final square");
        }

        Ok(Self {
            player: raw.player,
            start: raw.start,
            dice,
            straight: raw.straight,
            bounced: raw.bounced,
            final_cell: raw.final_cell,
            event: raw.event,
            won: raw.won,
        })
    }
}

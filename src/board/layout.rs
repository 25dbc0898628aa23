//! Validated snake/ladder layout.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::geometry::Geometry;
use crate::core::{
    BoardConfig, Cell, GameConfig, GameError, MoveEvent, Result, TransitionKind, TransitionSpec,
};

/// A resolved snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub from: Cell,
    pub to: Cell,
}

impl Transition {
    /// The event reported when a token takes this transition.
    #[must_use]
    pub fn event(self) -> MoveEvent {
        let (from, to) = (self.from, self.to);
        match self.kind {
            TransitionKind::Ladder => MoveEvent::LadderClimb { from, to },
            TransitionKind::Snake => MoveEvent::SnakeBite { from, to },
        }
    }
}

/// Immutable board: the snake/ladder table plus pixel geometry.
///
/// Lookups are pure. Building a board validates its table:
/// - ladders go up, snakes go down
/// - no square is the head of more than one transition
/// - nothing starts on square 100
///
/// A tail may land on another transition's head. Only one jump is ever
/// applied per move, so this cannot loop.
#[derive(Clone, Debug)]
pub struct Board {
    transitions: FxHashMap<Cell, Transition>,
    geometry: Geometry,
}

impl Default for Board {
    fn default() -> Self {
        // The built-in table passes `validate`.
        Self::from_specs(&BoardConfig::default().transitions, Geometry::default())
    }
}

impl Board {
    /// Build a board from a table with the default geometry.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Self::with_geometry(config, Geometry::default())
    }

    /// Build a board from the full game configuration.
    ///
    /// Fails on an invalid table or an out-of-range `cell_pixels`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::with_geometry(&config.board, Geometry::new(config.cell_pixels)?)
    }

    /// Build a board from a table and explicit geometry.
    pub fn with_geometry(config: &BoardConfig, geometry: Geometry) -> Result<Self> {
        validate(config)?;
        Ok(Self::from_specs(&config.transitions, geometry))
    }

    fn from_specs(specs: &[TransitionSpec], geometry: Geometry) -> Self {
        let transitions = specs
            .iter()
            .map(|spec| {
                let transition = Transition {
                    kind: spec.kind,
                    from: spec.head,
                    to: spec.tail,
                };
                (spec.head, transition)
            })
            .collect();

        Self {
            transitions,
            geometry,
        }
    }

    /// Destination of the snake or ladder whose head is `cell`, if any.
    #[must_use]
    pub fn special_transition(&self, cell: Cell) -> Option<Cell> {
        self.transitions.get(&cell).map(|t| t.to)
    }

    /// The snake or ladder whose head is `cell`, if any.
    #[must_use]
    pub fn transition_at(&self, cell: Cell) -> Option<Transition> {
        self.transitions.get(&cell).copied()
    }

    /// Pixel centre of a square. See [`Geometry::coordinates_of`].
    #[must_use]
    pub fn coordinates_of(&self, cell: Cell) -> (u32, u32) {
        self.geometry.coordinates_of(cell)
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// All ladders, sorted by head.
    pub fn ladders(&self) -> Vec<Transition> {
        self.sorted(TransitionKind::Ladder)
    }

    /// All snakes, sorted by head.
    pub fn snakes(&self) -> Vec<Transition> {
        self.sorted(TransitionKind::Snake)
    }

    fn sorted(&self, kind: TransitionKind) -> Vec<Transition> {
        let mut out: Vec<_> = self
            .transitions
            .values()
            .filter(|t| t.kind == kind)
            .copied()
            .collect();
        out.sort_by_key(|t| t.from);
        out
    }

    /// The table this board was built from, in head order.
    #[must_use]
    pub fn to_config(&self) -> BoardConfig {
        let mut transitions: Vec<_> = self
            .transitions
            .values()
            .map(|t| TransitionSpec {
                kind: t.kind,
                head: t.from,
                tail: t.to,
            })
            .collect();
        transitions.sort_by_key(|t| t.head);
        BoardConfig { transitions }
    }
}

/// Check a snake/ladder table against the board invariants.
pub fn validate(config: &BoardConfig) -> Result<()> {
    let mut heads: FxHashMap<Cell, TransitionKind> = FxHashMap::default();

    for spec in &config.transitions {
        match spec.kind {
            TransitionKind::Ladder if spec.tail <= spec.head => {
                return Err(GameError::InvalidBoard(format!(
                    "ladder {}→{} does not climb",
                    spec.head, spec.tail
                )));
            }
            TransitionKind::Snake if spec.tail >= spec.head => {
                return Err(GameError::InvalidBoard(format!(
                    "snake {}→{} does not descend",
                    spec.head, spec.tail
                )));
            }
            _ => {}
        }

        if spec.head.is_finish() {
            return Err(GameError::InvalidBoard(format!(
                "{} starts on the finishing square",
                spec.kind
            )));
        }

        if let Some(existing) = heads.insert(spec.head, spec.kind) {
            return Err(GameError::InvalidBoard(format!(
                "square {} is the head of both a {} and a {}",
                spec.head, existing, spec.kind
            )));
        }
    }

    Ok(())
}

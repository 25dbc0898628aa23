//! Match sequencing, records, and unattended play.
//!
//! ## Components
//!
//! - `Match`: one human-vs-computer game with turn enforcement
//! - `GameRecord`: replayable, serialisable history of a game
//! - `AutoPlayer`: plays whole games with no front end
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::play::Match;
//!
//! let mut game = Match::with_seed(42);
//! while !game.is_over() {
//!     game.human_roll().unwrap();
//!     if !game.is_over() {
//!         game.computer_turn().unwrap();
//!     }
//! }
//! assert!(game.record().winner.is_some());
//! ```

mod autoplay;
mod driver;
mod record;

pub use autoplay::{AutoPlayConfig, AutoPlayer, SimulationSummary};
pub use driver::Match;
pub use record::{GameRecord, PlayerTally, RecordError};

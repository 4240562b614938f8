//! Game core
//!
//! Everything the player's commands touch lives here. No terminal or
//! filesystem dependencies: I/O goes through `PersistenceStore` and
//! randomness through `RandomSource`, so every path is testable with a
//! fixed target.

pub mod command;
pub mod manager;
pub mod random;
pub mod session;
pub mod state;

pub use command::{Command, CommandProcessor, HELP_TEXT};
pub use manager::GameManager;
pub use random::{FixedRandom, RandomSource, SeededRandom};
pub use session::{GameSession, GuessOutcome};
pub use state::GameState;

//! Number Guess - A text-command number guessing game
//!
//! Core modules:
//! - `game`: Session, command processing and the game state machine
//! - `persistence`: Save/load through a narrow blob store
//! - `settings`: User-tunable bounds, save location and seed
//! - `terminal`: Line-oriented host adapter (stdin/stdout or any reader/writer)
//! - `error`: Error taxonomy shared by all of the above

pub mod error;
pub mod game;
pub mod persistence;
pub mod settings;
pub mod terminal;

pub use error::{ErrorKind, GameError};
pub use game::{
    Command, CommandProcessor, FixedRandom, GameManager, GameSession, GameState, GuessOutcome,
    RandomSource, SeededRandom,
};
pub use persistence::{FileStore, MemoryStore, PersistenceStore, SaveRecord, StoreError};
pub use settings::Settings;
pub use terminal::{CommandHandler, KeyEvent, TerminalAdapter};

/// Game configuration constants
pub mod consts {
    /// Default lower bound of the secret number (inclusive)
    pub const DEFAULT_MIN: i32 = 1;
    /// Default upper bound of the secret number (inclusive)
    pub const DEFAULT_MAX: i32 = 10;

    /// Default save file, relative to the working directory
    pub const DEFAULT_SAVE_PATH: &str = "number_guess_save.json";
    /// Default settings file, relative to the working directory
    pub const DEFAULT_SETTINGS_PATH: &str = "number_guess_settings.json";
    /// Environment variable overriding the settings file location
    pub const SETTINGS_PATH_ENV: &str = "NUMBER_GUESS_SETTINGS";

    /// Current save envelope version
    pub const SAVE_VERSION: u32 = 1;
}

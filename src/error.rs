//! Error types for the guessing game.
//!
//! Every error is recovered before it reaches the player: `GameManager`
//! turns it into `user_message()` while `Display` keeps the detail for logs.

use thiserror::Error;

use crate::persistence::StoreError;

/// Broad error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or ill-timed player input
    UserInput,
    /// Save/load could not complete
    Persistence,
    /// Loaded data failed the sanity check
    Validation,
    /// Anything not anticipated
    Unexpected,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("no game in progress")]
    NotPlaying,

    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("no active session to save")]
    NothingToSave,

    #[error("no save found")]
    NoSaveFound,

    #[error("failed to write save: {0}")]
    Write(#[source] StoreError),

    #[error("failed to read save: {0}")]
    Read(#[source] StoreError),

    #[error("session cannot be saved: {0}")]
    Unsaveable(String),

    #[error("failed to encode save: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("corrupted save: {0}")]
    CorruptedSave(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyCommand
            | GameError::UnknownCommand(_)
            | GameError::MissingArgument(_)
            | GameError::InvalidNumber(_)
            | GameError::NotPlaying
            | GameError::InvalidRange { .. } => ErrorKind::UserInput,
            GameError::NothingToSave
            | GameError::NoSaveFound
            | GameError::Unsaveable(_)
            | GameError::Write(_)
            | GameError::Read(_)
            | GameError::Encode(_) => ErrorKind::Persistence,
            GameError::CorruptedSave(_) => ErrorKind::Validation,
            GameError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Player-facing text. Never exposes the underlying cause.
    pub fn user_message(&self) -> String {
        match self {
            GameError::EmptyCommand => {
                "Please enter a command. Type 'help' for a list of commands.".to_string()
            }
            GameError::UnknownCommand(cmd) => {
                format!("Unknown command '{}'. Type 'help' for a list of commands.", cmd)
            }
            GameError::MissingArgument(cmd) => format!("Usage: {} <number>", cmd),
            GameError::InvalidNumber(_) => "Please enter a valid number.".to_string(),
            GameError::NotPlaying => "You need to start a game first. Type 'start'.".to_string(),
            GameError::InvalidRange { .. } => {
                "The configured number range is invalid.".to_string()
            }
            GameError::NothingToSave => "No game to save.".to_string(),
            GameError::NoSaveFound => "No saved game found.".to_string(),
            GameError::Unsaveable(_) | GameError::Write(_) | GameError::Encode(_) => {
                "Failed to save game.".to_string()
            }
            GameError::Read(_) => "Failed to load game.".to_string(),
            GameError::CorruptedSave(_) => "Saved game is corrupted.".to_string(),
            GameError::Unexpected(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

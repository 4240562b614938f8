//! A single guessing round

use std::fmt;

use super::random::RandomSource;
use crate::error::GameError;

/// Result of comparing a guess with the secret target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    Correct,
    TooHigh,
}

impl GuessOutcome {
    /// -1 for too low, 0 for correct, +1 for too high
    pub fn as_ordering_value(&self) -> i8 {
        match self {
            GuessOutcome::TooLow => -1,
            GuessOutcome::Correct => 0,
            GuessOutcome::TooHigh => 1,
        }
    }
}

/// Bounds and secret target. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    min: i32,
    max: i32,
    target: i32,
}

impl GameSession {
    /// Start a round with a target drawn uniformly from `min..=max`
    pub fn create<R>(min: i32, max: i32, rng: &mut R) -> Result<Self, GameError>
    where
        R: RandomSource + ?Sized,
    {
        if min >= max {
            return Err(GameError::InvalidRange { min, max });
        }
        let target = rng.uniform_int(min, max);
        Ok(Self { min, max, target })
    }

    /// Rebuild a session from already validated saved values
    pub(crate) fn from_parts(min: i32, max: i32, target: i32) -> Self {
        Self { min, max, target }
    }

    pub fn check_guess(&self, guess: i32) -> GuessOutcome {
        if guess == self.target {
            GuessOutcome::Correct
        } else if guess < self.target {
            GuessOutcome::TooLow
        } else {
            GuessOutcome::TooHigh
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

impl fmt::Display for GameSession {
    // Target omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

//! Top-level game state

use std::fmt;

/// Which phase the game manager is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round started yet
    #[default]
    MainMenu,
    /// A round is in progress
    Playing,
    /// Round ended (correct guess or quit)
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::MainMenu => "Main Menu",
            GameState::Playing => "Playing",
            GameState::GameOver => "Game Over",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Game state machine
//!
//! Owns the state, the active session and the collaborators (store, RNG).
//! All operations are synchronous and return the text shown to the player.

use super::command::CommandProcessor;
use super::random::{RandomSource, SeededRandom};
use super::session::{GameSession, GuessOutcome};
use super::state::GameState;
use crate::consts::{DEFAULT_MAX, DEFAULT_MIN};
use crate::error::{ErrorKind, GameError};
use crate::persistence::{self, FileStore, PersistenceStore, StoreError};
use crate::settings::Settings;

pub struct GameManager<S = FileStore, R = SeededRandom> {
    state: GameState,
    session: Option<GameSession>,
    min: i32,
    max: i32,
    store: S,
    rng: R,
}

impl GameManager<FileStore, SeededRandom> {
    /// Build the manager the binary runs with
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        log::info!("Random source seeded with {}", rng.seed());

        Self::new(FileStore::new(&settings.save_path), rng).with_bounds(settings.min, settings.max)
    }
}

impl<S, R> GameManager<S, R>
where
    S: PersistenceStore,
    R: RandomSource,
{
    /// New manager in `MainMenu` with the default 1..=10 range
    pub fn new(store: S, rng: R) -> Self {
        Self {
            state: GameState::MainMenu,
            session: None,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            store,
            rng,
        }
    }

    /// Override the range used for new games
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Range used for new games
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse and run one line of input. Errors become player-facing text.
    pub fn process_command(&mut self, line: &str) -> String {
        match CommandProcessor::process(self, line) {
            Ok(response) => response,
            Err(e) => {
                match e.kind() {
                    ErrorKind::UserInput => log::debug!("Rejected input {:?}: {}", line, e),
                    _ => log::warn!("Command {:?} failed: {}", line, e),
                }
                e.user_message()
            }
        }
    }

    /// Replace any session with a fresh one and enter `Playing`
    pub fn start_new_game(&mut self) -> Result<&GameSession, GameError> {
        let session = GameSession::create(self.min, self.max, &mut self.rng)?;
        log::info!("New game started ({})", session);
        self.state = GameState::Playing;
        Ok(&*self.session.insert(session))
    }

    /// Enter `GameOver`. The session is kept so it can still be saved.
    pub fn end_game(&mut self) {
        if self.state != GameState::GameOver {
            log::info!("Game over (was {})", self.state);
        }
        self.state = GameState::GameOver;
    }

    pub fn handle_guess(&mut self, guess: i32) -> Result<String, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::NotPlaying);
        }
        let session = self.session.as_ref().ok_or(GameError::NotPlaying)?;

        match session.check_guess(guess) {
            GuessOutcome::TooLow => Ok("Too low! Try again.".to_string()),
            GuessOutcome::TooHigh => Ok("Too high! Try again.".to_string()),
            GuessOutcome::Correct => {
                let target = session.target();
                self.end_game();
                Ok(format!("Correct! The number was {}. Game over.", target))
            }
        }
    }

    pub fn save_game(&mut self) -> Result<String, GameError> {
        let session = self.session.as_ref().ok_or(GameError::NothingToSave)?;
        let blob = persistence::encode(session)?;
        self.store.write_blob(&blob).map_err(GameError::Write)?;
        log::info!("Game saved ({})", session);
        Ok("Game saved.".to_string())
    }

    /// Replace the session with the saved one. Any failure leaves state untouched.
    pub fn load_game(&mut self) -> Result<String, GameError> {
        let blob = match self.store.read_blob() {
            Ok(blob) => blob,
            Err(StoreError::NotFound) => return Err(GameError::NoSaveFound),
            Err(e) => return Err(GameError::Read(e)),
        };
        let session = persistence::decode(&blob)?;

        log::info!("Game loaded ({})", session);
        let response = format!(
            "Game loaded! Guess a number between {} and {}.",
            session.min(),
            session.max()
        );
        self.session = Some(session);
        self.state = GameState::Playing;
        Ok(response)
    }
}

//! Text command parsing and dispatch

use super::manager::GameManager;
use super::random::RandomSource;
use super::state::GameState;
use crate::error::GameError;
use crate::persistence::PersistenceStore;

/// Static help text, identical in every state
pub const HELP_TEXT: &str = "\
Commands:
  start          Start a new game
  restart        Start over with a new number
  guess <number> Guess the secret number
  save           Save the current game
  load           Load the saved game
  quit           End the current game
  help           Show this list";

/// A recognized command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    /// Raw, not yet parsed argument
    Guess(Option<String>),
    Quit,
    Help,
    Save,
    Load,
}

impl Command {
    /// Trim, lower-case and split on single spaces, then match the first token
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let normalized = line.trim().to_lowercase();
        let mut tokens = normalized.split(' ');

        let name = tokens.next().unwrap_or_default();
        if name.is_empty() {
            return Err(GameError::EmptyCommand);
        }

        match name {
            "start" => Ok(Command::Start),
            "restart" => Ok(Command::Restart),
            "guess" => Ok(Command::Guess(tokens.next().map(str::to_string))),
            "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "save" => Ok(Command::Save),
            "load" => Ok(Command::Load),
            other => Err(GameError::UnknownCommand(other.to_string())),
        }
    }
}

/// Routes parsed commands to the game manager
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn process<S, R>(manager: &mut GameManager<S, R>, line: &str) -> Result<String, GameError>
    where
        S: PersistenceStore,
        R: RandomSource,
    {
        let command = Command::parse(line)?;
        log::debug!("Dispatching {:?} in state {}", command, manager.state());

        match command {
            Command::Start => {
                let session = manager.start_new_game()?;
                Ok(format!(
                    "New game started! Guess a number between {} and {}.",
                    session.min(),
                    session.max()
                ))
            }
            Command::Restart => {
                let session = manager.start_new_game()?;
                Ok(format!(
                    "Game restarted! Guess a number between {} and {}.",
                    session.min(),
                    session.max()
                ))
            }
            Command::Guess(arg) => {
                // State guard comes before argument parsing
                if manager.state() != GameState::Playing {
                    return Err(GameError::NotPlaying);
                }
                let arg = arg.ok_or(GameError::MissingArgument("guess"))?;
                let guess = arg
                    .parse::<i32>()
                    .map_err(|_| GameError::InvalidNumber(arg.clone()))?;
                manager.handle_guess(guess)
            }
            Command::Quit => {
                manager.end_game();
                Ok("Game over. Thanks for playing!".to_string())
            }
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Save => manager.save_game(),
            Command::Load => manager.load_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("start").unwrap(), Command::Start);
        assert_eq!(Command::parse("  RESTART  ").unwrap(), Command::Restart);
        assert_eq!(Command::parse("Quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("save").unwrap(), Command::Save);
        assert_eq!(Command::parse("load").unwrap(), Command::Load);
    }

    #[test]
    fn test_parse_guess_argument() {
        assert_eq!(
            Command::parse("guess 5").unwrap(),
            Command::Guess(Some("5".to_string()))
        );
        assert_eq!(Command::parse("GUESS").unwrap(), Command::Guess(None));
        // Only single spaces separate tokens
        assert_eq!(
            Command::parse("guess  5").unwrap(),
            Command::Guess(Some(String::new()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Command::parse(""), Err(GameError::EmptyCommand)));
        assert!(matches!(Command::parse("   \t "), Err(GameError::EmptyCommand)));
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse("Dance now") {
            Err(GameError::UnknownCommand(name)) => assert_eq!(name, "dance"),
            other => panic!("expected unknown command, got {:?}", other),
        }
    }
}

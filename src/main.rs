//! Number Guess entry point
//!
//! Loads settings, builds the game manager and runs it over stdin/stdout.
//! Logs go to stderr; set `RUST_LOG=debug` to trace every command.

use std::io;
use std::process::ExitCode;

use number_guess::{GameManager, Settings, TerminalAdapter};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Number Guess starting...");

    let settings = Settings::load(&Settings::default_path());
    log::info!(
        "Range {}..={}, saves at {}",
        settings.min,
        settings.max,
        settings.save_path.display()
    );

    let manager = GameManager::from_settings(&settings);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut adapter =
        TerminalAdapter::new(manager, stdin.lock(), stdout.lock()).with_prompt(settings.prompt);

    match adapter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Line-oriented host adapter
//!
//! Reads one line at a time from any `BufRead`, hands it to a
//! `CommandHandler` and writes the response. Hosts that also report key
//! presses can forward them through `on_key`; they are only logged.

use std::io::{self, BufRead, Write};
use std::panic;

use crate::error::GameError;
use crate::game::{GameManager, RandomSource};
use crate::persistence::PersistenceStore;

/// Anything that turns a line of input into a line of output
pub trait CommandHandler {
    fn handle(&mut self, line: &str) -> String;
}

impl<S, R> CommandHandler for GameManager<S, R>
where
    S: PersistenceStore,
    R: RandomSource,
{
    fn handle(&mut self, line: &str) -> String {
        self.process_command(line)
    }
}

/// A key press reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
}

pub struct TerminalAdapter<H, R, W> {
    handler: H,
    input: R,
    output: W,
    prompt: String,
}

impl<H, R, W> TerminalAdapter<H, R, W>
where
    H: CommandHandler,
    R: BufRead,
    W: Write,
{
    pub fn new(handler: H, input: R, output: W) -> Self {
        Self {
            handler,
            input,
            output,
            prompt: "> ".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_parts(self) -> (H, W) {
        (self.handler, self.output)
    }

    /// Key presses never touch game state
    pub fn on_key(&mut self, event: KeyEvent) {
        log::debug!("Key pressed: {:?}", event.key);
    }

    /// Run one line through the handler. A panic is reported, not propagated.
    pub fn dispatch(&mut self, line: &str) -> String {
        let handler = &mut self.handler;
        panic::catch_unwind(panic::AssertUnwindSafe(|| handler.handle(line))).unwrap_or_else(
            |e| {
                let msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                let err = GameError::Unexpected(msg);
                log::error!("{}", err);
                err.user_message()
            },
        )
    }

    /// Read-eval-print until end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Number Guess! Type 'help' for commands.")?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                log::info!("End of input, exiting");
                writeln!(self.output)?;
                break;
            }

            // Bad bytes are replaced and handled like any other unrecognized input
            let line = String::from_utf8_lossy(&buf);
            let response = self.dispatch(&line);
            writeln!(self.output, "{}", response)?;
        }

        self.output.flush()
    }
}

//! Interactive menu loop.
//!
//! `SessionController` reads one menu choice at a time, moves through
//! `SessionState`, and delegates every storage operation to the
//! `ArchiveStore`. Input and output are generic so that tests can drive a
//! whole session from a byte buffer.

use crate::constants::{
    APP_BANNER, FAREWELL_MESSAGE, INVALID_CHOICE_MESSAGE, MENU_LINES, MENU_PROMPT,
    NO_ENTRIES_MESSAGE, NO_MATCHES_MESSAGE, RANDOM_HEADER, RESULT_SEPARATOR, SEARCH_PROMPT,
    WRITE_CONFIRMATION, WRITE_HEADER, WRITE_PROMPT,
};
use crate::db::ArchiveStore;
use crate::errors::{AppError, AppResult};
use crate::random::{choose, RandomSource};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Menu shown, waiting for a choice.
    MenuWait,
    Writing,
    ReadingRandom,
    Searching,
    /// Terminal state; the loop ends after the farewell.
    Exit,
}

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Write,
    ReadRandom,
    Search,
    Exit,
}

impl MenuChoice {
    /// The state entered when this choice is made at `MenuWait`.
    pub fn next_state(self) -> SessionState {
        match self {
            MenuChoice::Write => SessionState::Writing,
            MenuChoice::ReadRandom => SessionState::ReadingRandom,
            MenuChoice::Search => SessionState::Searching,
            MenuChoice::Exit => SessionState::Exit,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    /// Parses `1`-`4`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Write),
            "2" => Ok(MenuChoice::ReadRandom),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Drives one interactive session over an archive.
pub struct SessionController<R, W, S> {
    archive: ArchiveStore,
    quotes: Vec<String>,
    input: R,
    output: W,
    random: S,
}

impl<R: BufRead, W: Write, S: RandomSource> SessionController<R, W, S> {
    /// Creates a controller. `quotes` is the fixed list shown after saving.
    pub fn new(archive: ArchiveStore, quotes: Vec<String>, input: R, output: W, random: S) -> Self {
        SessionController {
            archive,
            quotes,
            input,
            output,
            random,
        }
    }

    /// The archive this session writes to.
    pub fn archive(&self) -> &ArchiveStore {
        &self.archive
    }

    /// Consumes the controller and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Consumes the controller and returns the archive and output sink.
    pub fn into_parts(self) -> (ArchiveStore, W) {
        (self.archive, self.output)
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// The archive is initialized once before the first menu is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be initialized or the terminal
    /// cannot be read or written. Storage failures during an operation are
    /// reported to the user and the menu is shown again.
    pub fn run(&mut self) -> AppResult<()> {
        self.archive.initialize()?;
        info!("Session started");

        writeln!(self.output, "\n{}\n", APP_BANNER)?;

        let mut state = SessionState::MenuWait;
        while state != SessionState::Exit {
            state = match self.step(state) {
                Ok(next) => next,
                Err(e) if e.is_recoverable() => {
                    warn!("Operation failed: {}", e);
                    writeln!(self.output, "\n{}\n", e)?;
                    SessionState::MenuWait
                }
                Err(e) => return Err(e),
            };
        }

        writeln!(self.output, "\n{}\n", FAREWELL_MESSAGE)?;
        self.output.flush()?;
        info!("Session ended");
        Ok(())
    }

    /// Performs the work of `state` and returns the state to move to.
    pub fn step(&mut self, state: SessionState) -> AppResult<SessionState> {
        debug!("Entering state {:?}", state);
        match state {
            SessionState::MenuWait => self.await_choice(),
            SessionState::Writing => self.write_entry(),
            SessionState::ReadingRandom => self.read_random_entry(),
            SessionState::Searching => self.search_entries(),
            SessionState::Exit => Ok(SessionState::Exit),
        }
    }

    fn await_choice(&mut self) -> AppResult<SessionState> {
        for line in MENU_LINES {
            writeln!(self.output, "{}", line)?;
        }
        let Some(line) = self.prompt(&format!("\n{}", MENU_PROMPT))? else {
            return Ok(SessionState::Exit);
        };

        match line.parse::<MenuChoice>() {
            Ok(choice) => {
                debug!("Menu choice: {:?}", choice);
                Ok(choice.next_state())
            }
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "\n{}\n", INVALID_CHOICE_MESSAGE)?;
                Ok(SessionState::MenuWait)
            }
        }
    }

    fn write_entry(&mut self) -> AppResult<SessionState> {
        writeln!(self.output, "\n{}\n", WRITE_HEADER)?;

        loop {
            let Some(content) = self.prompt(&format!("{}\n\n", WRITE_PROMPT))? else {
                return Ok(SessionState::Exit);
            };

            match self.archive.append(&content) {
                Ok(entry) => {
                    debug!("Saved entry {}", entry.id);
                    writeln!(self.output, "\n{}", WRITE_CONFIRMATION)?;
                    if let Some(quote) = choose(&mut self.random, &self.quotes) {
                        writeln!(self.output, "{}", quote)?;
                    }
                    writeln!(self.output)?;
                    return Ok(SessionState::MenuWait);
                }
                Err(AppError::Validation(msg)) => {
                    debug!("Rejected entry: {}", msg);
                    writeln!(self.output, "\n{}\n", msg)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_random_entry(&mut self) -> AppResult<SessionState> {
        let entries = self.archive.fetch_all()?;

        match choose(&mut self.random, &entries) {
            Some(entry) => {
                debug!("Showing entry {} of {}", entry.id, entries.len());
                writeln!(self.output, "\n{}\n", RANDOM_HEADER)?;
                writeln!(self.output, "{}\n", entry)?;
            }
            None => {
                writeln!(self.output, "\n{}\n", NO_ENTRIES_MESSAGE)?;
            }
        }
        Ok(SessionState::MenuWait)
    }

    fn search_entries(&mut self) -> AppResult<SessionState> {
        let Some(keyword) = self.prompt(&format!("\n{}", SEARCH_PROMPT))? else {
            return Ok(SessionState::Exit);
        };

        let matches = self.archive.fetch_matching(&keyword)?;
        debug!("Search matched {} entries", matches.len());

        if matches.is_empty() {
            writeln!(self.output, "\n{}\n", NO_MATCHES_MESSAGE)?;
            return Ok(SessionState::MenuWait);
        }

        let noun = if matches.len() == 1 { "Entry" } else { "Entries" };
        writeln!(self.output, "\n--- {} {} Found ---\n", matches.len(), noun)?;
        for entry in &matches {
            writeln!(self.output, "Date: {}", entry.date_string())?;
            writeln!(self.output, "{}\n{}\n", entry.content, RESULT_SEPARATOR)?;
        }
        Ok(SessionState::MenuWait)
    }

    /// Writes `text`, flushes, and reads one line without its terminator.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

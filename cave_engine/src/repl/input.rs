//! Terminal input handling for the cave REPL.
//!
//! Wraps rustyline configuration and completion tailored to the game's
//! command set, with a plain stdin fallback for piped input.

use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Everything the player can usefully type, offered for tab completion.
const COMMAND_TERMS: &[&str] = &[
    "go east",
    "go north",
    "go south",
    "go west",
    "help",
    "inventory",
    "quit",
    "take artifact",
    "take key",
    "take torch",
    "use key",
];

type ReplEditor = rustyline::Editor<CaveHelper, DefaultHistory>;

#[derive(Default)]
struct CaveHelper;

impl Helper for CaveHelper {}

impl Completer for CaveHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, command_completions(&prefix)))
    }
}

impl Hinter for CaveHelper {
    type Hint = String;
}

impl Highlighter for CaveHelper {}

impl Validator for CaveHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn command_completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    ///
    /// # Errors
    /// - if the plain stdin backend fails to read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
}

impl RustylineInput {
    fn new() -> io::Result<Box<Self>> {
        let mut editor = rustyline::Editor::<CaveHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(CaveHelper));
        Ok(Box::new(Self { editor }))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                // history lives only as long as the session
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("failed to append to history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(strip_line_ending(&self.buffer).to_string()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

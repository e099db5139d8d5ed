// Console seam between the menu flows and the terminal.
// `LineConsole` speaks the plain line protocol over any reader/writer pair
// (piped stdin, tests); `TerminalConsole` uses `dialoguer` prompts when a
// human is at the keyboard.

use dialoguer::Input;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Failures of the console itself, as opposed to bad user input.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,
}

/// A line that was expected to start with an integer but did not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid number: {input:?}")]
pub struct MalformedNumericInput {
    pub input: String,
}

/// Parse the first whitespace-separated token of `line` as an `i32`.
/// Anything after that token is ignored.
pub fn parse_number(line: &str) -> Result<i32, MalformedNumericInput> {
    line.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| MalformedNumericInput { input: line.to_string() })
}

/// Line-oriented console used by the shell.
pub trait Console {
    /// Print one full line.
    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Show `prompt` (without its trailing separator) and read one line.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Read one more line without showing a prompt.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

/// Plain text console: prompts are written as `"<prompt>: "` and each answer
/// is one input line with its terminator removed.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::Closed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Interactive console backed by `dialoguer::Input`.
#[derive(Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    fn input(prompt: Option<&str>) -> Result<String, ConsoleError> {
        let mut input = Input::<String>::new();
        input.allow_empty(true);
        if let Some(prompt) = prompt {
            input.with_prompt(prompt);
        }
        input.interact_text().map_err(input_error)
    }
}

/// A prompt that hit end of input ends the session; anything else is a
/// real I/O failure.
fn input_error(err: io::Error) -> ConsoleError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => ConsoleError::Closed,
        _ => ConsoleError::Io(err),
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        println!("{line}");
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Self::input(Some(prompt))
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        Self::input(None)
    }
}

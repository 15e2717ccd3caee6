use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::Result;

pub const PROMPT: &str = "Entrez votre nom: ";
pub const BLANK_NAME_ERROR: &str = "Erreur: Le nom ne peut pas être vide!";

/// Outcome of one read-validate-respond cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum Greeting {
    Blank,
    /// Holds the name exactly as typed, surrounding whitespace included.
    Named(String),
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::Blank => write!(f, "{BLANK_NAME_ERROR}"),
            Greeting::Named(name) => write!(f, "Hello {name}!"),
        }
    }
}

/// Validates a captured line.
///
/// Only the check looks at the trimmed value, the greeting keeps the raw one.
/// Trimming strips every char up to and including U+0020, control chars
/// included, and nothing above it.
pub fn greet(raw: &str) -> Greeting {
    if raw.trim_matches(|c: char| c <= ' ').is_empty() {
        Greeting::Blank
    } else {
        Greeting::Named(raw.to_string())
    }
}

fn is_line_separator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Reads one line without its terminator.
///
/// Bytes are read up to `\n`, invalid UTF-8 is replaced with U+FFFD, and the
/// name ends at the first line separator (`\r\n`, `\n`, `\r`, U+0085,
/// U+2028 or U+2029). End of stream before any character yields an empty
/// string.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn read_name<R: BufRead>(mut input: R) -> Result<String> {
    let mut buf = Vec::new();
    let bytes_read = input.read_until(b'\n', &mut buf)?;
    if bytes_read == 0 {
        debug!("Standard input closed before a name was entered.");
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    if let Some(end) = line.find(is_line_separator) {
        line.truncate(end);
    }
    Ok(line)
}

/// Runs the greeter once.
///
/// Writes the prompt, waits for one line on `input`, and writes either the
/// greeting or the blank name error to `output`.
///
/// # Errors
///
/// This function will return an error if reading the name or writing to
/// `output` fails. A blank name is not an error.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Greeting> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let name = read_name(input)?;
    debug!("Captured name: {name:?}");

    let greeting = greet(&name);
    debug!("Responding with: {greeting:?}");
    writeln!(output, "{greeting}")?;
    output.flush()?;
    Ok(greeting)
}

use std::io::{self, BufRead, Write};

use thiserror::Error;

pub const PROMPT: &str = "Enter a large integer (e.g., 40000): ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("no value for n was provided")]
    Missing,
    #[error("invalid input '{input}': expected a 32-bit signed integer")]
    Invalid { input: String },
}

/// Parses the loop size, tolerating surrounding whitespace.
pub fn parse_size(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }
    trimmed.parse::<i32>().map_err(|_| InputError::Invalid {
        input: trimmed.to_string(),
    })
}

/// Writes the prompt to `output` and reads one line from `input`.
pub fn prompt_for_size<R, W>(input: &mut R, output: &mut W) -> Result<i32, InputError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Missing);
    }
    parse_size(&line)
}

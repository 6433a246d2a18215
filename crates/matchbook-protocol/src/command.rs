//! Line-oriented command parsing.
//!
//! Grammar (one command per line):
//!
//! - Place order: `<B|S>,<id>,<price>,<volume>[,<peak>]`
//!   with whitespace tolerated around commas; a trailing `peak` of 0 is
//!   the same as leaving it off (plain limit order).
//! - Comment: anything starting with `#`.
//! - Blank: empty or whitespace-only.
//!
//! Anything else is malformed and comes back as a [`ParseError`] carrying
//! the offending line; the caller reports it and moves on.

use matchbook_core::{OrderRequest, Side};
use thiserror::Error;

/// One line of input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An order-placement command.
    Place(OrderRequest),

    /// A `#`-prefixed comment line.
    Comment,

    /// A blank or whitespace-only line.
    Blank,
}

/// A line that matched none of the recognized forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized command: {line}")]
pub struct ParseError {
    /// The raw input line, untrimmed.
    pub line: String,
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Blank);
    }
    if trimmed.starts_with('#') {
        return Ok(Command::Comment);
    }

    parse_place(trimmed).ok_or_else(|| ParseError {
        line: line.to_string(),
    })
}

fn parse_place(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != 4 && tokens.len() != 5 {
        return None;
    }

    let mut side_chars = tokens[0].chars();
    let side = Side::from_char(side_chars.next()?)?;
    if side_chars.next().is_some() {
        return None;
    }

    let id = parse_u32(tokens[1])?;
    let price = parse_u32(tokens[2])?;
    let volume = parse_u32(tokens[3])?;
    // Zero volume is malformed, not a no-op placement.
    if volume == 0 {
        return None;
    }

    let peak = match tokens.get(4) {
        Some(token) => parse_u32(token)?,
        None => 0,
    };

    Some(Command::Place(OrderRequest {
        side,
        id,
        price,
        volume,
        peak,
    }))
}

fn parse_u32(s: &str) -> Option<u32> {
    s.parse::<u32>().ok()
}

//! matchbook-protocol
//!
//! Text interface around the matching core:
//! - command parsing (order grammar, comments, blank lines)
//! - report rendering (trade lines, book table, digit grouping)

pub mod command;
pub mod report;

pub use command::{parse_command, Command, ParseError};
pub use report::{format_order, format_trade, render_book, thousands};

//! CLI module
//!
//! Command-line interface for searching from a terminal.
//!
//! # Commands
//!
//! - `search` - Run one query and optionally load further pages
//! - `interactive` - Read queries and `:more` / `:quit` commands from stdin

mod commands;
mod runner;
mod view;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{run_interactive, run_search, Runner};
pub use view::TerminalView;

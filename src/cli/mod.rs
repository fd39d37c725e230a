//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::{Cli, SessionCommand};
pub use output::{format_draft, format_entry_card, format_entry_list};
pub use repl::Terminal;

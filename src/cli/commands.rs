//! CLI command definitions

use crate::domain::{DraftField, EntryId, Vibe};
use crate::error::{BrewlogError, Result};
use crate::infrastructure::CONFIG_ENV;
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(name = "brewlog")]
#[command(about = "Log reviews of coffee shops for the length of a session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file (title, currency, seed entries)
    #[arg(short, long, value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Start with an empty list, ignoring seed entries
    #[arg(long)]
    pub no_seed: bool,
}

/// A single line typed into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add,
    Set { field: DraftField, value: String },
    Vibe(Vibe),
    Save,
    Cancel,
    Delete(EntryId),
    Show(EntryId),
    List,
    Draft,
    Help,
    Quit,
}

/// Matches a double-quoted argument or a bare word
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#""([^"]*)"|(\S+)"#).unwrap())
}

/// Split a line into arguments, honouring double quotes
fn tokenize(line: &str) -> Vec<String> {
    token_regex()
        .captures_iter(line)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(trimmed);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "add" | "new" => SessionCommand::Add,
            "set" => {
                let (field, rest) = args.split_first().ok_or_else(|| {
                    BrewlogError::Usage("set <field> <value>".to_string())
                })?;
                SessionCommand::Set {
                    field: DraftField::from_str(field)?,
                    value: rest.join(" "),
                }
            }
            "vibe" => match args {
                [tag] => SessionCommand::Vibe(Vibe::from_str(tag)?),
                _ => return Err(BrewlogError::Usage("vibe <tag>".to_string())),
            },
            "save" => SessionCommand::Save,
            "cancel" => SessionCommand::Cancel,
            "delete" | "rm" => match args {
                [id] => SessionCommand::Delete(EntryId::from_str(id)?),
                _ => return Err(BrewlogError::Usage("delete <id>".to_string())),
            },
            "show" => match args {
                [id] => SessionCommand::Show(EntryId::from_str(id)?),
                _ => return Err(BrewlogError::Usage("show <id>".to_string())),
            },
            "list" | "ls" => SessionCommand::List,
            "draft" => SessionCommand::Draft,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(BrewlogError::UnknownCommand(name.clone())),
        };

        Ok(Some(command))
    }
}

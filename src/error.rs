//! Error types for brewlog

use crate::domain::{PlaceType, Vibe};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for brewlog
#[derive(Debug, Error)]
pub enum BrewlogError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown place type: {0}")]
    UnknownPlaceType(String),

    #[error("Unknown vibe: {0}")]
    UnknownVibe(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid entry id: {0}")]
    InvalidEntryId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("No entry in progress")]
    FormClosed,

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl BrewlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BrewlogError::ConfigNotFound(_) => 2,
            BrewlogError::Config(_) | BrewlogError::TomlDeserialize(_) => 3,
            BrewlogError::Io(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BrewlogError::UnknownField(field) => {
                format!(
                    "Unknown field: '{}'\n\n\
                    Valid fields: place, location, type, rating, price, note\n\
                    Example: set place \"Kofra\"",
                    field
                )
            }
            BrewlogError::UnknownPlaceType(value) => {
                let valid: Vec<&str> = PlaceType::ALL.iter().map(|t| t.label()).collect();
                format!(
                    "Unknown place type: '{}'\n\n\
                    Valid types: {}\n\
                    Example: set type cafe",
                    value,
                    valid.join(", ")
                )
            }
            BrewlogError::UnknownVibe(value) => {
                let valid: Vec<&str> = Vibe::ALL.iter().map(|v| v.label()).collect();
                format!(
                    "Unknown vibe: '{}'\n\n\
                    Valid vibes: {}\n\
                    Example: vibe cozy",
                    value,
                    valid.join(", ")
                )
            }
            BrewlogError::InvalidRating(value) => {
                format!(
                    "Invalid rating: '{}'\n\n\
                    Ratings are whole numbers from 1 to 5\n\
                    Example: set rating 4",
                    value
                )
            }
            BrewlogError::InvalidEntryId(value) => {
                format!(
                    "Invalid entry id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'list' to see entry ids\n\
                    • Ids may be written with or without '#' (e.g., delete 2)",
                    value
                )
            }
            BrewlogError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Use 'help' to see available commands",
                    cmd
                )
            }
            BrewlogError::FormClosed => "No entry in progress\n\n\
                Suggestions:\n\
                • Run 'add' to start a new entry"
                .to_string(),
            BrewlogError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset BREWLOG_CONFIG to use the built-in defaults",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BrewlogError
pub type Result<T> = std::result::Result<T, BrewlogError>;

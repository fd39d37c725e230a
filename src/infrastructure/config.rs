//! Configuration management
//!
//! Config is read once at start-up and never written back.

use crate::domain::{Draft, DraftValidator, PlaceType, Rating, Vibe};
use crate::error::{BrewlogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "BREWLOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading printed when the session starts
    pub title: String,
    /// Symbol printed in front of prices
    pub currency: String,
    /// Entries committed before the first prompt
    pub seed: Vec<SeedEntry>,
}

/// An entry listed in the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedEntry {
    pub place: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub place_type: PlaceType,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub vibes: Vec<Vibe>,
    #[serde(default)]
    pub note: String,
}

impl SeedEntry {
    /// Convert into a draft, rejecting entries the add form would reject
    pub fn to_draft(&self) -> Result<Draft> {
        let draft = Draft {
            place: self.place.clone(),
            location: self.location.clone(),
            place_type: self.place_type,
            rating: self.rating,
            price: self.price.clone(),
            vibes: self.vibes.iter().copied().collect(),
            note: self.note.clone(),
        };

        let missing = DraftValidator::missing_fields(&draft);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            return Err(BrewlogError::Config(format!(
                "Seed entry '{}' is missing required field(s): {}",
                self.place,
                names.join(", ")
            )));
        }

        Ok(draft)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Norwich Coffee".to_string(),
            currency: "£".to_string(),
            seed: vec![SeedEntry {
                place: "Kofra".to_string(),
                location: "Upper St Giles".to_string(),
                place_type: PlaceType::CoffeeShop,
                rating: Rating::try_from(5).unwrap_or_default(),
                price: "3.50".to_string(),
                vibes: vec![Vibe::Chill, Vibe::Aesthetic],
                note: "Great atmosphere and excellent coffee".to_string(),
            }],
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BrewlogError::ConfigNotFound(path.to_path_buf())
            } else {
                BrewlogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        tracing::info!(path = %path.display(), seeds = config.seed.len(), "config loaded");
        Ok(config)
    }

    /// Resolve config from an explicit path, falling back to built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Seed entries as drafts, in file order
    pub fn seed_drafts(&self) -> Result<Vec<Draft>> {
        self.seed.iter().map(SeedEntry::to_draft).collect()
    }
}

//! Entries and the draft they are committed from

use crate::domain::{PlaceType, Rating, VibeSet};
use crate::error::{BrewlogError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Identifier of a committed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(value: u64) -> Self {
        EntryId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = BrewlogError;

    /// Accepts `7` and `#7`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        digits
            .parse()
            .map(EntryId)
            .map_err(|_| BrewlogError::InvalidEntryId(s.to_string()))
    }
}

/// Editable fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Place,
    Location,
    Type,
    Rating,
    Price,
    Note,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Place => "place",
            DraftField::Location => "location",
            DraftField::Type => "type",
            DraftField::Rating => "rating",
            DraftField::Price => "price",
            DraftField::Note => "note",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = BrewlogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "place" | "name" => Ok(DraftField::Place),
            "location" => Ok(DraftField::Location),
            "type" => Ok(DraftField::Type),
            "rating" => Ok(DraftField::Rating),
            "price" => Ok(DraftField::Price),
            "note" | "notes" => Ok(DraftField::Note),
            _ => Err(BrewlogError::UnknownField(s.to_string())),
        }
    }
}

/// In-progress entry being edited in the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub place: String,
    pub location: String,
    pub place_type: PlaceType,
    pub rating: Rating,
    pub price: String,
    pub vibes: VibeSet,
    pub note: String,
}

/// Input accepted by `EntryStore::add`
pub type EntryInput = Draft;

impl Draft {
    /// Update one field from user text.
    ///
    /// Text fields are stored verbatim. On a parse error the draft is left unchanged.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        match field {
            DraftField::Place => self.place = value.to_string(),
            DraftField::Location => self.location = value.to_string(),
            DraftField::Type => self.place_type = PlaceType::from_str(value)?,
            DraftField::Rating => self.rating = Rating::from_str(value)?,
            DraftField::Price => self.price = value.to_string(),
            DraftField::Note => self.note = value.to_string(),
        }
        Ok(())
    }
}

/// A committed review. Fields are read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    place: String,
    location: String,
    place_type: PlaceType,
    rating: Rating,
    price: String,
    vibes: VibeSet,
    note: String,
    logged_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn from_input(id: EntryId, input: EntryInput, logged_at: DateTime<Utc>) -> Self {
        Entry {
            id,
            place: input.place,
            location: input.location,
            place_type: input.place_type,
            rating: input.rating,
            price: input.price,
            vibes: input.vibes,
            note: input.note,
            logged_at,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn place_type(&self) -> PlaceType {
        self.place_type
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn vibes(&self) -> &VibeSet {
        &self.vibes
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

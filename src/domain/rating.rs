//! Star rating

use crate::error::BrewlogError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Rating in the range 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(3)
    }
}

impl TryFrom<u8> for Rating {
    type Error = BrewlogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(BrewlogError::InvalidRating(value.to_string()))
        }
    }
}

impl FromStr for Rating {
    type Err = BrewlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| BrewlogError::InvalidRating(s.to_string()))?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

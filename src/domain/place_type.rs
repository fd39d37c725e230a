//! Place type definitions

use crate::error::BrewlogError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Kind of place being reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum PlaceType {
    #[default]
    CoffeeShop,
    Cafe,
    Bakery,
    Bar,
}

impl PlaceType {
    /// All place types in the order the form offers them
    pub const ALL: [PlaceType; 4] = [
        PlaceType::CoffeeShop,
        PlaceType::Cafe,
        PlaceType::Bakery,
        PlaceType::Bar,
    ];

    /// Label shown on cards
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::CoffeeShop => "Coffee shop",
            PlaceType::Cafe => "Cafe",
            PlaceType::Bakery => "Bakery",
            PlaceType::Bar => "Bar",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlaceType {
    type Err = BrewlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "coffeeshop" => Ok(PlaceType::CoffeeShop),
            "cafe" | "café" => Ok(PlaceType::Cafe),
            "bakery" => Ok(PlaceType::Bakery),
            "bar" => Ok(PlaceType::Bar),
            _ => Err(BrewlogError::UnknownPlaceType(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlaceType {
    type Error = BrewlogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

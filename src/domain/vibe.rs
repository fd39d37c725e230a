//! Vibe tags and the set that holds them

use crate::error::BrewlogError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Descriptive tag attached to an entry.
///
/// Variant order is the order the form lists them in, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Vibe {
    Chill,
    Quiet,
    Social,
    Aesthetic,
    Cozy,
    Writing,
}

impl Vibe {
    pub const ALL: [Vibe; 6] = [
        Vibe::Chill,
        Vibe::Quiet,
        Vibe::Social,
        Vibe::Aesthetic,
        Vibe::Cozy,
        Vibe::Writing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Chill => "Chill",
            Vibe::Quiet => "Quiet",
            Vibe::Social => "Social",
            Vibe::Aesthetic => "Aesthetic",
            Vibe::Cozy => "Cozy",
            Vibe::Writing => "Writing",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Vibe {
    type Err = BrewlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Vibe::ALL
            .into_iter()
            .find(|vibe| vibe.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BrewlogError::UnknownVibe(s.to_string()))
    }
}

impl TryFrom<String> for Vibe {
    type Error = BrewlogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Set of vibes without duplicates, iterated in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VibeSet(BTreeSet<Vibe>);

impl VibeSet {
    pub fn new() -> Self {
        VibeSet(BTreeSet::new())
    }

    /// Select the vibe if absent, deselect it if present.
    /// Returns whether the vibe is selected afterwards.
    pub fn toggle(&mut self, vibe: Vibe) -> bool {
        if self.0.remove(&vibe) {
            false
        } else {
            self.0.insert(vibe);
            true
        }
    }

    pub fn contains(&self, vibe: Vibe) -> bool {
        self.0.contains(&vibe)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vibe> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Vibe> for VibeSet {
    fn from_iter<I: IntoIterator<Item = Vibe>>(iter: I) -> Self {
        VibeSet(iter.into_iter().collect())
    }
}

impl fmt::Display for VibeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(|v| v.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

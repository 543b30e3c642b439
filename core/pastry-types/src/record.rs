//! Pastry records and the payloads that create or modify them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a pastry by the store. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PastryId(u64);

impl PastryId {
    /// The id given to the first pastry of an empty store.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PastryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PastryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// The allergens a pastry can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Nuts,
    Gluten,
    Dairy,
    Soy,
    Eggs,
}

impl Allergen {
    pub const ALL: [Self; 5] = [Self::Nuts, Self::Gluten, Self::Dairy, Self::Soy, Self::Eggs];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nuts => "nuts",
            Self::Gluten => "gluten",
            Self::Dairy => "dairy",
            Self::Soy => "soy",
            Self::Eggs => "eggs",
        }
    }

    /// Looks up an allergen by its exact wire name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pastry as held by the store and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastryRecord {
    pub id: PastryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
}

impl PastryRecord {
    /// Builds a record from a validated create payload.
    pub fn from_input(id: PastryId, input: PastryInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            allergens: input.allergens,
        }
    }

    /// Overwrites the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: PastryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = Some(price);
        }
        if let Some(allergens) = update.allergens {
            self.allergens = Some(allergens);
        }
    }
}

/// A validated create payload. Carries no id; the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastryInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
}

impl PastryInput {
    /// Shorthand for an input with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: None,
            allergens: None,
        }
    }
}

/// A validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PastryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
}

impl PastryUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.allergens.is_none()
    }
}

//! Fixed name → upstream id tables for the three required search filters.
//!
//! Keys are the canonical display names clients send. Matching is exact:
//! no trimming and no case folding, so `"dubai"` is not `"Dubai"`.

use thiserror::Error;

const LOCATIONS: &[(&str, &str)] = &[
    ("Ajman", "5"),
    ("Umm Al Quwain", "2"),
    ("Al Ain", "8"),
    ("Abu Dhabi", "6"),
    ("Fujairah", "7"),
    ("Ras Al Khaimah", "3"),
    ("Dubai", "1"),
    ("Sharjah", "4"),
];

const OPTIONS: &[(&str, &str)] = &[
    ("Rent", "2"),
    ("Buy", "1"),
    ("Commercial rent", "4"),
    ("Commercial buy", "3"),
    ("New Projects", "5"),
];

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("Apartment", "1"),
    ("Villa", "35"),
    ("Townhouse", "22"),
    ("Penthouse", "20"),
    ("Compound", "42"),
    ("Duplex", "24"),
    ("Full Floor", "18"),
    ("Half Floor", "29"),
    ("Whole Building", "10"),
    ("Land", "5"),
    ("Bulk Sale Unit", "30"),
    ("Bungalow", "31"),
    ("Hotel & Hotel Apartment", "45"),
];

/// One of the three lookup tables a search filter is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Location,
    Option,
    PropertyType,
}

impl LookupTable {
    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            LookupTable::Location => LOCATIONS,
            LookupTable::Option => OPTIONS,
            LookupTable::PropertyType => PROPERTY_TYPES,
        }
    }

    /// Resolves a display name to its upstream id.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when `name` is not an exact key of
    /// this table.
    pub fn resolve(self, name: &str) -> Result<&'static str, LookupError> {
        self.entries()
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| LookupError::NotFound {
                table: self,
                name: name.to_owned(),
            })
    }

    /// Display names accepted by this table, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.entries().iter().map(|(key, _)| *key).collect()
    }
}

impl std::fmt::Display for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupTable::Location => write!(f, "Location"),
            LookupTable::Option => write!(f, "Option"),
            LookupTable::PropertyType => write!(f, "Property type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{table} '{name}' not found")]
    NotFound { table: LookupTable, name: String },
}

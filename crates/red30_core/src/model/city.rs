//! World reference data: countries and the cities keyed to them.
//!
//! # Invariants
//! - `City::country_code` must name an existing `Country::code` at insert
//!   time; the repository enforces this, not the database.
//! - City names are not unique; name-based lookups may match several rows.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for a city row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CityId = i64;

/// One row of the read-only `country` reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Short unique identifier, compared exactly and case-sensitively.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A persisted city row, id included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Surrogate key assigned by the store on insert.
    pub id: CityId,
    /// City name; lookups against it are case-insensitive.
    pub name: String,
    /// Serialized as `countrycode` to match the external schema naming.
    #[serde(rename = "countrycode")]
    pub country_code: String,
    /// Province, state, etc.
    pub district: String,
    /// Mutable head count. Passed through unvalidated.
    pub population: i64,
}

/// Insert shape for a city: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name: String,
    pub country_code: String,
    pub district: String,
    pub population: i64,
}

impl NewCity {
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        district: impl Into<String>,
        population: i64,
    ) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
            district: district.into(),
            population,
        }
    }
}

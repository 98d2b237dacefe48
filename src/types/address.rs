//! Address-related types for the Coordinates Engine
//!
//! This module defines the location identifier and the resolved address
//! record handed to geocoding providers.

use serde::Deserialize;

/// Location identifier
///
/// Valid identifiers are strictly positive. The type is signed so that
/// non-positive values coming from input files can be detected and rejected.
pub type LocationId = i64;

/// Resolved textual address data for one location
///
/// Produced by an [`AddressStore`](crate::core::AddressStore) lookup and
/// borrowed by the pipeline for the duration of one provider call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// The location id (positive)
    pub id: LocationId,

    /// Human-readable location name, e.g. a shop or venue name
    pub display_name: String,

    /// Plain street address text
    pub plain_address: String,

    /// City the address belongs to
    pub city_name: String,
}

impl AddressRecord {
    pub fn new(
        id: LocationId,
        display_name: impl Into<String>,
        plain_address: impl Into<String>,
        city_name: impl Into<String>,
    ) -> Self {
        AddressRecord {
            id,
            display_name: display_name.into(),
            plain_address: plain_address.into(),
            city_name: city_name.into(),
        }
    }

    /// Address query text: plain address followed by display name, with all
    /// whitespace removed
    pub fn query_text(&self) -> String {
        self.plain_address
            .chars()
            .chain(self.display_name.chars())
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

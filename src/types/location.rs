//! Geocoded location types for the Coordinates Engine
//!
//! This module defines the coordinate pair returned by providers and the
//! validated output record written to the result file.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::address::LocationId;
use super::error::GeocodeError;

/// A longitude/latitude pair as returned by a geocoding provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinates {
            longitude,
            latitude,
        }
    }
}

/// Validated output record pairing a location id with its coordinates
///
/// Instances are immutable and can only be created through
/// [`GeocodeLocation::builder`], which rejects non-positive ids.
///
/// Identity is the location id alone: two records with the same id compare
/// equal and hash identically regardless of their other fields.
#[derive(Debug, Clone)]
pub struct GeocodeLocation {
    id: LocationId,
    location_name: String,
    address_name: String,
    city_name: String,
    longitude: f64,
    latitude: f64,
}

impl GeocodeLocation {
    /// Start building a location record
    ///
    /// # Errors
    ///
    /// Returns `GeocodeError::InvalidArgument` if `id` is zero or negative.
    pub fn builder(id: LocationId) -> Result<GeocodeLocationBuilder, GeocodeError> {
        if id <= 0 {
            return Err(GeocodeError::invalid_argument(&format!(
                "locationId can't be zero or negative, got {}",
                id
            )));
        }

        Ok(GeocodeLocationBuilder {
            id,
            location_name: String::new(),
            address_name: String::new(),
            city_name: String::new(),
            coordinates: Coordinates::new(0.0, 0.0),
        })
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn address_name(&self) -> &str {
        &self.address_name
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.longitude, self.latitude)
    }
}

impl PartialEq for GeocodeLocation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GeocodeLocation {}

impl Hash for GeocodeLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for GeocodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ locId : {}, locName : {}, addressName : {}, cityName : {}, latitude : {}, longitude : {} }}",
            self.id,
            self.location_name,
            self.address_name,
            self.city_name,
            self.latitude,
            self.longitude
        )
    }
}

/// Builder for [`GeocodeLocation`]
///
/// Obtained from [`GeocodeLocation::builder`]; the id has already been
/// validated, so `build` cannot fail.
#[derive(Debug, Clone)]
pub struct GeocodeLocationBuilder {
    id: LocationId,
    location_name: String,
    address_name: String,
    city_name: String,
    coordinates: Coordinates,
}

impl GeocodeLocationBuilder {
    pub fn location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = name.into();
        self
    }

    pub fn address_name(mut self, name: impl Into<String>) -> Self {
        self.address_name = name.into();
        self
    }

    pub fn city_name(mut self, name: impl Into<String>) -> Self {
        self.city_name = name.into();
        self
    }

    pub fn coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn build(self) -> GeocodeLocation {
        GeocodeLocation {
            id: self.id,
            location_name: self.location_name,
            address_name: self.address_name,
            city_name: self.city_name,
            longitude: self.coordinates.longitude,
            latitude: self.coordinates.latitude,
        }
    }
}

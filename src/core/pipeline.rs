//! Geocoding pipeline
//!
//! Drives a [`GeocodeProvider`] over a batch of resolved addresses and
//! assembles [`GeocodeLocation`] records for the ones that succeed.
//!
//! # Failure Isolation
//!
//! Each record is geocoded independently. A failure (network error, bad
//! response, missing coordinates) is logged with the location id and the
//! record is dropped; it never aborts the rest of the batch. There are no
//! retries.

use crate::provider::GeocodeProvider;
use crate::types::{AddressRecord, Coordinates, GeocodeError, GeocodeLocation};

/// Geocode every record sequentially, keeping successes in input order
///
/// An empty input is a normal outcome: it yields an empty result and a log
/// diagnostic. The input slice is not modified.
pub fn process<P>(provider: &P, records: &[AddressRecord]) -> Vec<GeocodeLocation>
where
    P: GeocodeProvider + ?Sized,
{
    if records.is_empty() {
        log::warn!("Empty location list, nothing to geocode");
        return Vec::new();
    }

    records
        .iter()
        .filter_map(|record| geocode_record(provider, record))
        .collect()
}

/// Geocode one record, logging and swallowing any failure
pub fn geocode_record<P>(provider: &P, record: &AddressRecord) -> Option<GeocodeLocation>
where
    P: GeocodeProvider + ?Sized,
{
    let result = provider
        .geocode(record)
        .and_then(|coordinates| to_location(record, coordinates));

    match result {
        Ok(location) => Some(location),
        Err(e) => {
            log::warn!(
                "Failed to geocode location {} via {}: {}",
                record.id,
                provider.name(),
                e
            );
            None
        }
    }
}

/// Pair an address record with its coordinates
pub fn to_location(
    record: &AddressRecord,
    coordinates: Coordinates,
) -> Result<GeocodeLocation, GeocodeError> {
    Ok(GeocodeLocation::builder(record.id)?
        .location_name(record.display_name.as_str())
        .address_name(record.plain_address.as_str())
        .city_name(record.city_name.as_str())
        .coordinates(coordinates)
        .build())
}

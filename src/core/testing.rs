//! Test doubles shared by unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::provider::GeocodeProvider;
use crate::types::{AddressRecord, Coordinates, GeocodeError, LocationId};

/// Provider answering from a fixed table keyed by location id
///
/// Ids missing from the table fail with `NoGeocodes`.
#[derive(Debug, Default)]
pub struct FakeProvider {
    answers: HashMap<LocationId, Result<Coordinates, GeocodeError>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(mut self, id: LocationId, longitude: f64, latitude: f64) -> Self {
        self.answers
            .insert(id, Ok(Coordinates::new(longitude, latitude)));
        self
    }

    pub fn fail(mut self, id: LocationId) -> Self {
        self.answers.insert(
            id,
            Err(GeocodeError::Http {
                message: "connection reset".to_string(),
            }),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeocodeProvider for FakeProvider {
    fn name(&self) -> &str {
        "Fake"
    }

    fn geocode(&self, address: &AddressRecord) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(&address.id)
            .cloned()
            .unwrap_or(Err(GeocodeError::NoGeocodes { id: address.id }))
    }
}

/// Provider that panics for one id and succeeds for all others
#[derive(Debug)]
pub struct PanickingProvider {
    pub panic_on: LocationId,
}

impl GeocodeProvider for PanickingProvider {
    fn name(&self) -> &str {
        "Panicking"
    }

    fn geocode(&self, address: &AddressRecord) -> Result<Coordinates, GeocodeError> {
        if address.id == self.panic_on {
            panic!("provider blew up on {}", address.id);
        }
        Ok(Coordinates::new(address.id as f64, address.id as f64))
    }
}

//! Geocoding provider module
//!
//! Defines the capability every map vendor integration implements: turn one
//! resolved address into a longitude/latitude pair, or report why it could
//! not. Providers are shared read-only across concurrent calls, so they must
//! be `Send + Sync`.
//!
//! # Implementations
//!
//! - [`AutoNaviProvider`] - AutoNavi (amap.com) REST geocoding API

pub mod autonavi;

pub use autonavi::{AutoNaviConfig, AutoNaviProvider};

use crate::types::{AddressRecord, Coordinates, GeocodeError};

/// A geocoding web service
pub trait GeocodeProvider: Send + Sync {
    /// Short vendor name used in log messages
    fn name(&self) -> &str;

    /// Resolve one address to coordinates
    ///
    /// Issues at most one request; failures are returned, never retried.
    /// Any network resources acquired for the call are released before
    /// returning, on success and on error alike.
    fn geocode(&self, address: &AddressRecord) -> Result<Coordinates, GeocodeError>;
}

//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `address`: Location identifiers and resolved address records
//! - `location`: Coordinates and validated geocode output records
//! - `error`: Error types for the coordinates engine

pub mod address;
pub mod error;
pub mod location;

pub use address::{AddressRecord, LocationId};
pub use error::GeocodeError;
pub use location::{Coordinates, GeocodeLocation, GeocodeLocationBuilder};

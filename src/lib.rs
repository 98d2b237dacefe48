//! Coordinates Engine Library
//! # Overview
//!
//! This library converts a list of location ids into geographic coordinates
//! by querying a geocoding web service, and writes the results as CSV.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AddressRecord, GeocodeLocation, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`provider`] - Geocoding provider abstraction and the AutoNavi provider
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Address lookup by location id
//!   - [`core::pipeline`] - Per-record geocoding with failure isolation
//!   - [`core::dispatcher`] - Bounded concurrent provider calls
//! - [`strategy`] - Sequential or concurrent dispatch, selected at runtime
//! - [`io`] - Input id file, address store CSV, output CSV
//! - [`app`] - End-to-end run
//!
//! # Failure Policy
//!
//! - Unreadable input or store, nothing resolvable, or an unwritable output
//!   aborts the run
//! - Unknown ids and failed provider calls are logged and dropped
//! - Nothing is retried

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod provider;
pub mod strategy;
pub mod types;

pub use crate::core::{AddressStore, ConcurrentDispatcher, InMemoryAddressStore};
pub use io::write_locations_csv;
pub use provider::{AutoNaviConfig, AutoNaviProvider, GeocodeProvider};
pub use types::{AddressRecord, Coordinates, GeocodeError, GeocodeLocation, LocationId};

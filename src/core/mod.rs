//! Core business logic module
//!
//! This module contains the core geocoding components:
//! - `store` - Read-only address lookup by location id
//! - `pipeline` - Sequential geocoding with per-record failure isolation
//! - `dispatcher` - Bounded concurrent fan-out of provider calls

pub mod dispatcher;
pub mod pipeline;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::ConcurrentDispatcher;
pub use pipeline::{geocode_record, process};
pub use store::{resolve_records, AddressStore, InMemoryAddressStore};

//! Address store CSV loader
//!
//! Loads an [`InMemoryAddressStore`] from a CSV file with the header
//! `id,displayName,plainAddress,cityName`.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned
//! - Malformed rows and rows with a non-positive id are logged and skipped
//! - Duplicate ids are logged; the last row wins

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::core::{AddressStore, InMemoryAddressStore};
use crate::types::{AddressRecord, GeocodeError};

/// Load the address store from `path`
pub fn load_address_store(path: &Path) -> Result<InMemoryAddressStore, GeocodeError> {
    let file = File::open(path).map_err(|e| GeocodeError::from_io(e, path))?;
    let store = read_address_store(file)?;

    log::info!(
        "Loaded {} address records from '{}'",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Read address records from any CSV source
///
/// # Errors
///
/// Only I/O failures of the underlying reader are returned; bad rows are
/// skipped.
pub fn read_address_store<R: Read>(source: R) -> Result<InMemoryAddressStore, GeocodeError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut store = InMemoryAddressStore::new();

    for result in reader.deserialize::<AddressRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping address row: {}", GeocodeError::from(e));
                continue;
            }
        };

        if record.id <= 0 {
            log::warn!("Skipping address row with non-positive id {}", record.id);
            continue;
        }

        let id = record.id;
        if store.insert(record).is_some() {
            log::warn!("Duplicate address row for location {}, keeping the last one", id);
        }
    }

    Ok(store)
}

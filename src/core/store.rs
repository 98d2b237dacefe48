//! Address store for identifier resolution
//!
//! The store is a read-only mapping from location id to [`AddressRecord`].
//! It is built once per run and passed explicitly to the code that needs
//! it; there is no process-wide cache.

use std::collections::HashMap;

use crate::types::{AddressRecord, LocationId};

/// Read-only lookup of address records by location id
pub trait AddressStore {
    /// Look up the address for `id`, or `None` if the store has no entry
    fn resolve(&self, id: LocationId) -> Option<AddressRecord>;

    /// Number of records in the store
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// HashMap-backed address store
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressStore {
    records: HashMap<LocationId, AddressRecord>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the record it replaced (if any)
    pub fn insert(&mut self, record: AddressRecord) -> Option<AddressRecord> {
        self.records.insert(record.id, record)
    }
}

impl FromIterator<AddressRecord> for InMemoryAddressStore {
    fn from_iter<I: IntoIterator<Item = AddressRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl AddressStore for InMemoryAddressStore {
    fn resolve(&self, id: LocationId) -> Option<AddressRecord> {
        self.records.get(&id).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Resolve ids through `store`, dropping ids the store does not know
///
/// Records are returned in the iteration order of `ids`.
pub fn resolve_records<S, I>(store: &S, ids: I) -> Vec<AddressRecord>
where
    S: AddressStore + ?Sized,
    I: IntoIterator<Item = LocationId>,
{
    ids.into_iter()
        .filter_map(|id| {
            let record = store.resolve(id);
            if record.is_none() {
                log::debug!("Location {} not found in address store, skipping", id);
            }
            record
        })
        .collect()
}

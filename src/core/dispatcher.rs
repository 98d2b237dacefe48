//! Concurrent fan-out of provider calls
//!
//! This module provides the `ConcurrentDispatcher`, which geocodes a batch of
//! addresses with a bounded number of provider calls in flight.
//!
//! # Design
//!
//! Providers are blocking (one synchronous HTTP exchange per call), so each
//! call runs on tokio's blocking pool via `spawn_blocking`. Calls are pulled
//! lazily through `buffer_unordered`, which caps the number of concurrent
//! calls at `max_concurrent`.
//!
//! # Ordering
//!
//! Results arrive in completion order, not input order. Every success is
//! present; their order is unspecified.
//!
//! # Isolation
//!
//! Calls share nothing but a read-only `Arc` of the provider. A failed or
//! panicking call drops only its own record.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use super::pipeline::geocode_record;
use crate::provider::GeocodeProvider;
use crate::types::{AddressRecord, GeocodeLocation};

/// Bounded concurrent geocoder
#[derive(Clone)]
pub struct ConcurrentDispatcher {
    provider: Arc<dyn GeocodeProvider>,
    max_concurrent: usize,
}

impl ConcurrentDispatcher {
    /// Create a dispatcher; `max_concurrent` is clamped to at least 1
    pub fn new(provider: Arc<dyn GeocodeProvider>, max_concurrent: usize) -> Self {
        Self {
            provider,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Geocode all records concurrently, keeping the successes
    ///
    /// Must be awaited from within a tokio runtime.
    pub async fn process(&self, records: Vec<AddressRecord>) -> Vec<GeocodeLocation> {
        if records.is_empty() {
            log::warn!("Empty location list, nothing to geocode");
            return Vec::new();
        }

        let tasks = records.into_iter().map(|record| {
            let provider = Arc::clone(&self.provider);
            tokio::task::spawn_blocking(move || geocode_record(provider.as_ref(), &record))
        });

        stream::iter(tasks)
            .buffer_unordered(self.max_concurrent)
            .filter_map(|joined| async move {
                match joined {
                    Ok(location) => location,
                    Err(e) => {
                        log::error!("Geocoding task failed: {}", e);
                        None
                    }
                }
            })
            .collect()
            .await
    }
}

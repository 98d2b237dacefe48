//! Asynchronous concurrent processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Provider calls are fanned out over tokio's
//! blocking pool with a bounded number in flight.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── DispatchConfig (max_concurrent)
//!     └── ConcurrentDispatcher (spawn_blocking + buffer_unordered)
//!         └── Arc<dyn GeocodeProvider> (read-only, shared)
//! ```
//!
//! # Ordering
//!
//! All successes are present in the result; their order is unspecified.

use std::sync::Arc;

use crate::core::ConcurrentDispatcher;
use crate::provider::GeocodeProvider;
use crate::strategy::ProcessingStrategy;
use crate::types::{AddressRecord, GeocodeError, GeocodeLocation};

/// Configuration for concurrent dispatch
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchConfig {
    /// Maximum number of provider calls in flight
    pub max_concurrent: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get(),
        }
    }
}

impl DispatchConfig {
    /// Create a new DispatchConfig, falling back to the default for zero
    pub fn new(max_concurrent: usize) -> Self {
        let default = Self::default();

        let max_concurrent = if max_concurrent == 0 {
            log::warn!(
                "Invalid max_concurrent ({}), using default ({})",
                max_concurrent,
                default.max_concurrent
            );
            default.max_concurrent
        } else {
            max_concurrent
        };

        Self { max_concurrent }
    }
}

/// Asynchronous concurrent processing strategy
///
/// Builds a tokio multi-threaded runtime per call and geocodes all records
/// through a [`ConcurrentDispatcher`]. The runtime is shut down before
/// returning.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: DispatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        provider: Arc<dyn GeocodeProvider>,
        records: Vec<AddressRecord>,
    ) -> Result<Vec<GeocodeLocation>, GeocodeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent.clamp(1, num_cpus::get().max(1)))
            .max_blocking_threads(self.config.max_concurrent.max(1))
            .build()
            .map_err(|e| GeocodeError::Runtime {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let dispatcher = ConcurrentDispatcher::new(provider, self.config.max_concurrent);
        Ok(runtime.block_on(dispatcher.process(records)))
    }
}

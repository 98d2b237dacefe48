//! Synchronous processing strategy
//!
//! Geocodes records one at a time on the calling thread. Each provider call
//! blocks until its network exchange completes or times out before the next
//! record starts. Output order equals input order.

use std::sync::Arc;

use crate::core::pipeline;
use crate::provider::GeocodeProvider;
use crate::strategy::ProcessingStrategy;
use crate::types::{AddressRecord, GeocodeError, GeocodeLocation};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use coordinates_engine::provider::{AutoNaviConfig, AutoNaviProvider};
/// use coordinates_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::sync::Arc;
///
/// let provider = AutoNaviProvider::new(AutoNaviConfig::new("my-key")).unwrap();
/// let locations = SyncProcessingStrategy
///     .process(Arc::new(provider), Vec::new())
///     .expect("Processing failed");
/// assert!(locations.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        provider: Arc<dyn GeocodeProvider>,
        records: Vec<AddressRecord>,
    ) -> Result<Vec<GeocodeLocation>, GeocodeError> {
        Ok(pipeline::process(provider.as_ref(), &records))
    }
}

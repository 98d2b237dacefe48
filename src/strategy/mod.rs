//! Processing strategy module for geocoding dispatch
//!
//! This module defines the Strategy pattern for driving a geocoding provider
//! over a batch of resolved addresses. This allows different dispatch
//! implementations (sequential, bounded concurrent) to be selected at runtime.

use std::sync::Arc;

use crate::cli::StrategyType;
use crate::provider::GeocodeProvider;
use crate::types::{AddressRecord, GeocodeError, GeocodeLocation};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, DispatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for geocoding a batch of addresses
///
/// Each strategy geocodes every record at most once and returns the
/// successfully geocoded locations.
pub trait ProcessingStrategy: Send + Sync {
    /// Geocode `records` through `provider`
    ///
    /// # Returns
    ///
    /// * `Ok(locations)` with one entry per successfully geocoded record;
    ///   may be empty
    /// * `Err(GeocodeError)` only if the strategy itself could not run
    ///
    /// Individual record failures are logged and dropped; they never turn
    /// into an `Err` here.
    fn process(
        &self,
        provider: Arc<dyn GeocodeProvider>,
        records: Vec<AddressRecord>,
    ) -> Result<Vec<GeocodeLocation>, GeocodeError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional dispatch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<DispatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

//! End-to-end run of the coordinates engine
//!
//! ```text
//! ids file ─► read_location_ids ─► resolve_records(store) ─► strategy.process(provider)
//!                                                                     │
//!                                             write_locations_file ◄──┘
//! ```
//!
//! Input-stage and output-stage failures are fatal and returned as errors.
//! Per-id resolution failures and per-record provider failures only shrink
//! the result set.

use std::sync::Arc;

use crate::cli::{CliArgs, StrategyType};
use crate::core::{resolve_records, AddressStore};
use crate::io::{load_address_store, read_location_ids, write_locations_file};
use crate::provider::{AutoNaviProvider, GeocodeProvider};
use crate::strategy::create_strategy;
use crate::types::{GeocodeError, LocationId};

/// Counts reported at the end of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct valid ids read from the input file
    pub requested: usize,
    /// Ids found in the address store
    pub resolved: usize,
    /// Locations successfully geocoded and written
    pub geocoded: usize,
}

/// Run with the AutoNavi provider configured from `args`
pub fn run(args: &CliArgs) -> Result<RunSummary, GeocodeError> {
    let provider = AutoNaviProvider::new(args.to_provider_config())?;
    run_with_provider(args, Arc::new(provider))
}

/// Run the full pipeline with an explicit provider
pub fn run_with_provider(
    args: &CliArgs,
    provider: Arc<dyn GeocodeProvider>,
) -> Result<RunSummary, GeocodeError> {
    let ids = read_location_ids(&args.input_file)?;
    let store = load_address_store(&args.store_file)?;
    run_with_store(args, &store, ids, provider)
}

/// Geocode `ids` resolved through `store` and write the output file
pub fn run_with_store<S, I>(
    args: &CliArgs,
    store: &S,
    ids: I,
    provider: Arc<dyn GeocodeProvider>,
) -> Result<RunSummary, GeocodeError>
where
    S: AddressStore + ?Sized,
    I: IntoIterator<Item = LocationId>,
    I::IntoIter: ExactSizeIterator,
{
    let ids = ids.into_iter();
    let requested = ids.len();

    let records = resolve_records(store, ids);
    if records.is_empty() {
        return Err(GeocodeError::empty_locations(
            &args.input_file.display().to_string(),
        ));
    }
    let resolved = records.len();

    let config = match args.strategy {
        StrategyType::Async => Some(args.to_dispatch_config()),
        StrategyType::Sync => None,
    };
    let strategy = create_strategy(args.strategy.clone(), config);

    log::info!(
        "Geocoding {} of {} requested locations via {}",
        resolved,
        requested,
        provider.name()
    );
    let locations = strategy.process(provider, records)?;

    write_locations_file(&args.output_file, &locations)?;

    let summary = RunSummary {
        requested,
        resolved,
        geocoded: locations.len(),
    };
    log::info!(
        "Done: requested={}, resolved={}, geocoded={}",
        summary.requested,
        summary.resolved,
        summary.geocoded
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeProvider;
    use crate::core::InMemoryAddressStore;
    use crate::types::AddressRecord;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    fn args_for(dir: &Path, strategy: &str) -> CliArgs {
        let input = dir.join("ids.txt");
        let output = dir.join("out.csv");
        let store = dir.join("store.csv");
        CliArgs::try_parse_from([
            "program",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-s",
            store.to_str().unwrap(),
            "--api-key",
            "k",
            "--strategy",
            strategy,
        ])
        .unwrap()
    }

    fn store() -> InMemoryAddressStore {
        [
            AddressRecord::new(101, "Library", "Road 1", "Xiamen"),
            AddressRecord::new(303, "Museum", "Road 3", "Xiamen"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_run_with_store_writes_successes() {
        let dir = TempDir::new().unwrap();
        let args = args_for(dir.path(), "sync");
        let provider = Arc::new(FakeProvider::new().succeed(101, 118.07, 24.44).fail(303));

        let summary = run_with_store(&args, &store(), [101, 202, 303], provider).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                requested: 3,
                resolved: 2,
                geocoded: 1
            }
        );
        let content = std::fs::read_to_string(&args.output_file).unwrap();
        assert_eq!(
            content,
            "locationId,locationName,addressName,cityName,longitude,latitude\r\n\
             101,Library,Road 1,Xiamen,118.07,24.44\r\n"
        );
    }

    #[test]
    fn test_run_with_store_nothing_resolved() {
        let dir = TempDir::new().unwrap();
        let args = args_for(dir.path(), "sync");

        let result = run_with_store(&args, &store(), [1, 2], Arc::new(FakeProvider::new()));

        assert!(matches!(result, Err(GeocodeError::EmptyLocations { .. })));
        assert!(!args.output_file.exists());
    }

    #[test]
    fn test_run_with_store_all_geocoding_fails() {
        let dir = TempDir::new().unwrap();
        let args = args_for(dir.path(), "async");
        let provider = Arc::new(FakeProvider::new().fail(101).fail(303));

        let result = run_with_store(&args, &store(), [101, 303], provider);

        assert_eq!(result, Err(GeocodeError::NoLocationsToWrite));
        assert!(!args.output_file.exists());
    }

    #[test]
    fn test_run_with_provider_missing_input() {
        let dir = TempDir::new().unwrap();
        let args = args_for(dir.path(), "sync");

        let result = run_with_provider(&args, Arc::new(FakeProvider::new()));
        assert!(matches!(result, Err(GeocodeError::FileNotFound { .. })));
    }
}

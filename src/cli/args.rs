use crate::provider::autonavi::DEFAULT_API_ROOT;
use crate::provider::AutoNaviConfig;
use crate::strategy::DispatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Convert location ids into coordinates via a geocoding web service
#[derive(Parser, Debug)]
#[command(name = "coordinates-engine")]
#[command(about = "Convert location ids into coordinates via a geocoding web service", long_about = None)]
pub struct CliArgs {
    /// Input file with one location id per line
    #[arg(short = 'i', long = "input", value_name = "INPUT", help = "Input location ids file path")]
    pub input_file: PathBuf,

    /// Output CSV file for the geocoded locations
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", help = "Output coordinates file path")]
    pub output_file: PathBuf,

    /// Address store CSV file (id,displayName,plainAddress,cityName)
    #[arg(short = 's', long = "store", value_name = "STORE", help = "Address store CSV file path")]
    pub store_file: PathBuf,

    /// AutoNavi REST API key
    #[arg(long = "api-key", env = "AMAP_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// AutoNavi geocoding endpoint
    #[arg(long = "api-root", env = "AMAP_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Timeout in seconds for each whole provider request
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Dispatch strategy for provider calls
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Dispatch strategy: 'sync' for sequential or 'async' for concurrent"
    )]
    pub strategy: StrategyType,

    /// Maximum number of concurrent provider calls (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of provider calls in flight (default: CPU cores)"
    )]
    pub max_concurrent: Option<usize>,
}

/// Available dispatch strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a DispatchConfig from CLI arguments, or defaults
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        match self.max_concurrent {
            Some(max_concurrent) => DispatchConfig::new(max_concurrent),
            None => DispatchConfig::default(),
        }
    }

    /// Create the AutoNavi provider configuration from CLI arguments
    pub fn to_provider_config(&self) -> AutoNaviConfig {
        AutoNaviConfig::new(self.api_key.clone())
            .with_api_root(self.api_root.clone())
            .with_read_timeout(Duration::from_secs(self.timeout_secs))
    }
}

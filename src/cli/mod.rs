// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, StrategyType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Unlike `CliArgs::parse`, errors are returned to the caller so it can
/// choose the exit code. Help and version requests also come back as errors
/// (of kind `DisplayHelp` / `DisplayVersion`).
pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

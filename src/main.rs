//! Coordinates Engine CLI
//!
//! Command-line interface for converting location ids into coordinates.
//!
//! # Usage
//!
//! ```bash
//! AMAP_API_KEY=... cargo run -- -i ids.txt -s store.csv -o coordinates.csv
//! cargo run -- --strategy async --max-concurrent 8 -i ids.txt -s store.csv -o coordinates.csv
//! ```
//!
//! The API key may also be put in a `.env` file. Log verbosity is controlled
//! with `RUST_LOG` (default `info`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad arguments, unreadable input, nothing resolved, write failure)

use clap::error::ErrorKind;
use coordinates_engine::{app, cli};
use std::process;

const ERROR_EXIT_CODE: i32 = 1;

fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(ERROR_EXIT_CODE);
        }
    };

    if let Err(e) = app::run(&args) {
        eprintln!("Error: {}", e);
        process::exit(ERROR_EXIT_CODE);
    }
}

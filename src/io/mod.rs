//! I/O module
//!
//! Handles the input and output files of a run.
//!
//! # Components
//!
//! - `id_reader` - Location id input file (one id per line)
//! - `store_reader` - Address store CSV loader
//! - `csv_format` - Geocoded location output format (write and read back)

pub mod csv_format;
pub mod id_reader;
pub mod store_reader;

pub use csv_format::{read_locations_csv, write_locations_csv, write_locations_file, CsvLocationRow};
pub use id_reader::{parse_location_ids, read_location_ids};
pub use store_reader::{load_address_store, read_address_store};

//! CSV format handling for geocoded location output
//!
//! This module centralizes the result file format:
//! - Header `locationId,locationName,addressName,cityName,longitude,latitude`
//! - CRLF record terminator
//! - One row per geocoded location, in emission order
//!
//! Floats are written with Rust's shortest round-trip `Display`, so reading
//! a file back yields the exact values that were written.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use serde::Deserialize;

use crate::types::{Coordinates, GeocodeError, GeocodeLocation, LocationId};

/// Output column names, in order
pub const OUTPUT_HEADER: [&str; 6] = [
    "locationId",
    "locationName",
    "addressName",
    "cityName",
    "longitude",
    "latitude",
];

/// One row of the output file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsvLocationRow {
    pub location_id: LocationId,
    pub location_name: String,
    pub address_name: String,
    pub city_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl TryFrom<CsvLocationRow> for GeocodeLocation {
    type Error = GeocodeError;

    fn try_from(row: CsvLocationRow) -> Result<Self, Self::Error> {
        Ok(GeocodeLocation::builder(row.location_id)?
            .location_name(row.location_name)
            .address_name(row.address_name)
            .city_name(row.city_name)
            .coordinates(Coordinates::new(row.longitude, row.latitude))
            .build())
    }
}

/// Write locations in CSV format
///
/// Writes the header followed by one row per location, in the order given.
/// An empty slice produces a header-only document; use
/// [`write_locations_file`] to refuse that case.
pub fn write_locations_csv(
    locations: &[GeocodeLocation],
    output: &mut dyn Write,
) -> Result<(), GeocodeError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(output);

    writer.write_record(OUTPUT_HEADER)?;

    for location in locations {
        writer.write_record(&[
            location.id().to_string(),
            location.location_name().to_string(),
            location.address_name().to_string(),
            location.city_name().to_string(),
            location.longitude().to_string(),
            location.latitude().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write locations to the output file at `path`
///
/// # Errors
///
/// - `BlankOutputPath` if `path` is empty or whitespace
/// - `NoLocationsToWrite` if `locations` is empty
/// - `FileNotFound` / `IoError` if the file cannot be created or written
///
/// The first two checks happen before the file is created, so a failed
/// call never leaves a header-only file behind.
pub fn write_locations_file(path: &Path, locations: &[GeocodeLocation]) -> Result<(), GeocodeError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(GeocodeError::BlankOutputPath);
    }
    if locations.is_empty() {
        return Err(GeocodeError::NoLocationsToWrite);
    }

    let file = File::create(path).map_err(|e| GeocodeError::from_io(e, path))?;
    let mut writer = BufWriter::new(file);
    write_locations_csv(locations, &mut writer)?;
    writer.flush().map_err(|e| GeocodeError::from_io(e, path))?;

    log::info!(
        "Wrote {} locations to '{}'",
        locations.len(),
        path.display()
    );
    Ok(())
}

/// Read a previously written output document back into locations
///
/// Unlike the input readers this is strict: any malformed row is an error.
pub fn read_locations_csv<R: Read>(source: R) -> Result<Vec<GeocodeLocation>, GeocodeError> {
    let mut reader = ReaderBuilder::new().from_reader(source);

    reader
        .deserialize::<CsvLocationRow>()
        .map(|row| GeocodeLocation::try_from(row?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn location(id: LocationId, name: &str, lon: f64, lat: f64) -> GeocodeLocation {
        GeocodeLocation::builder(id)
            .unwrap()
            .location_name(name)
            .address_name(format!("{name} Road"))
            .city_name("Xiamen")
            .coordinates(Coordinates::new(lon, lat))
            .build()
    }

    fn render(locations: &[GeocodeLocation]) -> String {
        let mut output = Vec::new();
        write_locations_csv(locations, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::single(
        vec![location(101, "Library", 118.07, 24.44)],
        "locationId,locationName,addressName,cityName,longitude,latitude\r\n\
         101,Library,Library Road,Xiamen,118.07,24.44\r\n"
    )]
    #[case::keeps_emission_order(
        vec![location(3, "C", 1.5, 2.5), location(1, "A", -73.98, 40.75)],
        "locationId,locationName,addressName,cityName,longitude,latitude\r\n\
         3,C,C Road,Xiamen,1.5,2.5\r\n\
         1,A,A Road,Xiamen,-73.98,40.75\r\n"
    )]
    #[case::quotes_delimiters(
        vec![location(5, "Cafe, Bar", 0.0, 0.0)],
        "locationId,locationName,addressName,cityName,longitude,latitude\r\n\
         5,\"Cafe, Bar\",\"Cafe, Bar Road\",Xiamen,0,0\r\n"
    )]
    #[case::empty(
        vec![],
        "locationId,locationName,addressName,cityName,longitude,latitude\r\n"
    )]
    fn test_write_locations_csv(#[case] locations: Vec<GeocodeLocation>, #[case] expected: &str) {
        assert_eq!(render(&locations), expected);
    }

    #[test]
    fn test_longitude_and_latitude_columns() {
        let output = render(&[location(101, "X", 118.07, 24.44)]);
        let row = output.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[4], "118.07");
        assert_eq!(fields[5], "24.44");
    }

    #[test]
    fn test_write_then_read_reproduces_fields() {
        let written = vec![
            location(101, "厦门大学", 118.070260, 24.444943),
            location(7, "Cafe, \"Bar\"", -0.1, 51.5),
            location(42, "Tiny", 1e-7, 123456.789),
        ];
        let output = render(&written);

        let read = read_locations_csv(output.as_bytes()).unwrap();
        assert_eq!(read.len(), written.len());
        for (a, b) in written.iter().zip(read.iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.location_name(), b.location_name());
            assert_eq!(a.address_name(), b.address_name());
            assert_eq!(a.city_name(), b.city_name());
            assert_eq!(a.longitude(), b.longitude());
            assert_eq!(a.latitude(), b.latitude());
        }
    }

    #[test]
    fn test_read_rejects_non_positive_id() {
        let content = "locationId,locationName,addressName,cityName,longitude,latitude\r\n\
                       0,A,B,C,1,2\r\n";
        let result = read_locations_csv(content.as_bytes());
        assert!(matches!(result, Err(GeocodeError::InvalidArgument { .. })));
    }

    #[test]
    fn test_write_file_success() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.csv");

        write_locations_file(&path, &[location(1, "A", 1.0, 2.0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("locationId,"));
        assert!(content.ends_with("1,A,A Road,Xiamen,1,2\r\n"));
    }

    #[test]
    fn test_write_file_refuses_empty_locations() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.csv");

        let result = write_locations_file(&path, &[]);
        assert_eq!(result, Err(GeocodeError::NoLocationsToWrite));
        assert!(!path.exists());
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn test_write_file_refuses_blank_path(#[case] path: &str) {
        let result = write_locations_file(Path::new(path), &[location(1, "A", 1.0, 2.0)]);
        assert_eq!(result, Err(GeocodeError::BlankOutputPath));
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("out.csv");

        let result = write_locations_file(&path, &[location(1, "A", 1.0, 2.0)]);
        assert!(matches!(result, Err(GeocodeError::FileNotFound { .. })));
    }
}

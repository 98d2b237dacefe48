//! Location identifier reader
//!
//! Reads the input file: UTF-8 text, one integer id per line.
//!
//! # Format Rules
//!
//! - A leading byte-order mark is stripped
//! - Blank lines are skipped
//! - Lines starting with `#` are comments and skipped
//! - Remaining lines are trimmed and parsed as integers
//!
//! Malformed lines and non-positive ids both take the same path: a warning
//! with the line number, and the line is skipped. Neither aborts the read.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::types::{GeocodeError, LocationId};

const BOM: char = '\u{FEFF}';
const COMMENT_PREFIX: char = '#';

/// Read the set of valid location ids from `path`
///
/// # Errors
///
/// Returns `FileNotFound` or `IoError` if the file cannot be read (including
/// invalid UTF-8). Bad individual lines are never an error.
pub fn read_location_ids(path: &Path) -> Result<BTreeSet<LocationId>, GeocodeError> {
    let content = fs::read_to_string(path).map_err(|e| GeocodeError::from_io(e, path))?;
    Ok(parse_location_ids(&content))
}

/// Parse location ids from file content
pub fn parse_location_ids(content: &str) -> BTreeSet<LocationId> {
    let mut ids = BTreeSet::new();

    for (index, raw) in content.lines().enumerate() {
        let line_num = index as u64 + 1;
        match parse_line(raw) {
            Ok(Some(id)) => {
                ids.insert(id);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Skipping invalid location id: {}", with_line(e, line_num)),
        }
    }

    ids
}

/// Parse one line: `Ok(None)` for blank or comment lines
fn parse_line(raw: &str) -> Result<Option<LocationId>, GeocodeError> {
    let line = raw.trim_start_matches(BOM).trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let id = line
        .parse::<LocationId>()
        .map_err(|e| GeocodeError::ParseError {
            line: None,
            message: format!("'{}': {}", line, e),
        })?;

    if id <= 0 {
        return Err(GeocodeError::ParseError {
            line: None,
            message: format!("'{}': location id must be positive", line),
        });
    }

    Ok(Some(id))
}

fn with_line(error: GeocodeError, line_num: u64) -> GeocodeError {
    match error {
        GeocodeError::ParseError { message, .. } => GeocodeError::parse_error(line_num, &message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ids(values: &[LocationId]) -> BTreeSet<LocationId> {
        values.iter().copied().collect()
    }

    #[rstest]
    #[case::simple("1\n2\n3\n", &[1, 2, 3])]
    #[case::comments_and_blanks("101\n202\n#comment\n\n303", &[101, 202, 303])]
    #[case::bom("\u{FEFF}42\n43\n", &[42, 43])]
    #[case::bom_before_comment("\u{FEFF}#header\n7\n", &[7])]
    #[case::whitespace("  5  \n\t6\t\n   \n", &[5, 6])]
    #[case::crlf("8\r\n9\r\n", &[8, 9])]
    #[case::duplicates("3\n3\n1\n3\n", &[1, 3])]
    #[case::malformed_skipped("1\nabc\n2.5\n3\n", &[1, 3])]
    #[case::non_positive_skipped("0\n-1\n-42\n4\n", &[4])]
    #[case::empty("", &[])]
    #[case::only_comments("# a\n# b\n", &[])]
    fn test_parse_location_ids(#[case] content: &str, #[case] expected: &[LocationId]) {
        assert_eq!(parse_location_ids(content), ids(expected));
    }

    #[rstest]
    #[case::blank("   ", None)]
    #[case::comment("# 12", None)]
    #[case::valid(" 12 ", Some(12))]
    fn test_parse_line_ok(#[case] line: &str, #[case] expected: Option<LocationId>) {
        assert_eq!(parse_line(line).unwrap(), expected);
    }

    #[rstest]
    #[case::text("abc")]
    #[case::zero("0")]
    #[case::negative("-7")]
    #[case::overflow("99999999999999999999")]
    fn test_parse_line_invalid(#[case] line: &str) {
        assert!(matches!(
            parse_line(line),
            Err(GeocodeError::ParseError { .. })
        ));
    }

    #[test]
    fn test_with_line_attaches_line_number() {
        let error = parse_line("abc").unwrap_err();
        match with_line(error, 9) {
            GeocodeError::ParseError { line, .. } => assert_eq!(line, Some(9)),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_location_ids_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all("\u{FEFF}101\n202\n#comment\n\n303".as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let result = read_location_ids(file.path()).unwrap();
        assert_eq!(result, ids(&[101, 202, 303]));
    }

    #[test]
    fn test_read_location_ids_missing_file() {
        let result = read_location_ids(Path::new("nonexistent_ids.txt"));
        assert_eq!(
            result,
            Err(GeocodeError::file_not_found("nonexistent_ids.txt"))
        );
    }

    #[test]
    fn test_read_location_ids_invalid_utf8() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&[0x31, 0x0a, 0xff, 0xfe, 0x0a])
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let result = read_location_ids(file.path());
        assert!(matches!(result, Err(GeocodeError::IoError { .. })));
    }
}

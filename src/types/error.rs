//! Error types for the Coordinates Engine
//!
//! This module defines all error types that can occur while converting
//! location identifiers into coordinates. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, unreadable input, empty resolved set
//! - **Parse Errors**: Malformed identifier lines or store rows
//! - **Provider Errors**: Network failures, bad status, malformed responses
//! - **Output Errors**: Blank output path, nothing to write, write failures
//! - **Validation Errors**: Non-positive location ids

use thiserror::Error;

use super::address::LocationId;

/// Main error type for the coordinates engine
///
/// Only input-stage and output-stage variants are fatal to a run. Provider
/// variants are produced per record and are logged and dropped by the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// A value violated a construction precondition
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition
        message: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Parsing error in an input file
    ///
    /// This is a recoverable error: the offending line is skipped.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Network-level failure talking to the geocoding provider
    #[error("HTTP error: {message}")]
    Http {
        /// Description of the transport failure
        message: String,
    },

    /// Provider answered but reported a failure
    #[error("{provider} rejected the request: {message}")]
    ProviderRejected {
        /// Provider name
        provider: String,
        /// Message or status returned by the provider
        message: String,
    },

    /// Provider response could not be decoded
    #[error("Malformed provider response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure
        message: String,
    },

    /// Provider response contained no geocode results
    #[error("No geocode results for location {id}")]
    NoGeocodes {
        /// Location id being geocoded
        id: LocationId,
    },

    /// Coordinate string did not split into a longitude/latitude pair
    #[error("Malformed coordinate pair '{value}'")]
    MalformedCoordinates {
        /// The raw coordinate string
        value: String,
    },

    /// No location could be resolved from the input identifiers
    #[error("Empty or invalid locations retrieved from {path}, please check")]
    EmptyLocations {
        /// The input file the identifiers came from
        path: String,
    },

    /// Output path is empty or whitespace
    #[error("Empty output file path, failed to write file")]
    BlankOutputPath,

    /// No geocoded locations to write
    #[error("Empty location list, failed to write file")]
    NoLocationsToWrite,

    /// Async runtime could not be started
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for GeocodeError {
    fn from(error: std::io::Error) -> Self {
        GeocodeError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for GeocodeError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        GeocodeError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(error: reqwest::Error) -> Self {
        GeocodeError::Http {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(error: serde_json::Error) -> Self {
        GeocodeError::MalformedResponse {
            message: error.to_string(),
        }
    }
}

impl GeocodeError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: &str) -> Self {
        GeocodeError::InvalidArgument {
            message: message.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        GeocodeError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError for a given line
    pub fn parse_error(line: u64, message: &str) -> Self {
        GeocodeError::ParseError {
            line: Some(line),
            message: message.to_string(),
        }
    }

    /// Create a ProviderRejected error
    pub fn provider_rejected(provider: &str, message: &str) -> Self {
        GeocodeError::ProviderRejected {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a MalformedResponse error
    pub fn malformed_response(message: &str) -> Self {
        GeocodeError::MalformedResponse {
            message: message.to_string(),
        }
    }

    /// Create a MalformedCoordinates error
    pub fn malformed_coordinates(value: &str) -> Self {
        GeocodeError::MalformedCoordinates {
            value: value.to_string(),
        }
    }

    /// Create an EmptyLocations error
    pub fn empty_locations(path: &str) -> Self {
        GeocodeError::EmptyLocations {
            path: path.to_string(),
        }
    }

    /// Map an I/O error on `path` to FileNotFound or IoError
    pub fn from_io(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            GeocodeError::file_not_found(&path.display().to_string())
        } else {
            GeocodeError::IoError {
                message: format!("'{}': {}", path.display(), error),
            }
        }
    }
}

//! AutoNavi (amap.com) geocoding provider
//!
//! Wire contract: `GET {api_root}?key=..&city=..&address=..` returning
//! `{ "status": "1", "geocodes": [ { "location": "<lon>,<lat>", ... } ] }`.
//! Only the first geocode entry is used. The provider's coordinate string
//! is longitude first, latitude second.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;

use super::GeocodeProvider;
use crate::types::{AddressRecord, Coordinates, GeocodeError, LocationId};

pub const DEFAULT_API_ROOT: &str = "http://restapi.amap.com/v3/geocode/geo";
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

const PROVIDER_NAME: &str = "AutoNavi";
const STATUS_FAILED: &str = "0";

/// Connection settings for the AutoNavi geocoding API
#[derive(Debug, Clone, PartialEq)]
pub struct AutoNaviConfig {
    pub api_root: String,
    pub api_key: String,
    /// Upper bound on one whole exchange: connect, send and read the body.
    /// A slow response is cut off at this point even when bytes are still
    /// arriving.
    pub read_timeout: Duration,
}

impl AutoNaviConfig {
    /// Config with the default API root and a 10 second timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            api_key: api_key.into(),
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }
}

/// AutoNavi REST geocoder backed by a blocking HTTP client
#[derive(Debug, Clone)]
pub struct AutoNaviProvider {
    config: AutoNaviConfig,
    client: Client,
}

impl AutoNaviProvider {
    /// Build the provider and its HTTP client
    ///
    /// Must be called outside of an async runtime context.
    pub fn new(config: AutoNaviConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder().timeout(config.read_timeout).build()?;
        Ok(Self { config, client })
    }

    /// Query parameters for one address, in wire order
    fn query_params(&self, address: &AddressRecord) -> [(&'static str, String); 3] {
        [
            ("key", self.config.api_key.clone()),
            ("city", address.city_name.clone()),
            ("address", address.query_text()),
        ]
    }
}

impl GeocodeProvider for AutoNaviProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn geocode(&self, address: &AddressRecord) -> Result<Coordinates, GeocodeError> {
        let params = self.query_params(address);

        // The response owns the connection; it is released when dropped on
        // every return path below.
        let response = self
            .client
            .get(&self.config.api_root)
            .query(&params[..])
            .header(CACHE_CONTROL, "no-cache")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::provider_rejected(
                PROVIDER_NAME,
                &format!("HTTP status {}", status),
            ));
        }

        let body = response.text()?;
        parse_geocode_response(address.id, &body)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: Option<String>,
    info: Option<String>,
    geocodes: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    location: String,
}

/// Extract the first geocode's coordinates from a response body
pub fn parse_geocode_response(id: LocationId, body: &str) -> Result<Coordinates, GeocodeError> {
    let response: GeocodeResponse = serde_json::from_str(body)?;

    if response.status.as_deref() == Some(STATUS_FAILED) {
        let info = response.info.unwrap_or_else(|| "unknown error".to_string());
        return Err(GeocodeError::provider_rejected(PROVIDER_NAME, &info));
    }

    // Later entries are never decoded; AutoNavi fills absent fields with `[]`
    let first = response
        .geocodes
        .and_then(|geocodes| geocodes.into_iter().next())
        .ok_or(GeocodeError::NoGeocodes { id })?;
    let entry: GeocodeEntry = serde_json::from_value(first)
        .map_err(|e| GeocodeError::malformed_response(&format!("first geocode: {}", e)))?;

    parse_location_pair(&entry.location)
}

/// Parse a `"<lon>,<lat>"` string, e.g. `"118.070260,24.444943"`
pub fn parse_location_pair(value: &str) -> Result<Coordinates, GeocodeError> {
    let tokens: Vec<&str> = value.split(',').collect();
    let [lon, lat] = tokens.as_slice() else {
        return Err(GeocodeError::malformed_coordinates(value));
    };

    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::malformed_coordinates(value))?;
    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::malformed_coordinates(value))?;

    Ok(Coordinates::new(longitude, latitude))
}

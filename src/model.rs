//! Data types shared by the page behaviors: the coordinate pair read off the
//! event-detail map container and the race records returned by the server.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    /// The attribute is absent or empty.
    #[error("missing {0}")]
    Missing(&'static str),
    /// The attribute is present but not a decimal number.
    #[error("invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

/// A parsed latitude/longitude pair in WGS84 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a coordinate pair from the raw `data-latitude` /
    /// `data-longitude` attribute values. Parsing is checked: an absent or
    /// malformed value is reported instead of being handed to the map
    /// library as-is.
    pub fn from_attributes(
        lat: Option<String>,
        lng: Option<String>,
    ) -> Result<Self, CoordinateError> {
        Ok(Self {
            lat: parse_coordinate("data-latitude", lat)?,
            lng: parse_coordinate("data-longitude", lng)?,
        })
    }
}

fn parse_coordinate(field: &'static str, raw: Option<String>) -> Result<f64, CoordinateError> {
    let raw = raw
        .filter(|value| !value.is_empty())
        .ok_or(CoordinateError::Missing(field))?;
    let parsed = raw.trim().parse::<f64>();
    parsed.map_err(|_| CoordinateError::Invalid { field, value: raw })
}

/// One selectable race of an event, as served by the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Race {
    pub id: u64,
    pub name: String,
}

/// Wire shape of the `/get-races-for-event/{id}/` response body.
#[derive(Debug, Deserialize)]
pub struct RacesResponse {
    pub races: Vec<Race>,
}

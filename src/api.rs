//! Race lookup against the backend, kept separate from any DOM rendering.

use gloo_net::http::Request;
use thiserror::Error;

use crate::model::{Race, RacesResponse};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

/// Path of the race-list endpoint for one event.
pub fn races_url(event_id: &str) -> String {
    format!("/get-races-for-event/{event_id}/")
}

/// Fetches the races of the given event, in the order the server returns
/// them. Non-2xx responses and decode failures are reported as [`FetchError`]
/// rather than surfacing as unhandled rejections.
pub async fn fetch_races_for_event(event_id: &str) -> Result<Vec<Race>, FetchError> {
    let response = Request::get(&races_url(event_id)).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body: RacesResponse = response.json().await?;
    Ok(body.races)
}

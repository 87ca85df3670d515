//! REST API helpers for the campus pathfinding server.
//!
//! Every call is a plain `gloo-net` GET against a fixed local address.
//! Failures come back as [`ApiError`] values; callers surface them as one
//! alert dialog and abort the operation. No retries, no cancellation, no
//! request de-duplication.

use serde::de::DeserializeOwned;

use crate::net::types::{Buildings, PathResponse};

/// Base address of the pathfinding server.
pub const SERVER_BASE: &str = "http://localhost:4567";

/// Why a server request produced no usable data.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("expected 200, was {0}")]
    Status(u16),
    /// The request never completed (server unreachable, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),
    /// The body was not the JSON shape the client expects.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Fetch the building abbreviation → long name map.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-2xx, or
/// the body does not decode.
pub async fn fetch_buildings() -> Result<Buildings, ApiError> {
    get_json(&format!("{SERVER_BASE}/buildings")).await
}

/// Fetch the shortest path between two buildings, by abbreviation.
///
/// The server rejects unknown buildings and missing parameters with a 400;
/// that surfaces here as `ApiError::Status(400)`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-2xx, or
/// the body does not decode.
pub async fn fetch_path(start: &str, dest: &str) -> Result<PathResponse, ApiError> {
    get_json(&format!("{SERVER_BASE}/path?start={start}&dest={dest}")).await
}

/// Fetch the emailable text directions between two buildings. The payload
/// is a JSON-encoded string, forwarded verbatim into the email template.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-2xx, or
/// the body does not decode.
pub async fn fetch_directions(start: &str, dest: &str) -> Result<String, ApiError> {
    get_json(&format!("{SERVER_BASE}/email-directions?start={start}&dest={dest}")).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

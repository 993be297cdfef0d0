//! dog.ceo API client
//!
//! This module provides a `BreedSource` backed by the public dog.ceo REST API.
//! All failures, including transport and parse errors, are reported as
//! `BreedNotFound` so callers only ever handle a single error kind.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{normalize_breed_name, BreedNotFound, BreedSource, SubBreeds};

/// Base URL for the dog.ceo API
pub const DOG_API_BASE_URL: &str = "https://dog.ceo";

/// Status value the API reports on success
const SUCCESS_STATUS: &str = "success";

/// Marker text the API uses in its error message for unknown breeds
const BREED_NOT_FOUND_MARKER: &str = "breed not found";

/// Raw response envelope from the dog.ceo API
///
/// Fields are kept as loose JSON values because the API reuses `message`
/// for both the sub-breed array and the error text.
#[derive(Debug, Deserialize)]
struct DogApiResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    code: Value,
}

/// Client for fetching sub-breeds from the dog.ceo API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DogApiClient {
    /// Create a new DogApiClient pointing at the public API
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DOG_API_BASE_URL.to_string(),
        }
    }

    /// Create a new DogApiClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DOG_API_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (e.g. a mirror or a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the sub-breed list URL for an already normalized breed name
    fn list_url(&self, normalized: &str) -> String {
        format!(
            "{}/api/breed/{}/list",
            self.base_url.trim_end_matches('/'),
            normalized
        )
    }
}

#[async_trait]
impl BreedSource for DogApiClient {
    /// Fetch the sub-breeds for `breed` from the API
    ///
    /// The breed is normalized before it is placed in the URL. Failures
    /// carry the breed exactly as given, or the API's own error text.
    async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedNotFound> {
        let normalized = normalize_breed_name(breed)
            .ok_or_else(|| BreedNotFound::new("breed is null or blank"))?;
        let url = self.list_url(&normalized);
        debug!(%url, "requesting sub-breeds");

        let response = self.client.get(&url).send().await.map_err(|e| {
            debug!(error = %e, breed, "sub-breed request failed");
            BreedNotFound::new(breed)
        })?;
        let http_status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            debug!(error = %e, breed, "failed to read sub-breed response body");
            BreedNotFound::new(breed)
        })?;

        parse_response(breed, http_status, &body)
    }
}

/// Interpret a dog.ceo response body
///
/// # Arguments
/// * `breed` - The breed as the caller supplied it, used for error messages
/// * `http_status` - HTTP status code, used when the body carries no `code`
/// * `body` - Raw response text
fn parse_response(breed: &str, http_status: u16, body: &str) -> Result<SubBreeds, BreedNotFound> {
    let malformed = |reason: &dyn std::fmt::Display| {
        debug!(error = %reason, breed, "malformed sub-breed response");
        BreedNotFound::new(breed)
    };
    let value: Value = serde_json::from_str(body).map_err(|e| malformed(&e))?;
    // Only a JSON object is a valid envelope; arrays must not fill fields by position
    if !value.is_object() {
        return Err(malformed(&"response body is not a JSON object"));
    }
    let response: DogApiResponse = serde_json::from_value(value).map_err(|e| malformed(&e))?;

    if opt_string(&response.status).eq_ignore_ascii_case(SUCCESS_STATUS) {
        let Value::Array(items) = response.message else {
            return Err(BreedNotFound::new(breed));
        };
        return Ok(items.iter().map(opt_string).collect());
    }

    let message = opt_string(&response.message);
    let code = opt_int(&response.code).unwrap_or(i64::from(http_status));
    debug!(code, %message, breed, "sub-breed lookup rejected");

    if code == 404 || message.to_lowercase().contains(BREED_NOT_FOUND_MARKER) {
        Err(BreedNotFound::new(message))
    } else {
        Err(BreedNotFound::new(format!("HTTP {}: {}", code, message)))
    }
}

/// Lenient string view of a JSON value; `null` and missing become empty
fn opt_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lenient integer view of a JSON value; numeric strings are accepted
fn opt_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

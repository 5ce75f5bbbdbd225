//! HTTP helper functions for Crux Core
//!
//! Every device endpoint answers with a JSON document that may carry
//! `success: false` and a `message`. This module turns that convention into a
//! tagged `Result<T, ApiError>` once, at the network boundary, so handlers never
//! look at raw bodies.

use crux_http::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::ApiError;

/// Base URL for device API endpoints.
///
/// NOTE: `crux_http` requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase`). Shells strip this prefix: the browser shell
/// sends the remainder relative to the page origin, the native shell appends it
/// to `DEVICE_URL`.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use device_panel_core::http_helpers::build_url;
/// let url = build_url("/api/v1/status");
/// assert_eq!(url, "https://relative/api/v1/status");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Constructs the full address of an endpoint with a single query parameter.
///
/// # Example
/// ```
/// use device_panel_core::http_helpers::build_query_url;
/// let url = build_query_url("/api/v1/nrf24/scan", "duration", 10);
/// assert_eq!(url, "https://relative/api/v1/nrf24/scan?duration=10");
/// ```
pub fn build_query_url(endpoint: &str, key: &str, value: impl std::fmt::Display) -> String {
    let value = value.to_string();
    format!(
        "{}?{}={}",
        build_url(endpoint),
        urlencoding::encode(key),
        urlencoding::encode(&value)
    )
}

/// JavaScript truthiness of a decoded payload
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parse a body into JSON. A missing or blank body decodes to `null`.
fn parse_payload(body: Option<&[u8]>) -> Result<Value, ApiError> {
    match body {
        Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => serde_json::from_slice(bytes)
            .map_err(|e| ApiError::Malformed(format!("Invalid JSON response: {e}"))),
        _ => Ok(Value::Null),
    }
}

fn explicit_failure(value: &Value) -> bool {
    value.get("success") == Some(&Value::Bool(false))
}

fn failure_message(value: &Value) -> Option<&str> {
    value.get("message").and_then(Value::as_str)
}

fn into_payload<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Malformed(format!("Invalid JSON response: {e}")))
}

/// Decode a response body following the device convention.
///
/// An absent payload or `success: false` is a failure carrying the payload's
/// `message` (or the generic fallback); anything else is deserialized into `T`.
pub fn decode_api_response<T: DeserializeOwned>(body: Option<&[u8]>) -> Result<T, ApiError> {
    let value = parse_payload(body)?;

    if value.is_null() {
        return Err(ApiError::rejected(None));
    }
    if explicit_failure(&value) {
        return Err(ApiError::rejected(failure_message(&value)));
    }

    into_payload(value)
}

/// Decode a report body whose success flag is interpreted by its formatter.
///
/// Only an empty or falsy payload is an error here. A `success: false` that
/// comes with a `message` is still surfaced as a rejection so the server's
/// explanation reaches the user.
pub fn decode_report_response<T: DeserializeOwned>(body: Option<&[u8]>) -> Result<T, ApiError> {
    let value = parse_payload(body)?;

    if is_falsy(&value) {
        return Err(ApiError::Empty);
    }
    if explicit_failure(&value) {
        if let Some(message) = failure_message(&value) {
            return Err(ApiError::Rejected(message.to_string()));
        }
    }

    into_payload(value)
}

/// Map a transport error to the failure side of the tagged outcome
pub fn map_http_error(error: impl std::fmt::Display) -> ApiError {
    log::warn!("request failed: {error}");
    ApiError::Transport(error.to_string())
}

fn take_body(response: &mut Response<Vec<u8>>) -> Option<Vec<u8>> {
    // The device reports failures in the body; the status code is informative only.
    if !response.status().is_success() {
        log::debug!("device answered HTTP {}", response.status());
    }
    response.take_body()
}

/// Process HTTP response result with [`decode_api_response`]
pub fn process_api_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiError> {
    match result {
        Ok(mut response) => decode_api_response(take_body(&mut response).as_deref()),
        Err(e) => Err(map_http_error(e)),
    }
}

/// Process HTTP response result with [`decode_report_response`]
pub fn process_report_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiError> {
    match result {
        Ok(mut response) => decode_report_response(take_body(&mut response).as_deref()),
        Err(e) => Err(map_http_error(e)),
    }
}

//! HTTP helpers for the JSON verification API. The feature client goes
//! through here so request setup and error mapping live in one place.
//! Requests are plain JSON `POST`s; no cookies or auth headers are attached,
//! and requests run to completion without a client-side timeout.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON to the configured API and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = join_url(&AppConfig::load().api_base_url, path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = request
        .send()
        .await
        .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: truncate_error_body(&body),
        })
    }
}

/// Joins the configured base URL and a request path, tolerating stray
/// slashes on either side.
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Trims and truncates HTTP error bodies before they reach the UI.
fn truncate_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

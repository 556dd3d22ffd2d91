//! Optional API-key authentication.

use axum::http::HeaderMap;
use docext_core::ServiceConfig;

use crate::types::ApiError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Check the `X-API-Key` header against the configured key.
///
/// A no-op when no key is configured. `/health` is never routed through
/// this check.
pub fn require_api_key(config: &ServiceConfig, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = config.api_key.as_deref() else {
        return Ok(());
    };

    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(()),
        _ => Err(ApiError::unauthorized()),
    }
}

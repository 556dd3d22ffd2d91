//! API response types and the error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docext_core::InvoiceRecord;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, always "healthy" when the handler runs.
    pub status: String,
    /// RFC3339 UTC timestamp.
    pub timestamp: String,
    /// Whether the converter is initialized.
    pub converter_ready: bool,
}

/// Response envelope for the conversion endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub success: bool,
    /// Server-assigned document identifier.
    pub document_id: String,
    /// Output format: "markdown" or "json".
    pub format: String,
    /// Format-specific payload.
    pub content: serde_json::Value,
    /// Conversion wall time in seconds.
    pub processing_time: f64,
    pub page_count: u32,
}

/// Response for the invoice extraction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub success: bool,
    pub invoice_data: InvoiceRecord,
    /// Length of the extracted document text, in bytes.
    pub document_text_length: usize,
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Service error mapped onto an HTTP status and a sanitized JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "bad request".to_string(),
            detail: detail.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: "unauthorized".to_string(),
            detail: "invalid or missing API key".to_string(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "internal error".to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.error,
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_statuses() {
        assert_eq!(ApiError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized().status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::internal("y").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_conversion_response_shape() {
        let response = ConversionResponse {
            success: true,
            document_id: "abc".to_string(),
            format: "markdown".to_string(),
            content: serde_json::json!({"markdown": "# Hi"}),
            processing_time: 0.25,
            page_count: 3,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["format"], "markdown");
        assert_eq!(json["content"]["markdown"], "# Hi");
        assert_eq!(json["page_count"], 3);
    }
}

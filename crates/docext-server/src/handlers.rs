//! HTTP request handlers.

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::Json;
use docext_core::{ConvertedDocument, InvoiceExtractor, RuleInvoiceExtractor};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::require_api_key;
use crate::types::{ApiError, ConversionResponse, HealthResponse, InvoiceResponse};
use crate::ApiState;

/// Root endpoint with service information. Never authenticated.
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "docext PDF processing API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "convert_markdown": "/convert/markdown",
            "convert_json": "/convert/json",
            "extract_invoice": "/extract/invoice",
        },
    }))
}

/// Health check endpoint. Never authenticated.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        converter_ready: true,
    })
}

/// Convert an uploaded PDF to Markdown.
pub async fn convert_markdown(
    State(state): State<ApiState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<ConversionResponse>, ApiError> {
    require_api_key(&state.config, &headers)?;

    let (document, processing_time) = convert_upload(&state, &mut multipart).await?;
    let markdown = document.to_markdown();

    info!(
        "markdown conversion done: {} pages in {:.2}s",
        document.page_count, processing_time
    );

    Ok(Json(ConversionResponse {
        success: true,
        document_id: Uuid::new_v4().to_string(),
        format: "markdown".to_string(),
        content: serde_json::json!({ "markdown": markdown }),
        processing_time,
        page_count: document.page_count,
    }))
}

/// Convert an uploaded PDF to structured JSON.
pub async fn convert_json(
    State(state): State<ApiState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<ConversionResponse>, ApiError> {
    require_api_key(&state.config, &headers)?;

    let (document, processing_time) = convert_upload(&state, &mut multipart).await?;

    info!(
        "json conversion done: {} pages in {:.2}s",
        document.page_count, processing_time
    );

    Ok(Json(ConversionResponse {
        success: true,
        document_id: Uuid::new_v4().to_string(),
        format: "json".to_string(),
        content: document.to_json(),
        processing_time,
        page_count: document.page_count,
    }))
}

/// Extract invoice fields from an uploaded PDF.
pub async fn extract_invoice(
    State(state): State<ApiState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<InvoiceResponse>, ApiError> {
    require_api_key(&state.config, &headers)?;

    let (document, _) = convert_upload(&state, &mut multipart).await?;
    let text_length = document.text.len();

    // Extraction is infallible: missing fields come back empty.
    let invoice_data = RuleInvoiceExtractor::new().extract(&document.text);

    info!(
        "invoice extraction done: {} chars, {} line items",
        text_length,
        invoice_data.line_items.len()
    );

    Ok(Json(InvoiceResponse {
        success: true,
        invoice_data,
        document_text_length: text_length,
    }))
}

/// Save the upload, run the conversion off the async runtime, and return
/// the document with the measured conversion time in seconds.
///
/// The temp file is removed asynchronously when conversion finishes; on
/// error paths the upload guard's `Drop` removes it instead.
async fn convert_upload(
    state: &ApiState,
    multipart: &mut Multipart,
) -> Result<(ConvertedDocument, f64), ApiError> {
    let upload = crate::upload::save_upload(multipart, &state.config).await?;

    let start = Instant::now();
    let converter = state.converter.clone();
    let path = upload.path().to_path_buf();

    let result = tokio::task::spawn_blocking(move || converter.convert(&path))
        .await
        .map_err(|e| {
            error!("conversion task panicked: {e}");
            ApiError::internal("conversion task failed")
        })?;

    let elapsed = start.elapsed().as_secs_f64();
    upload.cleanup().await;

    let document = result.map_err(|e| {
        error!("conversion failed: {e}");
        ApiError::internal(format!("conversion failed: {e}"))
    })?;

    Ok((document, elapsed))
}

//! Upload handling: validation, scoped temp paths, guaranteed cleanup.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use docext_core::models::config::ALLOWED_EXTENSION;
use docext_core::ServiceConfig;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::types::ApiError;

/// An uploaded file written to a unique path under the upload directory.
///
/// Callers remove the file with [`cleanup`](Self::cleanup), which does not
/// block the runtime. `Drop` covers early-return paths, and the retention
/// sweeper catches files orphaned by an unclean shutdown.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file via tokio's filesystem API instead of the
    /// synchronous removal in `Drop`.
    pub async fn cleanup(mut self) {
        let path = std::mem::take(&mut self.path);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to delete upload {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to delete upload {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Read the `file` part of a multipart request and persist it.
///
/// Rejects a missing file part, a non-PDF filename or content type, and
/// payloads over the configured size limit — all before the conversion
/// pipeline is ever invoked. A failed write leaves no partial file behind.
pub async fn save_upload(
    multipart: &mut Multipart,
    config: &ServiceConfig,
) -> Result<TempUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let extension = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if extension != ALLOWED_EXTENSION {
            return Err(ApiError::bad_request(format!(
                "invalid file type '.{extension}', only .{ALLOWED_EXTENSION} is accepted"
            )));
        }

        if let Some(content_type) = field.content_type() {
            if content_type != "application/pdf" && content_type != "application/octet-stream" {
                return Err(ApiError::bad_request(format!(
                    "unsupported content type '{content_type}'"
                )));
            }
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;

        if data.len() > config.max_file_size {
            return Err(ApiError::bad_request(format!(
                "file too large: {} bytes, max {} bytes",
                data.len(),
                config.max_file_size
            )));
        }

        let path = config
            .upload_dir
            .join(format!("{}.{ALLOWED_EXTENSION}", Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&path, &data).await {
            // No partial file may survive a failed write.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(ApiError::internal(format!("failed to save upload: {e}")));
        }

        debug!("saved upload {} ({} bytes)", path.display(), data.len());
        return Ok(TempUpload { path });
    }

    Err(ApiError::bad_request("missing 'file' field"))
}

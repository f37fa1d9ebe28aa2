//! Streaming reader for `multipart/form-data` uploads.
//!
//! The body carries one `json` part with the metadata and any number of
//! `file` parts. Parts with other names are skipped. Bytes of both kinds are
//! buffered in memory and counted against the per-submission cap as they arrive.

use crate::contributions::submission::Attachment;
use crate::error::AppError;
use actix_multipart::Multipart;
use futures_util::StreamExt;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::from_slice;

pub struct UploadParts<T> {
    pub metadata: Option<T>,
    pub files: Vec<Attachment>,
}

pub async fn read_parts<T: DeserializeOwned>(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<UploadParts<T>, AppError> {
    let limit_mb = max_bytes.div_ceil(1024 * 1024);
    let mut metadata: Option<T> = None;
    let mut files = Vec::new();
    let mut total = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("json") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    total += chunk.len();
                    if total > max_bytes {
                        return Err(AppError::PayloadTooLarge { limit_mb });
                    }
                    bytes.extend_from_slice(&chunk);
                }
                let parsed = from_slice(&bytes)
                    .map_err(|e| AppError::BadRequest(format!("Invalid json part: {e}")))?;
                metadata = Some(parsed);
            }

            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                if filename.trim().is_empty() {
                    return Err(AppError::BadRequest("Every file part needs a filename".into()));
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    total += chunk.len();
                    if total > max_bytes {
                        return Err(AppError::PayloadTooLarge { limit_mb });
                    }
                    bytes.extend_from_slice(&chunk);
                }
                debug!("Received file part '{}' ({} bytes)", filename, bytes.len());
                files.push(Attachment { filename, bytes });
            }

            _ => {}
        }
    }

    Ok(UploadParts { metadata, files })
}

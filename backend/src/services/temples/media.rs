use crate::contributions::classifier::FILE_REQUIRED;
use crate::error::AppError;
use crate::services::download::file_response;
use crate::services::upload::read_parts;
use crate::state::AppState;
use crate::store::MediaDraft;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::location::LocationFix;
use common::requests::MediaRequest;
use common::responses::MediaReceipt;

pub async fn list(state: web::Data<AppState>, temple_id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let temple_id = temple_id.into_inner();
    let media = state.with_store(move |store| store.temple_media(temple_id)).await?;
    Ok(HttpResponse::Ok().json(media))
}

/// Handler for `POST /api/temples/{id}/media`.
///
/// # Returns
/// - `200 OK` with a `MediaReceipt`.
/// - `400 Bad Request` listing every problem: no `file` part, bad coordinates.
/// - `404 Not Found` when the temple does not exist; nothing is written.
pub async fn upload(
    state: web::Data<AppState>,
    temple_id: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let temple_id = temple_id.into_inner();
    let parts = read_parts::<MediaRequest>(payload, state.max_upload_bytes).await?;
    let request = parts.metadata.unwrap_or_default();

    let mut errors = Vec::new();
    if parts.files.is_empty() {
        errors.push(FILE_REQUIRED.to_string());
    }
    let location = request.location.into_fix().unwrap_or_else(|problems| {
        errors.extend(problems.iter().map(ToString::to_string));
        LocationFix::unset()
    });
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let draft = MediaDraft {
        description: request.description,
        location,
        contributor_name: request.contributor_name,
        files: parts.files,
    };

    let rows_written = state
        .with_store(move |store| store.add_temple_media(temple_id, &draft))
        .await?;

    Ok(HttpResponse::Ok().json(MediaReceipt {
        temple_id,
        rows_written,
        message: format!("Successfully uploaded {rows_written} file(s) for this temple!"),
    }))
}

pub async fn file(state: web::Data<AppState>, media_id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let media_id = media_id.into_inner();
    let file = state
        .with_store(move |store| store.media_file(media_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Media {media_id} does not exist")))?;
    Ok(file_response(file))
}

use crate::error::AppError;
use crate::services::download::file_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// Handler for `GET /api/contributions/{id}/file`.
pub async fn process(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let file = state
        .with_store(move |store| store.contribution_file(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contribution {id} does not exist")))?;
    Ok(file_response(file))
}

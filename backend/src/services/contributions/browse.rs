use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ContributionQuery;

/// Handler for `GET /api/contributions`. An empty store answers `[]`.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ContributionQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let views = state.with_store(move |store| store.browse(&query)).await?;
    Ok(HttpResponse::Ok().json(views))
}

pub async fn contributors(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let names = state.with_store(|store| store.contributors()).await?;
    Ok(HttpResponse::Ok().json(names))
}

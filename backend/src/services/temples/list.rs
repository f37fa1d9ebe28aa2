use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::TempleQuery;

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<TempleQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let temples = state.with_store(move |store| store.search_temples(&query)).await?;
    Ok(HttpResponse::Ok().json(temples))
}

pub async fn architecture_styles(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let styles = state.with_store(|store| store.architecture_styles()).await?;
    Ok(HttpResponse::Ok().json(styles))
}

//! # Statistics Service
//!
//! `GET /api/stats` returns a `HeritageSummary`: per-entity counts and their
//! total, content contributions grouped by category (count and bytes), the
//! monthly contribution trend, and temple coverage.

use crate::error::AppError;
use crate::state::AppState;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};

const API_PATH: &str = "/api/stats";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(summary))
}

async fn summary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = state.with_store(|store| store.summary()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

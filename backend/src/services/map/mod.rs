//! # Map Service
//!
//! `GET /api/map/locations`: every temple, content contribution and
//! historical event that has both coordinates, tagged with what it is, plus
//! the bare points for the map layer.

use crate::error::AppError;
use crate::state::AppState;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use common::responses::MapResponse;

const API_PATH: &str = "/api/map";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/locations", get().to(locations))
}

async fn locations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let locations = state.with_store(|store| store.located()).await?;
    let points = locations.iter().map(|l| l.point()).collect();
    Ok(HttpResponse::Ok().json(MapResponse { locations, points }))
}

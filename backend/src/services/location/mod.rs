//! # Location Service
//!
//! One endpoint per acquisition method. GPS and IP always answer `200 OK`
//! with a [`ResolutionResponse`]: when no fix could be produced the body
//! carries `status: "unavailable"`, the reason, and the prompt to show the
//! user so they can pick another method. Manual entry is the only method
//! that rejects input (`400` with the list of coordinate errors).
//!
//! - `POST /api/location/gps`: body is the client's GPS report.
//! - `POST /api/location/manual`: body is `{latitude, longitude, address?}`.
//! - `POST /api/location/ip`: no body; queries the configured IP service.

use crate::error::AppError;
use crate::location;
use crate::state::AppState;
use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Scope};
use common::model::location::{GpsReport, Resolution};
use common::requests::ManualLocationRequest;
use common::responses::ResolutionResponse;

const API_PATH: &str = "/api/location";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/gps", post().to(gps))
        .route("/manual", post().to(manual))
        .route("/ip", post().to(ip))
}

async fn gps(report: web::Json<GpsReport>) -> HttpResponse {
    let resolution = location::resolve_gps(report.into_inner());
    HttpResponse::Ok().json(ResolutionResponse::from(resolution))
}

async fn manual(request: web::Json<ManualLocationRequest>) -> Result<HttpResponse, AppError> {
    let fix = location::resolve_manual(request.into_inner())
        .map_err(|errors| AppError::Validation(errors.iter().map(ToString::to_string).collect()))?;
    Ok(HttpResponse::Ok().json(ResolutionResponse::from(Resolution::Resolved(fix))))
}

async fn ip(state: web::Data<AppState>) -> HttpResponse {
    let resolution = location::resolve_ip(&state.locator).await;
    HttpResponse::Ok().json(ResolutionResponse::from(resolution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::location::{Degradation, LocationMethod};
    use common::responses::{ResolutionStatus, ValidationErrors};
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn gps_without_coordinates_prompts_for_another_method() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/location/gps")
            .set_json(json!({"status": "reading", "latitude": 12.0}))
            .to_request();
        let resp: ResolutionResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, ResolutionStatus::Unavailable);
        assert_eq!(resp.reason, Some(Degradation::GpsDenied));
        assert!(resp.fix.is_none());
        assert_eq!(resp.message, Degradation::GpsDenied.prompt());
    }

    #[actix_web::test]
    async fn manual_entry_resolves_or_lists_errors() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/location/manual")
            .set_json(json!({"latitude": 13.0827, "longitude": 80.2707, "address": " Chennai "}))
            .to_request();
        let resp: ResolutionResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, ResolutionStatus::Resolved);
        let fix = resp.fix.unwrap();
        assert_eq!(fix.method, Some(LocationMethod::Manual));
        assert_eq!(fix.address.as_deref(), Some("Chennai"));
        assert!(resp.preview.is_some());

        let req = test::TestRequest::post()
            .uri("/api/location/manual")
            .set_json(json!({"latitude": 95.0, "longitude": 200.0}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ValidationErrors = test::read_body_json(resp).await;
        assert_eq!(body.errors.len(), 2);
    }

    #[actix_web::test]
    async fn origin_is_a_fix_without_preview() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/location/manual")
            .set_json(json!({"latitude": 0.0, "longitude": 0.0}))
            .to_request();
        let resp: ResolutionResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, ResolutionStatus::Resolved);
        assert!(resp.fix.unwrap().is_set());
        assert!(resp.preview.is_none());
    }

    #[actix_web::test]
    async fn ip_failure_is_reported_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let (_dir, state) = test_state(Some(server.uri()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/location/ip").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: ResolutionResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, ResolutionStatus::Unavailable);
        assert_eq!(body.reason, Some(Degradation::IpLookupFailed));
        assert!(body.fix.is_none());
    }
}

use super::submit::store_submission;
use crate::contributions::submission::Submission;
use crate::error::AppError;
use crate::services::upload::read_parts;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::requests::SubmissionRequest;

/// Handler for `POST /api/contributions/upload`.
///
/// Files arrive as raw `file` parts rather than base64, so a `files` list in
/// the `json` part is rejected instead of silently merged.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, AppError> {
    let parts = read_parts::<SubmissionRequest>(payload, state.max_upload_bytes).await?;
    let request = parts
        .metadata
        .ok_or_else(|| AppError::BadRequest("Missing json part with the submission details".into()))?;
    if !request.files.is_empty() {
        return Err(AppError::BadRequest(
            "Send files as 'file' parts, not inside the json part".into(),
        ));
    }

    let mut submission = Submission::from_request(request).map_err(AppError::Validation)?;
    submission.files = parts.files;

    let receipt = store_submission(&state, submission).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

#[cfg(test)]
mod tests {
    use crate::services::contributions::configure_routes;
    use crate::services::test_support::{multipart_body, multipart_content_type, test_state};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::category::SourceKind;
    use common::responses::SubmissionReceipt;
    use serde_json::json;

    #[actix_web::test]
    async fn multipart_files_fan_out() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let json = r#"{"category": "Audio", "title": "Nadaswaram", "description": "Festival music"}"#;
        let body = multipart_body(
            Some(json),
            &[("morning.mp3", &b"raga-1"[..]), ("evening.wav", &b"raga-22"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/api/contributions/upload")
            .insert_header(multipart_content_type())
            .set_payload(body)
            .to_request();
        let receipt: SubmissionReceipt = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt.rows_written, 2);
        assert_eq!(receipt.target, SourceKind::ContentContribution);

        let stored = state
            .with_store(|store| store.content_contributions())
            .await
            .unwrap();
        let mut sizes: Vec<i64> = stored.iter().map(|c| c.file_size).collect();
        sizes.sort();
        assert_eq!(sizes, vec![6, 7]);
        assert!(stored.iter().all(|c| c.contributor_name == "Anonymous"));
    }

    #[actix_web::test]
    async fn missing_json_part_is_a_bad_request() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contributions/upload")
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(None, &[("a.png", &b"png"[..])]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn multipart_over_the_cap_is_refused() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let big = vec![7u8; state.max_upload_bytes / 2 + 1];
        let json = r#"{"category": "Documents", "title": "Copper plates", "description": "Grant"}"#;
        let req = test::TestRequest::post()
            .uri("/api/contributions/upload")
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(Some(json), &[("one.pdf", &big[..]), ("two.pdf", &big[..])]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn oversized_json_part_is_refused() {
        let (_dir, state) = test_state(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let json = json!({
            "category": "Documents",
            "title": "a".repeat(state.max_upload_bytes + 1),
            "description": "Grant",
        })
        .to_string();
        let req = test::TestRequest::post()
            .uri("/api/contributions/upload")
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(Some(&json), &[("one.pdf", &b"pdf"[..])]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}

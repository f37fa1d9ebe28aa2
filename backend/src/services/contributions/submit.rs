use crate::contributions::classifier::{classify, Classified};
use crate::contributions::submission::Submission;
use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::SubmissionRequest;
use common::responses::SubmissionReceipt;
use log::info;
use uuid::Uuid;

const THANKS: &str = "Thank you for your contribution to preserving temple heritage.";

/// Handler for `POST /api/contributions`.
///
/// # Returns
/// - `200 OK` with a `SubmissionReceipt` once every row is committed.
/// - `400 Bad Request` with all validation errors; nothing is written.
/// - `404 Not Found` when an event names a temple that does not exist.
/// - `413 Payload Too Large` when the decoded files exceed the upload cap.
pub async fn process(
    state: web::Data<AppState>,
    request: web::Json<SubmissionRequest>,
) -> Result<HttpResponse, AppError> {
    let submission = Submission::from_request(request.into_inner()).map_err(AppError::Validation)?;
    let receipt = store_submission(&state, submission).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// Checks the size cap, classifies, and persists one submission.
pub(super) async fn store_submission(
    state: &AppState,
    submission: Submission,
) -> Result<SubmissionReceipt, AppError> {
    if submission.total_bytes() > state.max_upload_bytes {
        return Err(AppError::PayloadTooLarge {
            limit_mb: state.max_upload_mb(),
        });
    }

    let classified = classify(submission).map_err(AppError::Validation)?;
    let target = classified.target();
    let message = receipt_message(&classified);

    let submission_id = Uuid::new_v4().to_string();
    let rows_written = state.with_store(move |store| store.save(&classified)).await?;
    info!(
        "Stored submission {} as {:?}: {} row(s)",
        submission_id, target, rows_written
    );

    Ok(SubmissionReceipt {
        submission_id,
        target: target.source_kind(),
        rows_written,
        message,
    })
}

fn receipt_message(classified: &Classified) -> String {
    match classified {
        Classified::Content(draft) => {
            format!("Successfully uploaded {} file(s)! {THANKS}", draft.files.len())
        }
        Classified::Temple(draft) => format!("Temple information for '{}' saved! {THANKS}", draft.name),
        Classified::Event(draft) => format!("Historical event '{}' saved! {THANKS}", draft.title),
    }
}

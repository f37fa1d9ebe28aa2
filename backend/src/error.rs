//! Error taxonomy of the HTTP layer.
//!
//! - `Validation`: user-correctable input problems, reported together as a list.
//! - `NotFound`: an id in the path or body that does not exist.
//! - `Storage`: anything the database rejected. The cause is logged; the client
//!   only sees a generic message.
//!
//! Degraded location outcomes are not errors and never pass through here; the
//! resolver returns them as a normal response.

use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::{ErrorMessage, ValidationErrors};
use log::error;

pub const STORAGE_FAILURE_MESSAGE: &str =
    "Something went wrong while saving or loading contributions. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Upload exceeds the {limit_mb} MB limit")]
    PayloadTooLarge { limit_mb: usize },

    #[error("storage failure: {0}")]
    Storage(StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownTemple(id) => AppError::NotFound(format!("Temple {id} does not exist")),
            other => AppError::Storage(other),
        }
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::BadRequest(format!("Malformed upload: {err}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Validation(errors) => HttpResponse::build(status).json(ValidationErrors {
                errors: errors.clone(),
            }),
            AppError::Storage(_) | AppError::Internal(_) => {
                error!("{}", self);
                HttpResponse::build(status).json(ErrorMessage {
                    error: STORAGE_FAILURE_MESSAGE.to_string(),
                })
            }
            other => HttpResponse::build(status).json(ErrorMessage {
                error: other.to_string(),
            }),
        }
    }
}

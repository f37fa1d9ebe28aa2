//! # Contribution Service
//!
//! Submitting and browsing community contributions.
//!
//! ## Routes
//!
//! *   **`POST /api/contributions`** (`submit::process`): JSON submission with
//!     files embedded as base64. Returns a `SubmissionReceipt`.
//! *   **`POST /api/contributions/upload`** (`upload::process`): the same
//!     submission as `multipart/form-data`; a `json` part with the metadata
//!     and one `file` part per file.
//! *   **`GET /api/contributions`** (`browse::process`): the merged browse
//!     view, filtered by `category`, `contributor` and `with_location`.
//! *   **`GET /api/contributions/contributors`** (`browse::contributors`):
//!     distinct contributor names for the filter dropdown.
//! *   **`GET /api/contributions/{id}/file`** (`file::process`): the stored
//!     bytes of one content contribution.
//!
//! Both submission routes funnel into `submit::store_submission`, so the
//! size cap, classification, and the atomic write are identical for them.

mod browse;
mod file;
mod submit;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/contributions";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(browse::process))
        .route("/upload", post().to(upload::process))
        .route("/contributors", get().to(browse::contributors))
        .route("/{id}/file", get().to(file::process))
}

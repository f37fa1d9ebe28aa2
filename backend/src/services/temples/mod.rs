//! # Temple Service
//!
//! Temple search and the media attached to temples.
//!
//! *   **`GET /api/temples`** (`list::process`): temples filtered by
//!     `search`, `location` (`all`, `with_gps`, `without_gps`) and
//!     `architecture_style`.
//! *   **`GET /api/temples/architecture_styles`** (`list::architecture_styles`).
//! *   **`GET /api/temples/{id}/media`** (`media::list`): media of one temple,
//!     newest first. `404` when the temple does not exist.
//! *   **`POST /api/temples/{id}/media`** (`media::upload`): multipart upload,
//!     one `temple_media` row per `file` part, all or nothing. The optional
//!     `json` part carries description, location and contributor.
//! *   **`GET /api/temples/media/{media_id}/file`** (`media::file`).

mod list;
mod media;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/temples";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/architecture_styles", get().to(list::architecture_styles))
        .route("/{id}/media", get().to(media::list))
        .route("/{id}/media", post().to(media::upload))
        .route("/media/{media_id}/file", get().to(media::file))
}

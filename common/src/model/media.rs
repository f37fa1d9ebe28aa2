use crate::model::location::LocationFix;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: i64,
    pub temple_id: Option<i64>,
    /// Top-level MIME type guessed from the filename ("image", "audio", ...).
    pub media_type: String,
    pub filename: String,
    pub file_size: i64,
    pub description: Option<String>,
    pub location: LocationFix,
    pub contributor_name: String,
    pub uploaded_at: NaiveDateTime,
}

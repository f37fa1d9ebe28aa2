use crate::model::category::ContributionCategory;
use crate::model::event::EventDetails;
use crate::model::location::RawLocationFix;
use crate::model::temple::TempleDetails;
use serde::{Deserialize, Serialize};

/// A file embedded in a JSON submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFile {
    pub filename: String,
    /// Standard base64 of the file bytes.
    pub data: String,
}

/// Payload for `POST /api/contributions`, and the `json` part of
/// `POST /api/contributions/upload` (where `files` stays empty and the bytes
/// arrive as separate `file` parts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub category: ContributionCategory,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Checked during classification, so coordinate errors are reported
    /// together with the other field errors.
    #[serde(default)]
    pub location: RawLocationFix,
    #[serde(default)]
    pub contributor_name: Option<String>,
    /// Read only for "Temple Information".
    #[serde(default)]
    pub temple: TempleDetails,
    /// Read only for "Historical Event/Story".
    #[serde(default)]
    pub event: EventDetails,
    #[serde(default)]
    pub files: Vec<EncodedFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
}

/// Metadata part of `POST /api/temples/{id}/media`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRequest {
    #[serde(default)]
    pub description: Option<String>,
    /// Checked during classification, so coordinate errors are reported
    /// together with the other field errors.
    #[serde(default)]
    pub location: RawLocationFix,
    #[serde(default)]
    pub contributor_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionQuery {
    #[serde(default)]
    pub category: Option<ContributionCategory>,
    #[serde(default)]
    pub contributor: Option<String>,
    #[serde(default)]
    pub with_location: bool,
}

/// Tri-state filter on whether a temple has coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPresence {
    #[default]
    All,
    WithGps,
    WithoutGps,
}

impl LocationPresence {
    pub fn admits(&self, has_location: bool) -> bool {
        match self {
            LocationPresence::All => true,
            LocationPresence::WithGps => has_location,
            LocationPresence::WithoutGps => !has_location,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempleQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: LocationPresence,
    #[serde(default)]
    pub architecture_style: Option<String>,
}

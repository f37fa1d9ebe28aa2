use crate::model::category::SourceKind;
use crate::model::location::{Degradation, LocationFix, MapPoint, Resolution};
use crate::model::view::MapLocation;
use serde::{Deserialize, Serialize};

/// Returned once a submission has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Correlates the rows a multi-file submission fanned out into.
    pub submission_id: String,
    pub target: SourceKind,
    pub rows_written: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReceipt {
    pub temple_id: i64,
    pub rows_written: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Resolved,
    Unavailable,
}

/// JSON form of a location resolution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResponse {
    pub status: ResolutionStatus,
    pub fix: Option<LocationFix>,
    /// Map preview point; absent for unresolved attempts and for (0, 0).
    pub preview: Option<MapPoint>,
    pub reason: Option<Degradation>,
    pub message: String,
}

impl From<Resolution> for ResolutionResponse {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Resolved(fix) => {
                let message = match (&fix.coordinates, &fix.address) {
                    (Some(c), Some(address)) => format!("Location detected: {address} ({c})"),
                    (Some(c), None) => format!("Location set: {c}"),
                    (None, _) => "Location cleared".to_string(),
                };
                ResolutionResponse {
                    status: ResolutionStatus::Resolved,
                    preview: fix.preview(),
                    fix: Some(fix),
                    reason: None,
                    message,
                }
            }
            Resolution::Degraded(reason) => ResolutionResponse {
                status: ResolutionStatus::Unavailable,
                fix: None,
                preview: None,
                reason: Some(reason),
                message: reason.prompt().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    pub locations: Vec<MapLocation>,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

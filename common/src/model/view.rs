//! Read-side shapes that merge rows from several tables.

use crate::model::category::{ContributionCategory, SourceKind};
use crate::model::location::MapPoint;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the community browsing view. Temples, events and content
/// contributions all flatten into this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionView {
    pub id: i64,
    pub source: SourceKind,
    pub title: String,
    pub category: ContributionCategory,
    pub description: Option<String>,
    pub contributor_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Always `None` for historical events.
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    /// Only file-bearing rows have one.
    pub filename: Option<String>,
}

impl ContributionView {
    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A located row for the heritage map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub source: SourceKind,
    /// "Temple", "Historical Event", or the content category label.
    pub kind: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl MapLocation {
    pub fn point(&self) -> MapPoint {
        MapPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

use crate::model::category::ContributionCategory;
use crate::model::location::LocationFix;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One stored file of a content contribution. A submission with several files
/// is stored as several of these, sharing everything but the file columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentContribution {
    pub id: i64,
    pub title: String,
    pub category: ContributionCategory,
    pub description: String,
    pub location: LocationFix,
    pub contributor_name: String,
    pub filename: String,
    pub file_size: i64,
    pub created_at: NaiveDateTime,
}

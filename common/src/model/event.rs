use crate::model::location::LocationFix;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A historical event or story. Events keep coordinates only; the `address`
/// of `location` is always `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub id: i64,
    pub temple_id: Option<i64>,
    pub event_date: Option<String>,
    pub event_title: String,
    pub event_description: String,
    pub location: LocationFix,
    pub contributor_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Free text, e.g. "1010 CE" or "every Margazhi".
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub temple_id: Option<i64>,
}

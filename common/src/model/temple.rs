use crate::model::location::LocationFix;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temple {
    pub id: i64,
    pub name: String,
    pub location: LocationFix,
    pub built_year: Option<String>,
    pub deity: Option<String>,
    pub architecture_style: Option<String>,
    pub description: Option<String>,
    pub contributor_name: String,
    pub created_at: NaiveDateTime,
}

impl Temple {
    /// Every textual column, in table order. Used by the free-text search.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.location.address.as_deref(),
            self.built_year.as_deref(),
            self.deity.as_deref(),
            self.architecture_style.as_deref(),
            self.description.as_deref(),
            Some(self.contributor_name.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

/// Optional temple attributes a "Temple Information" submission may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempleDetails {
    #[serde(default)]
    pub built_year: Option<String>,
    #[serde(default)]
    pub deity: Option<String>,
    #[serde(default)]
    pub architecture_style: Option<String>,
}

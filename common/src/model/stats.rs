use crate::model::category::ContributionCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub temples: u64,
    pub media_assets: u64,
    pub content_contributions: u64,
    pub historical_events: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ContributionCategory,
    pub count: u64,
    pub total_bytes: u64,
}

/// Contributions created in one calendar month, `month` formatted `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempleCoverage {
    pub total: u64,
    pub with_location: u64,
    pub named_contributors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageSummary {
    pub counts: EntityCounts,
    pub categories: Vec<CategoryTotal>,
    /// Most recent month first, at most twelve entries.
    pub monthly: Vec<MonthlyCount>,
    pub temples: TempleCoverage,
}

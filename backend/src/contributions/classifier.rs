//! # Contribution Classifier
//!
//! Maps a submission's category to the entity it is stored as and checks the
//! fields that entity needs:
//!
//! | Category                              | Stored as             | Files     |
//! |---------------------------------------|-----------------------|-----------|
//! | Temple Information                    | `temples`             | ignored   |
//! | Historical Event/Story                | `historical_events`   | ignored   |
//! | Photos/Images, Audio, Documents       | `content_contributions` | at least one |
//!
//! All rules are checked, the location pair included, and every violation is
//! returned; nothing reaches the store while any rule fails.

use crate::contributions::submission::{Attachment, Submission};
use common::model::category::{ContributionCategory, SourceKind};
use common::model::location::LocationFix;
use common::model::temple::TempleDetails;
use log::warn;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Content description is required";
pub const FILE_REQUIRED: &str = "Please upload at least one file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEntity {
    Temple,
    HistoricalEvent,
    ContentContribution,
}

impl TargetEntity {
    pub fn for_category(category: ContributionCategory) -> Self {
        match category {
            ContributionCategory::TempleInformation => TargetEntity::Temple,
            ContributionCategory::HistoricalEvent => TargetEntity::HistoricalEvent,
            ContributionCategory::Images
            | ContributionCategory::Audio
            | ContributionCategory::Documents => TargetEntity::ContentContribution,
        }
    }

    pub fn requires_files(&self) -> bool {
        matches!(self, TargetEntity::ContentContribution)
    }

    pub fn source_kind(&self) -> SourceKind {
        match self {
            TargetEntity::Temple => SourceKind::Temple,
            TargetEntity::HistoricalEvent => SourceKind::HistoricalEvent,
            TargetEntity::ContentContribution => SourceKind::ContentContribution,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TempleDraft {
    pub name: String,
    pub location: LocationFix,
    pub details: TempleDetails,
    pub description: Option<String>,
    pub contributor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_date: Option<String>,
    pub temple_id: Option<i64>,
    /// Only the coordinates are kept for events.
    pub location: LocationFix,
    pub contributor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentDraft {
    pub category: ContributionCategory,
    pub title: String,
    pub description: String,
    pub location: LocationFix,
    pub contributor_name: Option<String>,
    pub files: Vec<Attachment>,
}

/// A validated submission, shaped for the table it goes into.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Temple(TempleDraft),
    Event(EventDraft),
    Content(ContentDraft),
}

impl Classified {
    pub fn target(&self) -> TargetEntity {
        match self {
            Classified::Temple(_) => TargetEntity::Temple,
            Classified::Event(_) => TargetEntity::HistoricalEvent,
            Classified::Content(_) => TargetEntity::ContentContribution,
        }
    }
}

pub fn classify(submission: Submission) -> Result<Classified, Vec<String>> {
    let target = TargetEntity::for_category(submission.category);
    let title = submission.title.trim().to_string();
    let description = submission.description.trim().to_string();

    let mut errors = Vec::new();
    if title.is_empty() {
        errors.push(TITLE_REQUIRED.to_string());
    }
    if description.is_empty() {
        errors.push(DESCRIPTION_REQUIRED.to_string());
    }
    if target.requires_files() {
        if submission.files.is_empty() {
            errors.push(FILE_REQUIRED.to_string());
        }
        for file in &submission.files {
            if !submission.category.accepts_filename(&file.filename) {
                errors.push(format!(
                    "File '{}' is not an accepted {} file (expected one of: {})",
                    file.filename,
                    submission.category,
                    submission.category.accepted_extensions().join(", ")
                ));
            }
        }
    } else if !submission.files.is_empty() {
        warn!(
            "Ignoring {} file(s) attached to a '{}' submission",
            submission.files.len(),
            submission.category
        );
    }
    let location = match submission.location.into_fix() {
        Ok(fix) => fix,
        Err(problems) => {
            errors.extend(problems.iter().map(ToString::to_string));
            LocationFix::unset()
        }
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let classified = match target {
        TargetEntity::Temple => Classified::Temple(TempleDraft {
            name: title,
            location,
            details: TempleDetails {
                built_year: non_blank(submission.temple.built_year),
                deity: non_blank(submission.temple.deity),
                architecture_style: non_blank(submission.temple.architecture_style),
            },
            description: Some(description),
            contributor_name: submission.contributor_name,
        }),
        TargetEntity::HistoricalEvent => Classified::Event(EventDraft {
            title,
            description,
            event_date: non_blank(submission.event.event_date),
            temple_id: submission.event.temple_id,
            location: LocationFix {
                address: None,
                ..location
            },
            contributor_name: submission.contributor_name,
        }),
        TargetEntity::ContentContribution => Classified::Content(ContentDraft {
            category: submission.category,
            title,
            description,
            location,
            contributor_name: submission.contributor_name,
            files: submission.files,
        }),
    };
    Ok(classified)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The contribution kinds a user can choose from when submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionCategory {
    #[serde(rename = "Photos/Images")]
    Images,
    #[serde(rename = "Audio")]
    Audio,
    #[serde(rename = "Documents")]
    Documents,
    #[serde(rename = "Temple Information")]
    TempleInformation,
    #[serde(rename = "Historical Event/Story")]
    HistoricalEvent,
}

impl ContributionCategory {
    pub const ALL: [ContributionCategory; 5] = [
        ContributionCategory::Images,
        ContributionCategory::Audio,
        ContributionCategory::Documents,
        ContributionCategory::TempleInformation,
        ContributionCategory::HistoricalEvent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContributionCategory::Images => "Photos/Images",
            ContributionCategory::Audio => "Audio",
            ContributionCategory::Documents => "Documents",
            ContributionCategory::TempleInformation => "Temple Information",
            ContributionCategory::HistoricalEvent => "Historical Event/Story",
        }
    }

    /// File extensions the upload form accepts for this category. Empty for
    /// categories that do not take files.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            ContributionCategory::Images => &["png", "jpg", "jpeg", "gif", "bmp"],
            ContributionCategory::Audio => &["mp3", "wav", "m4a", "ogg", "flac"],
            ContributionCategory::Documents => &["pdf", "doc", "docx", "txt", "rtf"],
            ContributionCategory::TempleInformation | ContributionCategory::HistoricalEvent => &[],
        }
    }

    pub fn accepts_filename(&self, filename: &str) -> bool {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.accepted_extensions().iter().any(|accepted| *accepted == ext)
    }
}

impl fmt::Display for ContributionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contribution category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ContributionCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContributionCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Which table a row in a merged listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Temple,
    HistoricalEvent,
    ContentContribution,
}

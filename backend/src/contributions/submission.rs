use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use common::model::category::ContributionCategory;
use common::model::event::EventDetails;
use common::model::location::RawLocationFix;
use common::model::temple::TempleDetails;
use common::requests::SubmissionRequest;

/// An uploaded file: the declared name and the opaque bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn size(&self) -> i64 {
        self.bytes.len() as i64
    }
}

/// A user's in-progress submission, carried explicitly from the HTTP layer
/// through classification into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub category: ContributionCategory,
    pub title: String,
    pub description: String,
    /// Unchecked until classification.
    pub location: RawLocationFix,
    pub contributor_name: Option<String>,
    pub temple: TempleDetails,
    pub event: EventDetails,
    pub files: Vec<Attachment>,
}

impl Submission {
    /// Decodes the base64 files of a JSON submission. Every undecodable file
    /// is reported.
    pub fn from_request(request: SubmissionRequest) -> Result<Self, Vec<String>> {
        let mut files = Vec::with_capacity(request.files.len());
        let mut errors = Vec::new();
        for file in request.files {
            match STANDARD.decode(file.data.trim()) {
                Ok(bytes) => files.push(Attachment {
                    filename: file.filename,
                    bytes,
                }),
                Err(e) => errors.push(format!("File '{}' is not valid base64: {}", file.filename, e)),
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Submission {
            category: request.category,
            title: request.title,
            description: request.description,
            location: request.location,
            contributor_name: request.contributor_name,
            temple: request.temple,
            event: request.event,
            files,
        })
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes.len()).sum()
    }
}

use super::{temple_exists, ContributionStore, StoreError};
use crate::contributions::classifier::{Classified, ContentDraft, EventDraft, TempleDraft};
use crate::contributions::submission::Attachment;
use common::model::location::LocationFix;
use log::{debug, info};
use rusqlite::{params, Connection};

pub const ANONYMOUS: &str = "Anonymous";

/// Blank or missing contributor names are stored as "Anonymous".
pub fn contributor_or_anonymous(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS.to_string(),
    }
}

/// Files to attach to an existing temple. Each file becomes one
/// `temple_media` row.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDraft {
    pub description: Option<String>,
    pub location: LocationFix,
    pub contributor_name: Option<String>,
    pub files: Vec<Attachment>,
}

impl ContributionStore {
    /// Persists a classified submission and returns how many rows were
    /// written. Content contributions fan out into one row per file. The
    /// whole submission is one transaction: on error nothing is committed.
    pub fn save(&self, classified: &Classified) -> Result<usize, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let written = match classified {
            Classified::Temple(draft) => insert_temple(&tx, draft)?,
            Classified::Event(draft) => insert_event(&tx, draft)?,
            Classified::Content(draft) => insert_content(&tx, draft)?,
        };
        tx.commit()?;
        debug!("Committed {} row(s) for a {:?} submission", written, classified.target());
        Ok(written)
    }

    /// Stores media files against a temple, all or nothing.
    pub fn add_temple_media(&self, temple_id: i64, draft: &MediaDraft) -> Result<usize, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        if !temple_exists(&tx, temple_id)? {
            return Err(StoreError::UnknownTemple(temple_id));
        }

        let contributor = contributor_or_anonymous(draft.contributor_name.as_deref());
        let description = draft
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO temple_media (temple_id, media_type, filename, file_data, file_size,
                                           description, latitude, longitude, contributor_name)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for file in &draft.files {
                let media_type = mime_guess::from_path(&file.filename)
                    .first_or_octet_stream()
                    .type_()
                    .to_string();
                stmt.execute(params![
                    temple_id,
                    media_type,
                    file.filename,
                    file.bytes,
                    file.size(),
                    description,
                    draft.location.latitude(),
                    draft.location.longitude(),
                    contributor,
                ])?;
            }
        }
        tx.commit()?;
        info!("Attached {} media file(s) to temple {}", draft.files.len(), temple_id);
        Ok(draft.files.len())
    }
}

fn insert_temple(conn: &Connection, draft: &TempleDraft) -> Result<usize, StoreError> {
    conn.execute(
        "INSERT INTO temples (name, location_address, latitude, longitude, location_accuracy,
                              built_year, deity, architecture_style, description, contributor_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            draft.name,
            draft.location.address,
            draft.location.latitude(),
            draft.location.longitude(),
            draft.location.accuracy,
            draft.details.built_year,
            draft.details.deity,
            draft.details.architecture_style,
            draft.description,
            contributor_or_anonymous(draft.contributor_name.as_deref()),
        ],
    )?;
    Ok(1)
}

fn insert_event(conn: &Connection, draft: &EventDraft) -> Result<usize, StoreError> {
    if let Some(temple_id) = draft.temple_id {
        if !temple_exists(conn, temple_id)? {
            return Err(StoreError::UnknownTemple(temple_id));
        }
    }
    conn.execute(
        "INSERT INTO historical_events (temple_id, event_date, event_title, event_description,
                                        latitude, longitude, contributor_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            draft.temple_id,
            draft.event_date,
            draft.title,
            draft.description,
            draft.location.latitude(),
            draft.location.longitude(),
            contributor_or_anonymous(draft.contributor_name.as_deref()),
        ],
    )?;
    Ok(1)
}

fn insert_content(conn: &Connection, draft: &ContentDraft) -> Result<usize, StoreError> {
    let contributor = contributor_or_anonymous(draft.contributor_name.as_deref());
    let mut stmt = conn.prepare_cached(
        "INSERT INTO content_contributions (title, content_type, description, latitude, longitude,
                                            location_address, contributor_name, file_data,
                                            filename, file_size)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    let mut written = 0;
    for file in &draft.files {
        written += stmt.execute(params![
            draft.title,
            draft.category.label(),
            draft.description,
            draft.location.latitude(),
            draft.location.longitude(),
            draft.location.address,
            contributor,
            file.bytes,
            file.filename,
            file.size(),
        ])?;
    }
    Ok(written)
}

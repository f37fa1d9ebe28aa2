use super::{category_from_row, location_from_row, temple_exists, ContributionStore, StoreError};
use common::model::category::{ContributionCategory, SourceKind};
use common::model::contribution::ContentContribution;
use common::model::event::HistoricalEvent;
use common::model::media::MediaAsset;
use common::model::temple::Temple;
use common::model::view::{ContributionView, MapLocation};
use common::requests::{ContributionQuery, TempleQuery};
use rusqlite::{Connection, OptionalExtension};

/// Label used for temples in map listings.
pub const TEMPLE_KIND: &str = "Temple";
/// Label used for historical events in map listings.
pub const EVENT_KIND: &str = "Historical Event";

/// Raw bytes of a stored upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ContributionStore {
    pub fn temples(&self) -> Result<Vec<Temple>, StoreError> {
        query_temples(&self.connect()?)
    }

    pub fn historical_events(&self) -> Result<Vec<HistoricalEvent>, StoreError> {
        query_events(&self.connect()?)
    }

    pub fn content_contributions(&self) -> Result<Vec<ContentContribution>, StoreError> {
        query_content(&self.connect()?)
    }

    /// The community browsing view: all three content-bearing tables merged
    /// and filtered.
    pub fn browse(&self, query: &ContributionQuery) -> Result<Vec<ContributionView>, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let content = query_content(&tx)?;
        let temples = query_temples(&tx)?;
        let events = query_events(&tx)?;
        tx.finish()?;
        Ok(filter_views(merge_views(content, temples, events), query))
    }

    /// Distinct contributor names across temples, events and contributions.
    pub fn contributors(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT contributor_name FROM content_contributions
             UNION SELECT contributor_name FROM temples
             UNION SELECT contributor_name FROM historical_events
             ORDER BY 1",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    pub fn search_temples(&self, query: &TempleQuery) -> Result<Vec<Temple>, StoreError> {
        Ok(filter_temples(self.temples()?, query))
    }

    pub fn architecture_styles(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT architecture_style FROM temples
             WHERE architecture_style IS NOT NULL
             ORDER BY architecture_style",
        )?;
        let styles = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(styles)
    }

    /// Every temple, contribution and event row that has both coordinates.
    pub fn located(&self) -> Result<Vec<MapLocation>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT 'temple', ?1, name, latitude, longitude, location_address
               FROM temples WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             UNION ALL
             SELECT 'content', content_type, title, latitude, longitude, location_address
               FROM content_contributions WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             UNION ALL
             SELECT 'event', ?2, event_title, latitude, longitude, NULL
               FROM historical_events WHERE latitude IS NOT NULL AND longitude IS NOT NULL",
        )?;
        let rows = stmt
            .query_map([TEMPLE_KIND, EVENT_KIND], |row| {
                let source = match row.get::<_, String>(0)?.as_str() {
                    "temple" => SourceKind::Temple,
                    "event" => SourceKind::HistoricalEvent,
                    _ => SourceKind::ContentContribution,
                };
                Ok(MapLocation {
                    source,
                    kind: row.get(1)?,
                    title: row.get(2)?,
                    latitude: row.get(3)?,
                    longitude: row.get(4)?,
                    address: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn contribution_file(&self, id: i64) -> Result<Option<StoredFile>, StoreError> {
        let conn = self.connect()?;
        let file = conn
            .query_row(
                "SELECT filename, file_data FROM content_contributions WHERE id = ?1",
                [id],
                |row| {
                    Ok(StoredFile {
                        filename: row.get(0)?,
                        bytes: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(file)
    }

    pub fn media_file(&self, media_id: i64) -> Result<Option<StoredFile>, StoreError> {
        let conn = self.connect()?;
        let file = conn
            .query_row(
                "SELECT filename, file_data FROM temple_media WHERE id = ?1",
                [media_id],
                |row| {
                    Ok(StoredFile {
                        filename: row.get(0)?,
                        bytes: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(file)
    }

    pub fn temple_media(&self, temple_id: i64) -> Result<Vec<MediaAsset>, StoreError> {
        let conn = self.connect()?;
        if !temple_exists(&conn, temple_id)? {
            return Err(StoreError::UnknownTemple(temple_id));
        }
        let mut stmt = conn.prepare(
            "SELECT id, temple_id, media_type, filename, file_size, description,
                    latitude, longitude, contributor_name, uploaded_at
             FROM temple_media WHERE temple_id = ?1
             ORDER BY uploaded_at DESC, id DESC",
        )?;
        let media = stmt
            .query_map([temple_id], |row| {
                Ok(MediaAsset {
                    id: row.get(0)?,
                    temple_id: row.get(1)?,
                    media_type: row.get(2)?,
                    filename: row.get(3)?,
                    file_size: row.get(4)?,
                    description: row.get(5)?,
                    location: location_from_row(row, 6, 7, None, None)?,
                    contributor_name: row.get(8)?,
                    uploaded_at: row.get(9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(media)
    }
}

fn query_temples(conn: &Connection) -> Result<Vec<Temple>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, latitude, longitude, location_address, location_accuracy,
                built_year, deity, architecture_style, description, contributor_name, created_at
         FROM temples
         ORDER BY created_at DESC, id DESC",
    )?;
    let temples = stmt
        .query_map([], |row| {
            Ok(Temple {
                id: row.get(0)?,
                name: row.get(1)?,
                location: location_from_row(row, 2, 3, Some(4), Some(5))?,
                built_year: row.get(6)?,
                deity: row.get(7)?,
                architecture_style: row.get(8)?,
                description: row.get(9)?,
                contributor_name: row.get(10)?,
                created_at: row.get(11)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(temples)
}

fn query_events(conn: &Connection) -> Result<Vec<HistoricalEvent>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, temple_id, event_date, event_title, event_description,
                latitude, longitude, contributor_name, created_at
         FROM historical_events
         ORDER BY created_at DESC, id DESC",
    )?;
    let events = stmt
        .query_map([], |row| {
            Ok(HistoricalEvent {
                id: row.get(0)?,
                temple_id: row.get(1)?,
                event_date: row.get(2)?,
                event_title: row.get(3)?,
                event_description: row.get(4)?,
                location: location_from_row(row, 5, 6, None, None)?,
                contributor_name: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

fn query_content(conn: &Connection) -> Result<Vec<ContentContribution>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, content_type, description, latitude, longitude, location_address,
                contributor_name, filename, file_size, created_at
         FROM content_contributions
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ContentContribution {
                id: row.get(0)?,
                title: row.get(1)?,
                category: category_from_row(row, 2)?,
                description: row.get(3)?,
                location: location_from_row(row, 4, 5, Some(6), None)?,
                contributor_name: row.get(7)?,
                filename: row.get(8)?,
                file_size: row.get(9)?,
                created_at: row.get(10)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Flattens the three typed listings into one view, newest first. Rows with
/// the same timestamp keep their per-table order (id descending), with
/// contributions before temples before events.
pub fn merge_views(
    content: Vec<ContentContribution>,
    temples: Vec<Temple>,
    events: Vec<HistoricalEvent>,
) -> Vec<ContributionView> {
    let mut views = Vec::with_capacity(content.len() + temples.len() + events.len());

    views.extend(content.into_iter().map(|c| ContributionView {
        id: c.id,
        source: SourceKind::ContentContribution,
        title: c.title,
        category: c.category,
        description: Some(c.description),
        contributor_name: c.contributor_name,
        latitude: c.location.latitude(),
        longitude: c.location.longitude(),
        address: c.location.address,
        created_at: c.created_at,
        filename: Some(c.filename),
    }));

    views.extend(temples.into_iter().map(|t| ContributionView {
        id: t.id,
        source: SourceKind::Temple,
        title: t.name,
        category: ContributionCategory::TempleInformation,
        description: t.description,
        contributor_name: t.contributor_name,
        latitude: t.location.latitude(),
        longitude: t.location.longitude(),
        address: t.location.address,
        created_at: t.created_at,
        filename: None,
    }));

    views.extend(events.into_iter().map(|e| ContributionView {
        id: e.id,
        source: SourceKind::HistoricalEvent,
        title: e.event_title,
        category: ContributionCategory::HistoricalEvent,
        description: Some(e.event_description),
        contributor_name: e.contributor_name,
        latitude: e.location.latitude(),
        longitude: e.location.longitude(),
        address: None,
        created_at: e.created_at,
        filename: None,
    }));

    views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    views
}

pub fn filter_views(views: Vec<ContributionView>, query: &ContributionQuery) -> Vec<ContributionView> {
    views
        .into_iter()
        .filter(|v| query.category.is_none_or(|c| v.category == c))
        .filter(|v| {
            query
                .contributor
                .as_deref()
                .is_none_or(|name| v.contributor_name == name)
        })
        .filter(|v| !query.with_location || v.has_location())
        .collect()
}

/// Applies the temple listing filters: free-text search across every text
/// column (case-insensitive substring), location presence, and exact
/// architecture style.
pub fn filter_temples(temples: Vec<Temple>, query: &TempleQuery) -> Vec<Temple> {
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let style = query
        .architecture_style
        .as_deref()
        .filter(|s| !s.is_empty());

    temples
        .into_iter()
        .filter(|t| {
            needle.as_deref().is_none_or(|needle| {
                t.text_fields()
                    .any(|field| field.to_lowercase().contains(needle))
            })
        })
        .filter(|t| query.location.admits(t.location.is_set()))
        .filter(|t| style.is_none_or(|style| t.architecture_style.as_deref() == Some(style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::contributions::classifier::{Classified, ContentDraft, EventDraft, TempleDraft};
    use crate::contributions::submission::Attachment;
    use common::model::location::{Coordinates, LocationFix, LocationMethod};
    use common::model::temple::TempleDetails;
    use common::requests::LocationPresence;

    fn at(lat: f64, lon: f64) -> LocationFix {
        LocationFix::at(Coordinates::new(lat, lon).unwrap(), LocationMethod::Manual)
    }

    fn temple(name: &str, deity: Option<&str>, style: Option<&str>, location: LocationFix) -> Classified {
        Classified::Temple(TempleDraft {
            name: name.into(),
            location,
            details: TempleDetails {
                built_year: None,
                deity: deity.map(String::from),
                architecture_style: style.map(String::from),
            },
            description: Some(format!("About {name}")),
            contributor_name: None,
        })
    }

    fn event(title: &str, location: LocationFix, contributor: Option<&str>) -> Classified {
        Classified::Event(EventDraft {
            title: title.into(),
            description: "Story".into(),
            event_date: None,
            temple_id: None,
            location,
            contributor_name: contributor.map(String::from),
        })
    }

    fn content(title: &str, category: ContributionCategory, files: &[&str], location: LocationFix) -> Classified {
        Classified::Content(ContentDraft {
            category,
            title: title.into(),
            description: "Shared".into(),
            location,
            contributor_name: Some("Priya".into()),
            files: files
                .iter()
                .map(|f| Attachment {
                    filename: (*f).into(),
                    bytes: f.as_bytes().to_vec(),
                })
                .collect(),
        })
    }

    fn seeded_store() -> (tempfile::TempDir, ContributionStore) {
        let (dir, store) = temp_store();
        store
            .save(&temple("Nataraja Temple", Some("Shiva"), Some("Dravidian"), at(11.3993, 79.6936)))
            .unwrap();
        store
            .save(&temple("Sun Temple", Some("Surya"), Some("Kalinga"), LocationFix::unset()))
            .unwrap();
        store.save(&event("Chariot festival", at(0.0, 0.0), None)).unwrap();
        store
            .save(&content(
                "Bells",
                ContributionCategory::Audio,
                &["bell.mp3", "conch.ogg"],
                LocationFix::unset(),
            ))
            .unwrap();
        backdate(&store, "temples", 1, "2024-01-01 08:00:00");
        backdate(&store, "temples", 2, "2024-03-01 08:00:00");
        backdate(&store, "historical_events", 1, "2024-02-01 08:00:00");
        backdate(&store, "content_contributions", 1, "2024-04-01 08:00:00");
        backdate(&store, "content_contributions", 2, "2024-04-01 08:00:00");
        (dir, store)
    }

    #[test]
    fn browse_merges_all_sources_newest_first() {
        let (_dir, store) = seeded_store();
        let views = store.browse(&ContributionQuery::default()).unwrap();
        let titles: Vec<(&str, i64)> = views.iter().map(|v| (v.title.as_str(), v.id)).collect();
        assert_eq!(
            titles,
            vec![
                ("Bells", 2),
                ("Bells", 1),
                ("Sun Temple", 2),
                ("Chariot festival", 1),
                ("Nataraja Temple", 1),
            ]
        );

        let event = views.iter().find(|v| v.source == SourceKind::HistoricalEvent).unwrap();
        assert_eq!(event.address, None);
        assert_eq!(event.filename, None);
        assert_eq!(event.category, ContributionCategory::HistoricalEvent);
        assert_eq!(views[0].filename.as_deref(), Some("conch.ogg"));
    }

    #[test]
    fn browse_filters_compose() {
        let (_dir, store) = seeded_store();

        let audio = store
            .browse(&ContributionQuery {
                category: Some(ContributionCategory::Audio),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(audio.len(), 2);

        let by_priya = store
            .browse(&ContributionQuery {
                contributor: Some("Priya".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(by_priya.iter().all(|v| v.contributor_name == "Priya"));
        assert_eq!(by_priya.len(), 2);

        let located = store
            .browse(&ContributionQuery {
                with_location: true,
                ..Default::default()
            })
            .unwrap();
        let titles: Vec<&str> = located.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Chariot festival", "Nataraja Temple"]);

        let none = store
            .browse(&ContributionQuery {
                category: Some(ContributionCategory::Audio),
                with_location: true,
                ..Default::default()
            })
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn empty_store_browses_to_nothing() {
        let (_dir, store) = temp_store();
        assert!(store.browse(&ContributionQuery::default()).unwrap().is_empty());
        assert!(store.located().unwrap().is_empty());
        assert!(store.contributors().unwrap().is_empty());
    }

    #[test]
    fn temple_search_is_case_insensitive_across_text_columns() {
        let (_dir, store) = seeded_store();
        let found = store
            .search_temples(&TempleQuery {
                search: Some("shiva".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Nataraja Temple");

        let by_name = store
            .search_temples(&TempleQuery {
                search: Some("SUN".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_name.len(), 1);

        let by_description = store
            .search_temples(&TempleQuery {
                search: Some("about".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_description.len(), 2);
    }

    #[test]
    fn temple_location_and_style_filters() {
        let (_dir, store) = seeded_store();
        let with_gps = store
            .search_temples(&TempleQuery {
                location: LocationPresence::WithGps,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(with_gps.len(), 1);
        assert_eq!(with_gps[0].name, "Nataraja Temple");

        let without_gps = store
            .search_temples(&TempleQuery {
                location: LocationPresence::WithoutGps,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(without_gps.len(), 1);
        assert_eq!(without_gps[0].name, "Sun Temple");

        let kalinga = store
            .search_temples(&TempleQuery {
                architecture_style: Some("Kalinga".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(kalinga.len(), 1);

        let partial_style = store
            .search_temples(&TempleQuery {
                architecture_style: Some("Kaling".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(partial_style.is_empty());

        assert_eq!(store.architecture_styles().unwrap(), vec!["Dravidian", "Kalinga"]);
    }

    #[test]
    fn located_rows_are_tagged_by_source() {
        let (_dir, store) = seeded_store();
        store
            .save(&content("Carvings", ContributionCategory::Images, &["pillar.png"], at(9.9195, 78.1193)))
            .unwrap();

        let located = store.located().unwrap();
        let kinds: Vec<&str> = located.iter().map(|l| l.kind.as_str()).collect();
        assert_eq!(kinds, vec![TEMPLE_KIND, "Photos/Images", EVENT_KIND]);
        // (0, 0) is a stored location and is listed.
        let event = &located[2];
        assert_eq!(event.source, SourceKind::HistoricalEvent);
        assert_eq!((event.latitude, event.longitude), (0.0, 0.0));
        assert_eq!(event.address, None);
    }

    #[test]
    fn stored_files_round_trip_their_bytes() {
        let (_dir, store) = seeded_store();
        let file = store.contribution_file(1).unwrap().unwrap();
        assert_eq!(file.filename, "bell.mp3");
        assert_eq!(file.bytes, b"bell.mp3");
        assert!(store.contribution_file(99).unwrap().is_none());
        assert!(store.media_file(1).unwrap().is_none());
    }

    #[test]
    fn contributors_are_distinct_and_sorted() {
        let (_dir, store) = seeded_store();
        store.save(&event("Procession", LocationFix::unset(), Some("Arjun"))).unwrap();
        assert_eq!(store.contributors().unwrap(), vec!["Anonymous", "Arjun", "Priya"]);
    }
}

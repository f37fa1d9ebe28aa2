//! # Contribution Store
//!
//! SQLite persistence for the four heritage tables (`temples`, `temple_media`,
//! `content_contributions`, `historical_events`).
//!
//! The store holds only the database path. Every operation opens its own
//! connection and, for writes, its own transaction, so nothing is held open
//! between requests. Callers on the async side run these methods inside
//! `tokio::task::spawn_blocking` (see `state::AppState::with_store`).
//!
//! - `writes`: inserting classified submissions and temple media.
//! - `reads`: typed listings, the merged browse view, filters, file bytes.
//! - `reports`: counts and grouped totals for the statistics surface.
//!
//! No update or delete operation exists; rows are append-only.

mod reads;
mod reports;
mod schema;
mod writes;

pub use reads::StoredFile;
pub use writes::{MediaDraft, ANONYMOUS};

use common::model::category::{ContributionCategory, UnknownCategory};
use common::model::location::{Coordinates, LocationFix};
use log::{info, warn};
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("temple {0} does not exist")]
    UnknownTemple(i64),
}

pub struct ContributionStore {
    path: PathBuf,
}

impl ContributionStore {
    /// Opens (creating if needed) the database file and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(schema::CREATE_TABLES)?;
        info!("Contribution store ready at {}", store.path.display());
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

fn temple_exists(conn: &Connection, temple_id: i64) -> Result<bool, StoreError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM temples WHERE id = ?1)",
        [temple_id],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}

/// Rebuilds a fix from its stored columns. A row holding exactly one
/// coordinate can only come from an out-of-band edit; it reads back as unset.
fn location_from_row(
    row: &Row,
    latitude: usize,
    longitude: usize,
    address: Option<usize>,
    accuracy: Option<usize>,
) -> rusqlite::Result<LocationFix> {
    let lat: Option<f64> = row.get(latitude)?;
    let lon: Option<f64> = row.get(longitude)?;
    let address: Option<String> = match address {
        Some(idx) => row.get(idx)?,
        None => None,
    };
    let accuracy: Option<f64> = match accuracy {
        Some(idx) => row.get(idx)?,
        None => None,
    };

    let coordinates = match (lat, lon) {
        (Some(lat), Some(lon)) => match Coordinates::new(lat, lon) {
            Ok(c) => Some(c),
            Err(errors) => {
                warn!("Stored coordinates ({lat}, {lon}) are invalid: {errors:?}");
                None
            }
        },
        (None, None) => None,
        _ => {
            warn!("Stored row has a single coordinate; treating its location as unset");
            None
        }
    };

    Ok(LocationFix {
        coordinates,
        address: None,
        accuracy: accuracy.filter(|_| coordinates.is_some()),
        method: None,
    }
    .with_address(address))
}

fn category_from_row(row: &Row, idx: usize) -> rusqlite::Result<ContributionCategory> {
    let label: String = row.get(idx)?;
    label.parse().map_err(|e: UnknownCategory| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// A store in a throwaway directory. Keep the `TempDir` alive for the
    /// duration of the test.
    pub fn temp_store() -> (TempDir, ContributionStore) {
        let dir = TempDir::new().unwrap();
        let store = ContributionStore::open(dir.path().join("heritage.db")).unwrap();
        (dir, store)
    }

    /// Rewrites the creation timestamp of one row so ordering and monthly
    /// buckets can be tested deterministically.
    pub fn backdate(store: &ContributionStore, table: &str, id: i64, timestamp: &str) {
        let column = if table == "temple_media" { "uploaded_at" } else { "created_at" };
        store
            .connect()
            .unwrap()
            .execute(
                &format!("UPDATE {table} SET {column} = ?1 WHERE id = ?2"),
                rusqlite::params![timestamp, id],
            )
            .unwrap();
    }

    pub fn count_rows(store: &ContributionStore, table: &str) -> i64 {
        store
            .connect()
            .unwrap()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .unwrap()
    }

    pub fn raw_connection(store: &ContributionStore) -> Connection {
        store.connect().unwrap()
    }
}

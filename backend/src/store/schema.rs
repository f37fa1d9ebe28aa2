//! Table definitions. Every statement is idempotent so the schema can be
//! applied on each start.

pub const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS temples (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location_address TEXT,
        latitude REAL,
        longitude REAL,
        location_accuracy REAL,
        built_year TEXT,
        deity TEXT,
        architecture_style TEXT,
        description TEXT,
        contributor_name TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS temple_media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        temple_id INTEGER,
        media_type TEXT NOT NULL,
        filename TEXT NOT NULL,
        file_data BLOB NOT NULL,
        file_size INTEGER NOT NULL,
        description TEXT,
        latitude REAL,
        longitude REAL,
        contributor_name TEXT NOT NULL,
        uploaded_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (temple_id) REFERENCES temples (id)
    );

    CREATE TABLE IF NOT EXISTS content_contributions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content_type TEXT NOT NULL,
        description TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        location_address TEXT,
        contributor_name TEXT NOT NULL,
        file_data BLOB NOT NULL,
        filename TEXT NOT NULL,
        file_size INTEGER NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS historical_events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        temple_id INTEGER,
        event_date TEXT,
        event_title TEXT NOT NULL,
        event_description TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        contributor_name TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (temple_id) REFERENCES temples (id)
    );

    CREATE INDEX IF NOT EXISTS idx_temple_media_temple ON temple_media (temple_id);
    CREATE INDEX IF NOT EXISTS idx_historical_events_temple ON historical_events (temple_id);
";

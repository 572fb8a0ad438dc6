use crate::types::Workout;
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::Path;

const STORE_KEY: &str = "workouts";

/// Key-value persistence boundary. The whole workout collection lives under
/// one fixed key as a JSON-encoded array; every save replaces the blob.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating data dir: {}", parent.display()))?;
        }

        let display = path.display();
        let conn =
            Connection::open(path).with_context(|| format!("opening SQLite DB: {display}"))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory SQLite DB")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("creating kv table")?;
        Ok(Self { conn })
    }

    pub fn save(&mut self, workouts: &[Workout]) -> Result<()> {
        let blob = serde_json::to_string(workouts).context("serializing workouts")?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![STORE_KEY, blob],
            )
            .context("writing workouts blob")?;
        Ok(())
    }

    /// Absent key and malformed blob both load as an empty collection; the
    /// store does not distinguish never-saved from corrupt.
    pub fn load(&self) -> Result<Vec<Workout>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![STORE_KEY],
                |row| row.get(0),
            )
            .optional()
            .context("reading workouts blob")?;

        let Some(blob) = blob else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(workouts) => Ok(workouts),
            Err(e) => {
                tracing::warn!(err = %e, "stored workouts blob is malformed; starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![STORE_KEY])
            .context("clearing workouts blob")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinates, Workout};

    fn sample() -> Vec<Workout> {
        vec![
            Workout::running(
                Coordinates {
                    lat: 39.0,
                    lon: -12.0,
                },
                5.2,
                24.0,
                178,
            ),
            Workout::cycling(
                Coordinates {
                    lat: 39.0,
                    lon: -15.0,
                },
                77.0,
                180.0,
                1000.0,
            ),
        ]
    }

    #[test]
    fn round_trip_preserves_records() {
        let mut store = SessionStore::open_in_memory().unwrap();
        let workouts = sample();
        store.save(&workouts).unwrap();
        assert_eq!(store.load().unwrap(), workouts);
    }

    #[test]
    fn empty_collection_round_trips() {
        let mut store = SessionStore::open_in_memory().unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_without_prior_save_is_empty() {
        let store = SessionStore::open_in_memory().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_the_whole_collection() {
        let mut store = SessionStore::open_in_memory().unwrap();
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut store = SessionStore::open_in_memory().unwrap();
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let store = SessionStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![STORE_KEY, "not json"],
            )
            .unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waymark.db");

        {
            let mut store = SessionStore::open(&path).unwrap();
            store.save(&sample()).unwrap();
        }

        let store = SessionStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }
}

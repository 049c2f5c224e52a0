//! SQLite-backed score store.

use std::{fmt, path::Path};

use rusqlite::{Connection, OptionalExtension, params};

use super::{ScoreKey, ScoreStore, ScoreStoreError};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS score_entries (
    key TEXT PRIMARY KEY NOT NULL,
    payload TEXT NOT NULL
)";

/// Score store persisted in a single SQLite table.
///
/// Entries survive across processes, so a later `detail` lookup can read
/// what an earlier `rank` pass wrote.
pub struct SqliteScoreStore {
    connection: Connection,
}

impl fmt::Debug for SqliteScoreStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteScoreStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteScoreStore {
    /// Open or create the database at `path` and ensure the table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ScoreStoreError> {
        let path = path.as_ref();
        let connection =
            Connection::open(path).map_err(|source| ScoreStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        connection.execute(CREATE_TABLE, [])?;
        Ok(Self { connection })
    }
}

impl ScoreStore for SqliteScoreStore {
    fn put(&mut self, key: &ScoreKey, payload: &str) -> Result<(), ScoreStoreError> {
        self.connection.execute(
            "INSERT INTO score_entries (key, payload) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
            params![key.as_str(), payload],
        )?;
        Ok(())
    }

    fn get(&self, key: &ScoreKey) -> Result<Option<String>, ScoreStoreError> {
        let payload = self
            .connection
            .query_row(
                "SELECT payload FROM score_entries WHERE key = ?1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }
}

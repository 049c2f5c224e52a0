//! Persistence port carrying computed scores to a detail view.
//!
//! A recompute pass writes one entry per city; a separate reader later looks
//! a single city up by its key. The port only moves opaque string payloads,
//! so adapters stay independent of the entry encoding. [`ScoreEntry`]
//! defines that encoding when the `serde` feature is enabled.

use std::fmt;

use thiserror::Error;

use crate::CityId;

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryScoreStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::SqliteScoreStore;

#[cfg(feature = "serde")]
mod entry;
#[cfg(feature = "serde")]
pub use entry::ScoreEntry;

/// Prefix shared by every score key.
pub const KEY_NAMESPACE: &str = "cityData-";

/// Namespaced persistence key for one city.
///
/// # Examples
/// ```
/// use moonscore_core::{CityId, ScoreKey};
///
/// let key = ScoreKey::for_city(&CityId::new("FR001C"));
/// assert_eq!(key.as_str(), "cityData-FR001C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreKey(String);

impl ScoreKey {
    /// Build the key for `id`.
    pub fn for_city(id: &CityId) -> Self {
        Self(format!("{KEY_NAMESPACE}{id}"))
    }

    /// Borrow the full key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error raised by a score store backend.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    /// Opening the SQLite database failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to open score database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: std::path::PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Generic SQLite error while reading or writing an entry.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Last-write-wins key-value storage for score payloads.
///
/// A missing key is an expected state and reads back as `Ok(None)`.
///
/// # Examples
/// ```
/// use moonscore_core::{CityId, MemoryScoreStore, ScoreKey, ScoreStore};
///
/// let mut store = MemoryScoreStore::default();
/// let key = ScoreKey::for_city(&CityId::new("IT003C"));
/// store.put(&key, "{}").unwrap();
/// store.put(&key, "{\"rankValue\":1.0}").unwrap();
/// assert_eq!(store.get(&key).unwrap().as_deref(), Some("{\"rankValue\":1.0}"));
/// ```
pub trait ScoreStore {
    /// Replace the payload stored under `key`.
    fn put(&mut self, key: &ScoreKey, payload: &str) -> Result<(), ScoreStoreError>;

    /// Return the payload stored under `key`, if any.
    fn get(&self, key: &ScoreKey) -> Result<Option<String>, ScoreStoreError>;
}

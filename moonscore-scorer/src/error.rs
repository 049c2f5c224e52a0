//! Error types raised while persisting or reading back scores.
#![forbid(unsafe_code)]

use std::error::Error as StdError;

use moonscore_core::{ScoreKey, ScoreStoreError};
use thiserror::Error;

/// Render an error followed by its immediate source, for log lines.
pub(crate) fn describe(err: &dyn StdError) -> String {
    err.source()
        .map_or_else(|| err.to_string(), |source| format!("{err}: {source}"))
}

/// Failure to write one city's entry during a recompute pass.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The entry could not be encoded.
    #[error("failed to encode score entry {key}")]
    Encode {
        /// Key of the affected entry.
        key: ScoreKey,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The store rejected the write.
    #[error("failed to write score entry {key}")]
    Store {
        /// Key of the affected entry.
        key: ScoreKey,
        /// Source error from the store backend.
        #[source]
        source: ScoreStoreError,
    },
}

/// Reason a detail lookup fell back to unrated scores.
#[derive(Debug, Error)]
pub enum DetailLookupError {
    /// No entry was stored for the city.
    #[error("no score entry stored under {key}")]
    Unresolved {
        /// Key that was looked up.
        key: ScoreKey,
    },
    /// The stored payload could not be decoded.
    #[error("score entry {key} is malformed")]
    Malformed {
        /// Key that was looked up.
        key: ScoreKey,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The store failed while reading.
    #[error("failed to read score entry {key}")]
    Store {
        /// Key that was looked up.
        key: ScoreKey,
        /// Source error from the store backend.
        #[source]
        source: ScoreStoreError,
    },
}

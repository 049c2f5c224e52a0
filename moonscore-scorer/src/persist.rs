//! Write-back of computed scores to a [`ScoreStore`].
#![forbid(unsafe_code)]

use moonscore_core::{
    CityId, CityScores, LanguageCode, ScoreEntry, ScoreKey, ScoreStore, ScoreTable,
};

use crate::error::{PersistError, describe};

/// Counts from one write-back pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistReport {
    /// Entries written successfully.
    pub written: usize,
    /// Entries that failed and were skipped.
    pub failed: usize,
}

/// Overwrite the stored entry of every scored city.
///
/// Failed writes are logged at `warn` and skipped; the pass always visits
/// every city.
pub fn persist_scores(
    store: &mut dyn ScoreStore,
    table: &ScoreTable,
    language: &LanguageCode,
) -> PersistReport {
    let mut report = PersistReport::default();
    for (id, scores) in table.iter() {
        match write_entry(store, id, scores, language) {
            Ok(()) => report.written += 1,
            Err(err) => {
                log::warn!("{}", describe(&err));
                report.failed += 1;
            }
        }
    }
    report
}

fn write_entry(
    store: &mut dyn ScoreStore,
    id: &CityId,
    scores: &CityScores,
    language: &LanguageCode,
) -> Result<(), PersistError> {
    let key = ScoreKey::for_city(id);
    let payload = ScoreEntry::from_scores(scores, language)
        .to_payload()
        .map_err(|source| PersistError::Encode {
            key: key.clone(),
            source,
        })?;
    store
        .put(&key, &payload)
        .map_err(|source| PersistError::Store { key, source })
}

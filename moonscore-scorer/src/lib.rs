//! Scoring for the moonscore city comparison engine.
//!
//! A recompute pass runs in three steps over an immutable catalogue:
//! - **Normalisation** turns raw metrics into `0.0..=5.0` axis scores.
//!   Popularity, safety and public transport are standardised against the
//!   whole catalogue and projected from `±3σ` onto the score range. Cost uses
//!   a fixed linear scale and language fit scales the speaker share.
//! - **Composition** averages the five axes with equal weights into a rank
//!   value, rounds it to one decimal and snaps it to a display tier.
//! - **Write-back** stores one entry per city in a
//!   [`ScoreStore`](moonscore_core::ScoreStore) so a detail view can read it
//!   back with [`load_detail_ratings`].
//!
//! No step fails: missing metrics count as zero, flat distributions yield
//! zero z-scores, and storage problems are logged and skipped.
//!
//! # Examples
//!
//! ```
//! use moonscore_core::{CityId, CityNames, CityRecord, LanguageCode, MemoryScoreStore};
//! use moonscore_scorer::{load_detail_ratings, recompute};
//!
//! let catalog = vec![
//!     CityRecord::new("A", CityNames::new("Aveiro", "Portugal")).with_safety_index(70.0),
//!     CityRecord::new("B", CityNames::new("Braga", "Portugal")).with_safety_index(60.0),
//! ];
//! let mut store = MemoryScoreStore::default();
//! let table = recompute(&catalog, &LanguageCode::new("pt"), &mut store);
//! assert_eq!(table.len(), 2);
//!
//! let detail = load_detail_ratings(&store, &CityId::new("A"));
//! assert_eq!(detail.selected_language, Some(LanguageCode::new("pt")));
//! ```

#![forbid(unsafe_code)]

use moonscore_core::{CityRecord, LanguageCode, ScoreStore, ScoreTable};

mod composite;
mod detail;
mod error;
mod normalizer;
mod persist;
mod stats;

pub use composite::{AXIS_WEIGHT, compose, rank_value};
pub use detail::{DetailRatings, load_detail_ratings};
pub use error::{DetailLookupError, PersistError};
pub use normalizer::{NormalisedCity, cost_score, language_score, normalise_catalog, z_to_score};
pub use persist::{PersistReport, persist_scores};
pub use stats::Distribution;

/// Score a catalogue without persisting anything.
#[must_use]
pub fn score_catalog(catalog: &[CityRecord], language: &LanguageCode) -> ScoreTable {
    compose(normalise_catalog(catalog, language))
}

/// Score a catalogue and overwrite each city's stored entry.
///
/// Call this when the catalogue loads or the selected language changes;
/// filter and sort changes reuse the returned table.
pub fn recompute(
    catalog: &[CityRecord],
    language: &LanguageCode,
    store: &mut dyn ScoreStore,
) -> ScoreTable {
    let table = score_catalog(catalog, language);
    let report = persist_scores(store, &table, language);
    log::debug!(
        "scored {} cities for language {language}; stored {}, skipped {}",
        table.len(),
        report.written,
        report.failed
    );
    table
}

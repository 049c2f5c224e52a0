//! Core domain types for the moonscore city comparison engine.
//!
//! The crate models the immutable city catalogue, the per-city score tables
//! derived from it, the interactive filter state, and the persistence port
//! used to hand scores from the catalogue view to a detail view. Scoring and
//! ranking live in `moonscore-scorer` and `moonscore-ranker`; this crate only
//! holds the vocabulary they share.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod city;
mod climate;
mod filter;
mod language;
mod scores;
pub mod store;
mod temperature;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::{PopulationTier, WeatherTier};
pub use city::{CityId, CityNames, CityRecord, metric_or_zero};
pub use climate::{Month, MonthlyClimate, TemperatureRange};
pub use filter::{BudgetCeiling, FilterState, ParseFilterError, SortKey, parse_choice};
pub use language::LanguageCode;
pub use scores::{
    Axis, AxisScores, CityScores, CompositeRating, CompositeScore, MAX_SCORE, ScoreTable, Tier,
    ZScores, format_score,
};
#[cfg(feature = "serde")]
pub use store::ScoreEntry;
#[cfg(feature = "store-sqlite")]
pub use store::SqliteScoreStore;
pub use store::{MemoryScoreStore, ScoreKey, ScoreStore, ScoreStoreError};
pub use temperature::{GradientStop, Rgb, TemperatureBar, interpolate_color};

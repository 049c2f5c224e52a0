//! Facade crate for the moonscore city comparison engine.
//!
//! This crate re-exports the core domain types, the scorer, and the filter
//! engine, and ties them together in [`Comparison`], which recomputes scores
//! only when the catalogue or language changes.

#![forbid(unsafe_code)]

mod session;

pub use session::Comparison;

pub use moonscore_core::{
    Axis, AxisScores, BudgetCeiling, CityId, CityNames, CityRecord, CityScores, CompositeRating,
    CompositeScore, FilterState, LanguageCode, MAX_SCORE, MemoryScoreStore, Month, MonthlyClimate,
    ParseFilterError, PopulationTier, ScoreKey, ScoreStore, ScoreStoreError, ScoreTable, SortKey,
    TemperatureBar, TemperatureRange, Tier, WeatherTier, ZScores, format_score, parse_choice,
};
pub use moonscore_ranker::{FilterOutcome, RankedCity, evaluate};
pub use moonscore_scorer::{DetailRatings, load_detail_ratings, recompute, score_catalog};

#[cfg(feature = "serde")]
pub use moonscore_core::ScoreEntry;

#[cfg(feature = "store-sqlite")]
pub use moonscore_core::SqliteScoreStore;

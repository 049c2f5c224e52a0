//! Read-back of a single city's scores for a detail view.
#![forbid(unsafe_code)]

use moonscore_core::{
    Axis, AxisScores, CityId, CompositeRating, CompositeScore, LanguageCode, ScoreEntry, ScoreKey,
    ScoreStore, format_score,
};

use crate::error::{DetailLookupError, describe};

/// Ratings shown on a city's detail view.
///
/// Every field is `None` when the city was never scored or its entry could
/// not be read; callers render those as `N/A`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailRatings {
    /// Stored axis scores.
    pub axes: Option<AxisScores>,
    /// Language the entry was scored against.
    pub selected_language: Option<LanguageCode>,
    /// Composite rating rebuilt from the stored rank value.
    pub composite: Option<CompositeRating>,
}

impl DetailRatings {
    /// Ratings for a city with no usable entry.
    #[must_use]
    pub fn unrated() -> Self {
        Self::default()
    }

    /// Score for one axis, if rated.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<f64> {
        self.axes.map(|axes| axes.get(axis))
    }

    /// One-decimal rendering of an axis score, or `N/A`.
    #[must_use]
    pub fn formatted_axis(&self, axis: Axis) -> String {
        format_score(self.axis(axis))
    }

    /// One-decimal rendering of the composite value, or `N/A`.
    #[must_use]
    pub fn formatted_composite(&self) -> String {
        format_score(self.composite.map(|rating| rating.value))
    }

    fn from_entry(entry: ScoreEntry) -> Self {
        Self {
            axes: Some(entry.axis_scores),
            selected_language: Some(entry.selected_language),
            composite: CompositeScore::from_rank_value(entry.rank_value).rating,
        }
    }
}

/// Load the ratings stored for `id`.
///
/// A missing, malformed, or unreadable entry is logged at `warn` and yields
/// [`DetailRatings::unrated`]; this never fails.
#[must_use]
pub fn load_detail_ratings(store: &dyn ScoreStore, id: &CityId) -> DetailRatings {
    match lookup_entry(store, id) {
        Ok(entry) => DetailRatings::from_entry(entry),
        Err(err) => {
            log::warn!("{}", describe(&err));
            DetailRatings::unrated()
        }
    }
}

fn lookup_entry(store: &dyn ScoreStore, id: &CityId) -> Result<ScoreEntry, DetailLookupError> {
    let key = ScoreKey::for_city(id);
    let payload = store
        .get(&key)
        .map_err(|source| DetailLookupError::Store {
            key: key.clone(),
            source,
        })?
        .ok_or_else(|| DetailLookupError::Unresolved { key: key.clone() })?;
    ScoreEntry::from_payload(&payload).map_err(|source| DetailLookupError::Malformed { key, source })
}

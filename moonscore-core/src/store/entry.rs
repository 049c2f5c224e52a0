//! JSON payload written for each scored city.

use serde::{Deserialize, Serialize};

use crate::{AxisScores, CityScores, LanguageCode};

/// Scores handed from the catalogue view to a detail view.
///
/// # Examples
/// ```
/// use moonscore_core::{AxisScores, LanguageCode, ScoreEntry};
///
/// let entry = ScoreEntry {
///     axis_scores: AxisScores { safety: 3.0, ..AxisScores::default() },
///     selected_language: LanguageCode::new("de"),
///     rank_value: 0.6,
/// };
/// let payload = entry.to_payload().unwrap();
/// assert!(payload.contains("\"selectedLanguage\":\"de\""));
/// assert_eq!(ScoreEntry::from_payload(&payload).unwrap(), entry);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// Per-axis scores at the time of writing.
    pub axis_scores: AxisScores,
    /// Language the language axis was scored against.
    pub selected_language: LanguageCode,
    /// Unrounded composite rank value.
    pub rank_value: f64,
}

impl ScoreEntry {
    /// Capture the persisted subset of a city's scores.
    pub fn from_scores(scores: &CityScores, language: &LanguageCode) -> Self {
        Self {
            axis_scores: scores.axes,
            selected_language: language.clone(),
            rank_value: scores.composite.rank_value,
        }
    }

    /// Encode as a JSON payload.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a JSON payload.
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

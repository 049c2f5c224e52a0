//! Composite rank value.
#![forbid(unsafe_code)]

use moonscore_core::{AxisScores, CityScores, CompositeScore, ScoreTable};

use crate::normalizer::NormalisedCity;

/// Weight applied to each of the five axes.
pub const AXIS_WEIGHT: f64 = 0.2;

/// Equal-weight mean of the five axis scores.
///
/// # Examples
/// ```
/// use moonscore_core::AxisScores;
/// use moonscore_scorer::rank_value;
///
/// let axes = AxisScores {
///     popularity: 5.0,
///     cost: 5.0,
///     safety: 5.0,
///     public_transport: 5.0,
///     language: 5.0,
/// };
/// assert!((rank_value(&axes) - 5.0).abs() < 1e-12);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the rank value is a weighted sum of axis scores"
)]
#[must_use]
pub fn rank_value(axes: &AxisScores) -> f64 {
    axes.iter().map(|(_, score)| AXIS_WEIGHT * score).sum()
}

/// Attach composite scores to normalised cities and key them by id.
///
/// When the catalogue repeats an id, the later entry wins.
#[must_use]
pub fn compose(normalised: Vec<NormalisedCity>) -> ScoreTable {
    normalised
        .into_iter()
        .map(|city| {
            let composite = CompositeScore::from_rank_value(rank_value(&city.axes));
            let scores = CityScores {
                axes: city.axes,
                z_scores: city.z_scores,
                composite,
            };
            (city.id, scores)
        })
        .collect()
}

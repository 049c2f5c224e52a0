//! Per-axis normalisation of raw catalogue metrics.
#![forbid(unsafe_code)]

use moonscore_core::{
    AxisScores, CityId, CityRecord, LanguageCode, MAX_SCORE, ZScores, metric_or_zero,
};

use crate::stats::Distribution;

/// Spread of z-scores mapped onto the score range, in standard deviations.
const Z_SPAN: f64 = 6.0;
/// Offset that moves `-3σ` to zero.
const Z_OFFSET: f64 = 3.0;
/// Pivot for the cost proxy fed into the cost z-score.
const COST_PROXY_PIVOT: f64 = 80.0;
/// Cost index that scores zero on the linear display scale.
const COST_CEILING: f64 = 100.0;
/// Cost index range covered by the linear display scale.
const COST_RANGE: f64 = 75.0;
/// Speaker share worth one point on the language axis.
const PERCENT_PER_POINT: f64 = 20.0;

/// Axis and z-scores for one city, in catalogue order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalisedCity {
    /// City the scores belong to.
    pub id: CityId,
    /// Display scores in `0.0..=5.0`.
    pub axes: AxisScores,
    /// Intermediate z-scores.
    pub z_scores: ZScores,
}

struct RawMetrics {
    popularity: f64,
    cost_score: f64,
    cost_proxy: f64,
    safety: f64,
    public_transport: f64,
    speaker_percent: f64,
}

impl RawMetrics {
    #[expect(
        clippy::float_arithmetic,
        reason = "the cost proxy inverts the cost index around a fixed pivot"
    )]
    fn read(city: &CityRecord, language: &LanguageCode) -> Self {
        // Unknown cost zeroes the derived values, not the index they derive from.
        let cost = city
            .cost_of_living_plus_rent
            .filter(|value| value.is_finite());
        Self {
            popularity: metric_or_zero(city.erasmus_population),
            cost_score: cost.map_or(0.0, cost_score),
            cost_proxy: cost.map_or(0.0, |value| COST_PROXY_PIVOT - value),
            safety: metric_or_zero(city.safety_index),
            public_transport: metric_or_zero(city.public_transport_satisfaction),
            speaker_percent: city.speaker_percentage(language),
        }
    }
}

struct AxisDistributions {
    popularity: Distribution,
    cost_proxy: Distribution,
    safety: Distribution,
    public_transport: Distribution,
}

impl AxisDistributions {
    fn measure(metrics: &[RawMetrics]) -> Self {
        Self {
            popularity: measure_axis(metrics, "popularity", |m| m.popularity),
            cost_proxy: measure_axis(metrics, "cost proxy", |m| m.cost_proxy),
            safety: measure_axis(metrics, "safety", |m| m.safety),
            public_transport: measure_axis(metrics, "public transport", |m| m.public_transport),
        }
    }
}

fn measure_axis(
    metrics: &[RawMetrics],
    axis: &str,
    select: impl Fn(&RawMetrics) -> f64,
) -> Distribution {
    let values: Vec<f64> = metrics.iter().map(select).collect();
    let distribution = Distribution::of(&values);
    if distribution.is_degenerate() {
        log::debug!("{axis} has zero spread across {} cities", values.len());
    }
    distribution
}

/// Map a z-score onto `0.0..=5.0`, treating `±3σ` as the ends of the scale.
///
/// `NaN` is read as a z-score of zero.
///
/// # Examples
/// ```
/// use moonscore_scorer::z_to_score;
///
/// assert_eq!(z_to_score(0.0), 2.5);
/// assert_eq!(z_to_score(-4.0), 0.0);
/// assert_eq!(z_to_score(12.0), 5.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "z-scores are projected linearly onto the score range"
)]
#[must_use]
pub fn z_to_score(z: f64) -> f64 {
    if z.is_nan() {
        return z_to_score(0.0);
    }
    ((z + Z_OFFSET) / Z_SPAN * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Linear cost score: an index of 25 or less scores 5, 100 or more scores 0.
#[expect(
    clippy::float_arithmetic,
    reason = "the cost display scale is a fixed linear projection"
)]
#[must_use]
pub fn cost_score(cost_of_living_plus_rent: f64) -> f64 {
    ((COST_CEILING - cost_of_living_plus_rent) / COST_RANGE * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Language-fit score: one point per 20% of speakers.
#[expect(
    clippy::float_arithmetic,
    reason = "speaker shares scale linearly onto the score range"
)]
#[must_use]
pub fn language_score(speaker_percent: f64) -> f64 {
    (speaker_percent / PERCENT_PER_POINT).clamp(0.0, MAX_SCORE)
}

/// Normalise every city against statistics of the whole catalogue.
///
/// The result is parallel to `catalog`. Records are never mutated.
#[must_use]
pub fn normalise_catalog(catalog: &[CityRecord], language: &LanguageCode) -> Vec<NormalisedCity> {
    let metrics: Vec<RawMetrics> = catalog
        .iter()
        .map(|city| RawMetrics::read(city, language))
        .collect();
    let distributions = AxisDistributions::measure(&metrics);

    catalog
        .iter()
        .zip(&metrics)
        .map(|(city, raw)| {
            let z_scores = ZScores {
                popularity: distributions.popularity.z_score(raw.popularity),
                cost_proxy: distributions.cost_proxy.z_score(raw.cost_proxy),
                safety: distributions.safety.z_score(raw.safety),
                public_transport: distributions.public_transport.z_score(raw.public_transport),
            };
            let axes = AxisScores {
                popularity: z_to_score(z_scores.popularity),
                cost: raw.cost_score,
                safety: z_to_score(z_scores.safety),
                public_transport: z_to_score(z_scores.public_transport),
                language: language_score(raw.speaker_percent),
            };
            NormalisedCity {
                id: city.id.clone(),
                axes,
                z_scores,
            }
        })
        .collect()
}

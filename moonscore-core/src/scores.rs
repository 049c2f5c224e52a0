//! Derived per-city scores.
//!
//! Scores are never written back onto [`CityRecord`](crate::CityRecord);
//! each recompute pass produces a fresh [`ScoreTable`] keyed by
//! [`CityId`].

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CityId;

/// Upper bound of every axis score and of the composite rank value.
pub const MAX_SCORE: f64 = 5.0;

const TIER_STEP: f64 = 0.5;
const TIER_COUNT: u8 = 11;

const TIER_GLYPHS: [&str; TIER_COUNT as usize] = [
    "🌑🌑🌑🌑🌑",
    "🌗🌑🌑🌑🌑",
    "🌕🌑🌑🌑🌑",
    "🌕🌗🌑🌑🌑",
    "🌕🌕🌑🌑🌑",
    "🌕🌕🌗🌑🌑",
    "🌕🌕🌕🌑🌑",
    "🌕🌕🌕🌗🌑",
    "🌕🌕🌕🌕🌑",
    "🌕🌕🌕🌕🌗",
    "🌕🌕🌕🌕🌕",
];

/// One of the five comparison axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Exchange-student population.
    Popularity,
    /// Cost of living plus rent.
    Cost,
    /// Safety index.
    Safety,
    /// Public transport satisfaction.
    PublicTransport,
    /// Share of speakers of the selected language.
    Language,
}

impl Axis {
    /// Every axis in display order.
    pub const ALL: [Self; 5] = [
        Self::Popularity,
        Self::Cost,
        Self::Safety,
        Self::PublicTransport,
        Self::Language,
    ];

    /// Return the axis as a kebab-case `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Cost => "cost",
            Self::Safety => "safety",
            Self::PublicTransport => "public-transport",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five comparable scores in `0.0..=5.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AxisScores {
    /// Popularity score.
    pub popularity: f64,
    /// Cost score; cheaper is higher.
    pub cost: f64,
    /// Safety score.
    pub safety: f64,
    /// Public transport score.
    pub public_transport: f64,
    /// Language-fit score.
    pub language: f64,
}

impl AxisScores {
    /// Score for a single axis.
    ///
    /// # Examples
    /// ```
    /// use moonscore_core::{Axis, AxisScores};
    ///
    /// let scores = AxisScores { safety: 4.5, ..AxisScores::default() };
    /// assert_eq!(scores.get(Axis::Safety), 4.5);
    /// assert_eq!(scores.get(Axis::Cost), 0.0);
    /// ```
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Popularity => self.popularity,
            Axis::Cost => self.cost,
            Axis::Safety => self.safety,
            Axis::PublicTransport => self.public_transport,
            Axis::Language => self.language,
        }
    }

    /// Iterate over `(axis, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
    }
}

/// Standardised deviations for the statistically normalised metrics.
///
/// `cost_proxy` is the z-score of `80 - costOfLivingPlusRent`. It is kept
/// for inspection; the displayed cost score uses a fixed linear scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZScores {
    /// Popularity z-score.
    pub popularity: f64,
    /// Cost-proxy z-score.
    pub cost_proxy: f64,
    /// Safety z-score.
    pub safety: f64,
    /// Public transport z-score.
    pub public_transport: f64,
}

/// Eleven-step display bucket, `0.0` to `5.0` in half steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tier(u8);

impl Tier {
    /// Snap a value to the closest anchor.
    ///
    /// Equidistant values resolve to the lower anchor.
    ///
    /// # Examples
    /// ```
    /// use moonscore_core::Tier;
    ///
    /// assert_eq!(Tier::nearest(3.7).value(), 3.5);
    /// assert_eq!(Tier::nearest(3.8).value(), 4.0);
    /// assert_eq!(Tier::nearest(0.25).value(), 0.0);
    /// assert_eq!(Tier::nearest(9.0).glyphs(), "🌕🌕🌕🌕🌕");
    /// ```
    pub fn nearest(value: f64) -> Self {
        let mut best = Self(0);
        let mut best_distance = f64::INFINITY;
        for step in 0..TIER_COUNT {
            let distance = (Self(step).value() - value).abs();
            if distance < best_distance {
                best = Self(step);
                best_distance = distance;
            }
        }
        best
    }

    /// Anchor value of the tier.
    pub fn value(self) -> f64 {
        f64::from(self.0) * TIER_STEP
    }

    /// Five moon glyphs; a full moon counts one point and a half moon half.
    pub fn glyphs(self) -> &'static str {
        TIER_GLYPHS
            .get(usize::from(self.0))
            .copied()
            .unwrap_or(TIER_GLYPHS[0])
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// Displayable composite: the rank value rounded to one decimal and its tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompositeRating {
    /// Rank value rounded to one decimal; always positive.
    pub value: f64,
    /// Display tier for `value`.
    pub tier: Tier,
}

/// Weighted rank value and its optional displayable rating.
///
/// # Examples
/// ```
/// use moonscore_core::CompositeScore;
///
/// let score = CompositeScore::from_rank_value(3.14);
/// assert_eq!(score.rating.map(|r| r.value), Some(3.1));
/// assert_eq!(score.sort_value(), 3.1);
///
/// let empty = CompositeScore::from_rank_value(0.04);
/// assert!(empty.rating.is_none());
/// assert_eq!(empty.sort_value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompositeScore {
    /// Unrounded weighted mean of the axis scores.
    pub rank_value: f64,
    /// `None` when the rounded rank value is not positive.
    pub rating: Option<CompositeRating>,
}

impl CompositeScore {
    /// Round a rank value to one decimal and derive its tier.
    pub fn from_rank_value(rank_value: f64) -> Self {
        let rounded = round_to_tenth(rank_value);
        let rating = (rounded > 0.0).then(|| CompositeRating {
            value: rounded,
            tier: Tier::nearest(rounded),
        });
        Self { rank_value, rating }
    }

    /// Rounded value used for sorting; `0.0` when unrated.
    pub fn sort_value(&self) -> f64 {
        self.rating.map_or(0.0, |rating| rating.value)
    }
}

/// Round through the one-decimal formatter so the stored value always
/// matches what [`format_score`] displays.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// All scores derived for one city in a recompute pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CityScores {
    /// Per-axis scores.
    pub axes: AxisScores,
    /// Intermediate z-scores.
    pub z_scores: ZScores,
    /// Composite rank value and rating.
    pub composite: CompositeScore,
}

/// Scores for a whole catalogue, keyed by city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: BTreeMap<CityId, CityScores>,
}

impl ScoreTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a city's scores.
    pub fn insert(&mut self, id: CityId, scores: CityScores) {
        self.entries.insert(id, scores);
    }

    /// Look up a city's scores.
    pub fn get(&self, id: &CityId) -> Option<&CityScores> {
        self.entries.get(id)
    }

    /// Number of scored cities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no city has been scored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over scored cities in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&CityId, &CityScores)> {
        self.entries.iter()
    }
}

impl FromIterator<(CityId, CityScores)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (CityId, CityScores)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Render a score with one decimal, or `N/A` when absent.
///
/// # Examples
/// ```
/// use moonscore_core::format_score;
///
/// assert_eq!(format_score(Some(2.449)), "2.4");
/// assert_eq!(format_score(None), "N/A");
/// ```
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "N/A".to_owned(), |value| format!("{value:.1}"))
}

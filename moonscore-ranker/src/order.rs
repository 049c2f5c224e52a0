//! Sort keys for the visible subset.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use moonscore_core::{CityRecord, ScoreTable, SortKey, metric_or_zero};

/// Sort `visible` in place by `key`.
///
/// Each entry pairs a city with its catalogue position. The sort is stable,
/// so cities with equal keys keep their incoming order.
pub fn sort_visible(visible: &mut [(usize, &CityRecord)], scores: &ScoreTable, key: SortKey) {
    visible.sort_by(|(_, left), (_, right)| compare(left, right, scores, key));
}

fn compare(left: &CityRecord, right: &CityRecord, scores: &ScoreTable, key: SortKey) -> Ordering {
    match key {
        SortKey::Popularity => popularity(right).total_cmp(&popularity(left)),
        SortKey::Cost => cost(left).total_cmp(&cost(right)),
        SortKey::Composite => composite(right, scores).total_cmp(&composite(left, scores)),
    }
}

fn popularity(city: &CityRecord) -> f64 {
    metric_or_zero(city.erasmus_population)
}

// Unknown costs sort after every known cost.
fn cost(city: &CityRecord) -> f64 {
    city.cost_of_living_plus_rent
        .filter(|value| value.is_finite())
        .unwrap_or(f64::INFINITY)
}

fn composite(city: &CityRecord, scores: &ScoreTable) -> f64 {
    scores
        .get(&city.id)
        .map_or(0.0, |entry| entry.composite.sort_value())
}

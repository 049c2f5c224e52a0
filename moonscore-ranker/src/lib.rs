//! Filter and sort engine for the moonscore city comparison engine.
//!
//! [`evaluate`] is a pure function of the catalogue, a pre-computed
//! [`ScoreTable`], and the current [`FilterState`]. It decides which cities
//! are visible, orders them by the active [`SortKey`], and assigns dense
//! 1-based ranks. Scores are never recomputed here, so filtering cannot
//! shift the statistical baseline.
//!
//! # Examples
//!
//! ```
//! use moonscore_core::{CityNames, CityRecord, FilterState, ScoreTable, SortKey};
//! use moonscore_ranker::evaluate;
//!
//! let catalog = vec![
//!     CityRecord::new("a", CityNames::new("Ghent", "Belgium")).with_cost_of_living_plus_rent(55.0),
//!     CityRecord::new("b", CityNames::new("Graz", "Austria")).with_cost_of_living_plus_rent(48.0),
//!     CityRecord::new("c", CityNames::new("Turku", "Finland")),
//! ];
//! let state = FilterState { sort: SortKey::Cost, ..FilterState::default() };
//!
//! let outcome = evaluate(&catalog, &ScoreTable::new(), &state);
//! let order: Vec<_> = outcome.ranked.iter().map(|city| city.id.as_str()).collect();
//! assert_eq!(order, ["b", "a", "c"]);
//! assert_eq!(outcome.visible_count(), 3);
//! ```

#![forbid(unsafe_code)]

use moonscore_core::{CityId, CityRecord, FilterState, ScoreTable};
#[cfg(doc)]
use moonscore_core::SortKey;

mod order;
mod predicate;

pub use order::sort_visible;
pub use predicate::Visibility;

/// A visible city and its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCity {
    /// City identifier.
    pub id: CityId,
    /// Dense rank among visible cities, starting at 1.
    pub rank: usize,
    /// Index of the city's record in the evaluated catalogue.
    pub position: usize,
}

/// Result of one filter and sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visible cities in display order.
    pub ranked: Vec<RankedCity>,
    /// Size of the whole catalogue.
    pub total_count: usize,
}

impl FilterOutcome {
    /// Number of visible cities.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.ranked.len()
    }

    /// Rank of `id`, or `None` when it is hidden.
    #[must_use]
    pub fn rank_of(&self, id: &CityId) -> Option<usize> {
        self.ranked
            .iter()
            .find(|city| &city.id == id)
            .map(|city| city.rank)
    }

    /// Whether `id` passed the filters.
    #[must_use]
    pub fn is_visible(&self, id: &CityId) -> bool {
        self.rank_of(id).is_some()
    }

    /// Visible identifiers in display order.
    pub fn ids(&self) -> impl Iterator<Item = &CityId> {
        self.ranked.iter().map(|city| &city.id)
    }
}

/// Filter, order, and rank the catalogue.
///
/// Cities tie-break on catalogue order, so repeated calls with the same
/// inputs produce the same ranking.
#[must_use]
pub fn evaluate(catalog: &[CityRecord], scores: &ScoreTable, state: &FilterState) -> FilterOutcome {
    let visibility = Visibility::new(state);
    let mut visible: Vec<(usize, &CityRecord)> = catalog
        .iter()
        .enumerate()
        .filter(|(_, city)| visibility.admits(city))
        .collect();
    sort_visible(&mut visible, scores, state.sort);

    let ranked: Vec<RankedCity> = visible
        .into_iter()
        .zip(1..)
        .map(|((position, city), rank)| RankedCity {
            id: city.id.clone(),
            rank,
            position,
        })
        .collect();
    log::debug!(
        "{} of {} cities visible, sorted by {}",
        ranked.len(),
        catalog.len(),
        state.sort
    );
    FilterOutcome {
        ranked,
        total_count: catalog.len(),
    }
}

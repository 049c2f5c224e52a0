//! Visibility predicate over raw city records.
#![forbid(unsafe_code)]

use moonscore_core::{CityNames, CityRecord, FilterState, PopulationTier, WeatherTier};

/// Compiled form of a [`FilterState`]'s visibility rules.
///
/// The search term is normalised once so each city test only lowercases the
/// city's own names.
#[derive(Debug, Clone)]
pub struct Visibility<'a> {
    needle: String,
    state: &'a FilterState,
}

impl<'a> Visibility<'a> {
    /// Prepare the predicate for `state`.
    #[must_use]
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            needle: state.search_term.trim().to_lowercase(),
            state,
        }
    }

    /// Whether `city` passes search, budget, weather, and population.
    #[must_use]
    pub fn admits(&self, city: &CityRecord) -> bool {
        self.matches_search(&city.names)
            && self
                .state
                .budget
                .is_none_or(|ceiling| ceiling.admits(city.monthly_budget))
            && self
                .state
                .weather
                .is_none_or(|tier| WeatherTier::from_winter_low(city.winter_low()) == tier)
            && self
                .state
                .population
                .is_none_or(|tier| PopulationTier::from_population(city.population) == tier)
    }

    fn matches_search(&self, names: &CityNames) -> bool {
        self.needle.is_empty()
            || names
                .searchable()
                .any(|name| name.to_lowercase().contains(&self.needle))
    }
}

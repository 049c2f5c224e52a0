//! Proptest strategies for catalogues and filter states.

use moonscore_core::{
    BudgetCeiling, CityNames, CityRecord, FilterState, PopulationTier, SortKey, WeatherTier,
};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["Aarhus", "Bologna", "Cluj", "Delft", "Eindhoven", "Bergen"];

/// Strategy for a city with coarse metric values so ties are common.
fn city_strategy() -> impl Strategy<Value = CityRecord> {
    (
        0_usize..NAMES.len(),
        prop::option::of(0_u8..5),
        prop::option::of(0_u8..5),
        prop::option::of(500_u32..1200),
        prop::option::of(-8_i8..12),
        prop::option::of(50_000_u64..2_000_000),
    )
        .prop_map(|(name, popularity, cost, budget, winter, population)| {
            let display = NAMES.get(name).copied().unwrap_or("Nowhere");
            let mut city = CityRecord::new("", CityNames::new(display, "Europe"));
            city.erasmus_population = popularity.map(|value| f64::from(value) * 1000.0);
            city.cost_of_living_plus_rent = cost.map(|value| f64::from(value) * 10.0 + 30.0);
            city.monthly_budget = budget.map(f64::from);
            city.winter_low_temperature = winter.map(f64::from);
            city.population = population;
            city
        })
}

/// Strategy for a catalogue of up to `max_count` uniquely identified cities.
pub fn catalog_strategy(max_count: usize) -> impl Strategy<Value = Vec<CityRecord>> {
    proptest::collection::vec(city_strategy(), 0..=max_count).prop_map(|cities| {
        cities
            .into_iter()
            .enumerate()
            .map(|(index, mut city)| {
                city.id = format!("city-{index}").as_str().into();
                city
            })
            .collect()
    })
}

/// Strategy for any sort key.
pub fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Popularity),
        Just(SortKey::Cost),
        Just(SortKey::Composite),
    ]
}

/// Strategy for an arbitrary filter state.
pub fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(""), Just("b"), Just("e"), Just("EUROPE"), Just("delft")],
        prop::option::of(prop_oneof![
            Just(BudgetCeiling::new(700)),
            Just(BudgetCeiling::new(850)),
            Just(BudgetCeiling::new(1000)),
        ]),
        prop::option::of(prop_oneof![
            Just(WeatherTier::Cold),
            Just(WeatherTier::Mild),
            Just(WeatherTier::Warm),
        ]),
        prop::option::of(prop_oneof![
            Just(PopulationTier::Small),
            Just(PopulationTier::Medium),
            Just(PopulationTier::Large),
            Just(PopulationTier::Metropolis),
        ]),
        sort_strategy(),
    )
        .prop_map(|(search, budget, weather, population, sort)| FilterState {
            search_term: search.to_owned(),
            budget,
            weather,
            population,
            sort,
        })
}

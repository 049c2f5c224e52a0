//! Deterministic synthetic catalogues for benchmarks.

use moonscore_core::{CityNames, CityRecord, LanguageCode, Month, MonthlyClimate, TemperatureRange};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Language every synthetic city reports a speaker share for.
pub const BENCHMARK_LANGUAGE: &str = "en";

/// Generate `count` cities with plausible metric ranges.
///
/// Roughly one city in ten lacks a budget so the unbounded-budget path is
/// exercised too.
#[must_use]
pub fn generate_catalog(count: usize, seed: u64) -> Vec<CityRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let language = LanguageCode::new(BENCHMARK_LANGUAGE);
    (0..count)
        .map(|index| {
            let name = format!("City {index}");
            let winter: f64 = rng.gen_range(-10.0..10.0);
            #[expect(clippy::float_arithmetic, reason = "synthetic summer high")]
            let summer = winter + rng.gen_range(12.0..25.0);
            let climate = MonthlyClimate::default()
                .with_month(Month::February, TemperatureRange { min: winter, max: winter + 6.0 })
                .with_month(Month::July, TemperatureRange { min: summer - 9.0, max: summer });
            let mut city = CityRecord::new(format!("C{index:05}"), CityNames::new(name, "Synthland"))
                .with_erasmus_population(rng.gen_range(100.0..12_000.0))
                .with_cost_of_living_plus_rent(rng.gen_range(25.0..95.0))
                .with_safety_index(rng.gen_range(30.0..90.0))
                .with_public_transport_satisfaction(rng.gen_range(1.0..5.0))
                .with_language_share(language.clone(), rng.gen_range(0.0..100.0))
                .with_population(rng.gen_range(50_000..3_500_000))
                .with_climate(climate);
            if rng.gen_bool(0.9) {
                city = city.with_monthly_budget(rng.gen_range(550.0..1300.0));
            }
            city
        })
        .collect()
}

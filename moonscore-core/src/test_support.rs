//! Test-only catalogue fixtures shared by unit and behaviour tests.

use crate::{CityNames, CityRecord, LanguageCode};

/// Language every sample city reports speaker shares for.
pub fn sample_language() -> LanguageCode {
    LanguageCode::new("en")
}

/// Build a city whose monthly budget mirrors its cost index.
///
/// The city's display and local names are both `name`, in country
/// `Testland`.
pub fn sample_city(
    name: &str,
    erasmus_population: f64,
    cost: f64,
    safety: f64,
    transport: f64,
    speaker_percent: f64,
) -> CityRecord {
    CityRecord::new(name, CityNames::new(name, "Testland"))
        .with_erasmus_population(erasmus_population)
        .with_cost_of_living_plus_rent(cost)
        .with_safety_index(safety)
        .with_public_transport_satisfaction(transport)
        .with_language_share(sample_language(), speaker_percent)
        .with_monthly_budget(cost)
}

/// Three-city catalogue in the order A, B, C.
///
/// | City | Popularity | Cost | Safety | Transport | English % |
/// |------|-----------:|-----:|-------:|----------:|----------:|
/// | A    | 1000       | 50   | 80     | 4         | 40        |
/// | B    | 500        | 70   | 60     | 2         | 10        |
/// | C    | 1500       | 40   | 90     | 5         | 60        |
pub fn sample_catalog() -> Vec<CityRecord> {
    vec![
        sample_city("A", 1000.0, 50.0, 80.0, 4.0, 40.0),
        sample_city("B", 500.0, 70.0, 60.0, 2.0, 10.0),
        sample_city("C", 1500.0, 40.0, 90.0, 5.0, 60.0),
    ]
}

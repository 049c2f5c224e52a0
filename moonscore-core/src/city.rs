//! City catalogue records.
//!
//! A [`CityRecord`] is immutable input: raw metrics exactly as the data layer
//! supplied them. Metrics are optional because the upstream tables are
//! sparse; scoring code reads them through [`metric_or_zero`] so a missing or
//! non-finite figure never leaks into the statistics.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LanguageCode, MonthlyClimate};

/// Opaque, stable city identifier used as the persistence key.
///
/// # Examples
/// ```
/// use moonscore_core::CityId;
///
/// let id = CityId::new("NL002C");
/// assert_eq!(id.as_str(), "NL002C");
/// assert_eq!(id.to_string(), "NL002C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CityId(String);

impl CityId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Display and local names for a city and its country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CityNames {
    /// Name shown in the catalogue, usually English.
    pub display_name: String,
    /// Name in the local language.
    pub local_name: String,
    /// Country name shown in the catalogue.
    pub display_country: String,
    /// Country name in the local language.
    pub local_country: String,
}

impl CityNames {
    /// Build names where the local spellings match the display spellings.
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        let display_name = name.into();
        let display_country = country.into();
        Self {
            local_name: display_name.clone(),
            local_country: display_country.clone(),
            display_name,
            display_country,
        }
    }

    /// Iterate over every searchable name.
    pub fn searchable(&self) -> impl Iterator<Item = &str> {
        [
            self.display_name.as_str(),
            self.local_name.as_str(),
            self.display_country.as_str(),
            self.local_country.as_str(),
        ]
        .into_iter()
    }
}

/// One catalogue entry with its raw, unnormalised metrics.
///
/// # Examples
/// ```
/// use moonscore_core::{CityNames, CityRecord, LanguageCode};
///
/// let city = CityRecord::new("ES001C", CityNames::new("Madrid", "Spain"))
///     .with_erasmus_population(9_500.0)
///     .with_language_share("es", 98.0);
/// assert_eq!(city.speaker_percentage(&LanguageCode::new("ES")), 98.0);
/// assert_eq!(city.speaker_percentage(&LanguageCode::new("fr")), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CityRecord {
    /// Stable identifier, also the persistence key.
    pub id: CityId,
    /// Names used for search matching.
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: CityNames,
    /// Number of exchange students, the raw popularity signal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub erasmus_population: Option<f64>,
    /// Cost-of-living-plus-rent index; lower is cheaper.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost_of_living_plus_rent: Option<f64>,
    /// Safety index; higher is safer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub safety_index: Option<f64>,
    /// Public transport satisfaction; higher is better.
    #[cfg_attr(feature = "serde", serde(default))]
    pub public_transport_satisfaction: Option<f64>,
    /// Share of speakers (0–100) keyed by language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub language_speakers: BTreeMap<LanguageCode, f64>,
    /// Typical monthly student budget; absent means unbounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monthly_budget: Option<f64>,
    /// Explicit winter low temperature in °C.
    #[cfg_attr(feature = "serde", serde(default))]
    pub winter_low_temperature: Option<f64>,
    /// Resident population.
    #[cfg_attr(feature = "serde", serde(default))]
    pub population: Option<u64>,
    /// Monthly mean temperatures.
    #[cfg_attr(feature = "serde", serde(default))]
    pub climate: MonthlyClimate,
}

impl CityRecord {
    /// Create a record with every metric absent.
    pub fn new(id: impl Into<String>, names: CityNames) -> Self {
        Self {
            id: CityId::new(id),
            names,
            erasmus_population: None,
            cost_of_living_plus_rent: None,
            safety_index: None,
            public_transport_satisfaction: None,
            language_speakers: BTreeMap::new(),
            monthly_budget: None,
            winter_low_temperature: None,
            population: None,
            climate: MonthlyClimate::default(),
        }
    }

    /// Set the exchange-student population.
    #[must_use]
    pub fn with_erasmus_population(mut self, value: f64) -> Self {
        self.erasmus_population = Some(value);
        self
    }

    /// Set the cost-of-living-plus-rent index.
    #[must_use]
    pub fn with_cost_of_living_plus_rent(mut self, value: f64) -> Self {
        self.cost_of_living_plus_rent = Some(value);
        self
    }

    /// Set the safety index.
    #[must_use]
    pub fn with_safety_index(mut self, value: f64) -> Self {
        self.safety_index = Some(value);
        self
    }

    /// Set public transport satisfaction.
    #[must_use]
    pub fn with_public_transport_satisfaction(mut self, value: f64) -> Self {
        self.public_transport_satisfaction = Some(value);
        self
    }

    /// Record the share of speakers for a language.
    #[must_use]
    pub fn with_language_share(mut self, language: impl Into<LanguageCode>, percent: f64) -> Self {
        self.language_speakers.insert(language.into(), percent);
        self
    }

    /// Set the monthly budget.
    #[must_use]
    pub fn with_monthly_budget(mut self, value: f64) -> Self {
        self.monthly_budget = Some(value);
        self
    }

    /// Set the explicit winter low temperature.
    #[must_use]
    pub fn with_winter_low(mut self, celsius: f64) -> Self {
        self.winter_low_temperature = Some(celsius);
        self
    }

    /// Set the resident population.
    #[must_use]
    pub fn with_population(mut self, residents: u64) -> Self {
        self.population = Some(residents);
        self
    }

    /// Attach monthly climate figures.
    #[must_use]
    pub fn with_climate(mut self, climate: MonthlyClimate) -> Self {
        self.climate = climate;
        self
    }

    /// Share of speakers for `language`, or `0.0` when unknown.
    pub fn speaker_percentage(&self, language: &LanguageCode) -> f64 {
        metric_or_zero(self.language_speakers.get(language).copied())
    }

    /// Winter low used for weather bucketing.
    ///
    /// Prefers the explicit figure and falls back to February's mean minimum.
    pub fn winter_low(&self) -> Option<f64> {
        self.winter_low_temperature
            .filter(|value| value.is_finite())
            .or_else(|| self.climate.february_low())
    }
}

/// Read a raw metric, substituting `0.0` for missing or non-finite values.
///
/// # Examples
/// ```
/// use moonscore_core::metric_or_zero;
///
/// assert_eq!(metric_or_zero(Some(4.5)), 4.5);
/// assert_eq!(metric_or_zero(None), 0.0);
/// assert_eq!(metric_or_zero(Some(f64::NAN)), 0.0);
/// ```
pub fn metric_or_zero(value: Option<f64>) -> f64 {
    value.filter(|raw| raw.is_finite()).unwrap_or(0.0)
}

//! Interactive filter and sort selections.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PopulationTier, WeatherTier};

/// Error raised when a filter or sort token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    /// Budget ceilings must be whole euro amounts.
    #[error("unknown budget ceiling '{token}'")]
    Budget {
        /// Token as supplied.
        token: String,
    },
    /// Weather tier was not cold, mild, or warm.
    #[error("unknown weather tier '{token}'")]
    Weather {
        /// Token as supplied.
        token: String,
    },
    /// Population tier was not recognised.
    #[error("unknown population tier '{token}'")]
    Population {
        /// Token as supplied.
        token: String,
    },
    /// Sort key was not recognised.
    #[error("unknown sort key '{token}'")]
    Sort {
        /// Token as supplied.
        token: String,
    },
}

/// Upper bound on a city's monthly budget, in euros.
///
/// The catalogue offers 700, 850 and 1000; any whole amount is accepted.
///
/// # Examples
/// ```
/// use moonscore_core::BudgetCeiling;
///
/// let ceiling: BudgetCeiling = "850".parse().unwrap();
/// assert!(ceiling.admits(Some(850.0)));
/// assert!(!ceiling.admits(Some(851.0)));
/// assert!(!ceiling.admits(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BudgetCeiling(u32);

impl BudgetCeiling {
    /// The ceilings offered by the catalogue, tightest first.
    pub const PRESETS: [Self; 3] = [Self(700), Self(850), Self(1000)];

    /// Wrap a ceiling in whole euros.
    pub const fn new(euros: u32) -> Self {
        Self(euros)
    }

    /// Ceiling in euros.
    pub fn amount(self) -> f64 {
        f64::from(self.0)
    }

    /// Whether a monthly budget fits under the ceiling.
    ///
    /// A missing budget is unbounded and never fits.
    pub fn admits(self, monthly_budget: Option<f64>) -> bool {
        monthly_budget
            .filter(|budget| !budget.is_nan())
            .is_some_and(|budget| budget <= self.amount())
    }
}

impl fmt::Display for BudgetCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BudgetCeiling {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ParseFilterError::Budget {
                token: s.to_owned(),
            })
    }
}

/// Ordering applied to the visible cities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    /// Exchange-student population, largest first.
    Popularity,
    /// Cost of living plus rent, cheapest first.
    Cost,
    /// Rounded composite rank value, highest first.
    #[default]
    Composite,
}

impl SortKey {
    /// Return the key as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Cost => "cost",
            Self::Composite => "composite",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" => Ok(Self::Popularity),
            "cost" => Ok(Self::Cost),
            "composite" | "moon-score" => Ok(Self::Composite),
            _ => Err(ParseFilterError::Sort {
                token: s.to_owned(),
            }),
        }
    }
}

/// Parse a filter token where `any`, `all`, or an empty string clears it.
///
/// # Examples
/// ```
/// use moonscore_core::{WeatherTier, parse_choice};
///
/// assert_eq!(parse_choice::<WeatherTier>("ALL"), Ok(None));
/// assert_eq!(parse_choice::<WeatherTier>("warm"), Ok(Some(WeatherTier::Warm)));
/// assert!(parse_choice::<WeatherTier>("hot").is_err());
/// ```
pub fn parse_choice<T>(token: &str) -> Result<Option<T>, ParseFilterError>
where
    T: FromStr<Err = ParseFilterError>,
{
    match token.trim().to_lowercase().as_str() {
        "" | "any" | "all" => Ok(None),
        _ => token.parse().map(Some),
    }
}

/// Current search, filter, and sort selections.
///
/// `None` on a filter means "any". The default value is the reset state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterState {
    /// Free-text search over city and country names.
    pub search_term: String,
    /// Monthly budget ceiling.
    pub budget: Option<BudgetCeiling>,
    /// Required weather tier.
    pub weather: Option<WeatherTier>,
    /// Required population tier.
    pub population: Option<PopulationTier>,
    /// Ordering for visible cities.
    pub sort: SortKey,
}

impl FilterState {
    /// Whether any of the budget, weather, or population filters is set.
    ///
    /// Search and sort do not count.
    pub fn has_active_filters(&self) -> bool {
        self.budget.is_some() || self.weather.is_some() || self.population.is_some()
    }

    /// Clear the budget, weather, and population filters.
    pub fn reset_filters(&mut self) {
        self.budget = None;
        self.weather = None;
        self.population = None;
    }

    /// Restore the default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Weather and population buckets derived from raw city metrics.
//!
//! # Examples
//! ```
//! use moonscore_core::{PopulationTier, WeatherTier};
//!
//! assert_eq!(WeatherTier::from_winter_low(Some(-1.5)), WeatherTier::Cold);
//! assert_eq!(PopulationTier::from_population(Some(340_000)), PopulationTier::Large);
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseFilterError;

const COLD_BELOW: f64 = 0.0;
const WARM_ABOVE: f64 = 5.0;

const SMALL_BELOW: u64 = 190_000;
const MEDIUM_BELOW: u64 = 340_000;
const LARGE_BELOW: u64 = 830_000;

/// Winter climate bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeatherTier {
    /// Winter low below 0 °C.
    Cold,
    /// Winter low between 0 °C and 5 °C inclusive.
    Mild,
    /// Winter low above 5 °C.
    Warm,
}

impl WeatherTier {
    /// Bucket a winter low; an unknown low is neither cold nor warm.
    pub fn from_winter_low(celsius: Option<f64>) -> Self {
        match celsius {
            Some(low) if low < COLD_BELOW => Self::Cold,
            Some(low) if low > WARM_ABOVE => Self::Warm,
            _ => Self::Mild,
        }
    }

    /// Return the tier as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Mild => "mild",
            Self::Warm => "warm",
        }
    }
}

impl fmt::Display for WeatherTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherTier {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cold" => Ok(Self::Cold),
            "mild" => Ok(Self::Mild),
            "warm" => Ok(Self::Warm),
            _ => Err(ParseFilterError::Weather {
                token: s.to_owned(),
            }),
        }
    }
}

/// Resident population bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PopulationTier {
    /// Fewer than 190,000 residents.
    Small,
    /// Fewer than 340,000 residents.
    Medium,
    /// Fewer than 830,000 residents.
    Large,
    /// 830,000 residents or more.
    Metropolis,
}

impl PopulationTier {
    /// Bucket a population; an unknown population counts as zero.
    pub fn from_population(residents: Option<u64>) -> Self {
        match residents.unwrap_or(0) {
            n if n < SMALL_BELOW => Self::Small,
            n if n < MEDIUM_BELOW => Self::Medium,
            n if n < LARGE_BELOW => Self::Large,
            _ => Self::Metropolis,
        }
    }

    /// Return the tier as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Metropolis => "metropolis",
        }
    }
}

impl fmt::Display for PopulationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PopulationTier {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Threshold tokens are the upper bounds the catalogue UI posts.
        match s.trim().to_lowercase().as_str() {
            "small" | "190000" => Ok(Self::Small),
            "medium" | "340000" => Ok(Self::Medium),
            "large" | "830000" => Ok(Self::Large),
            "metropolis" => Ok(Self::Metropolis),
            _ => Err(ParseFilterError::Population {
                token: s.to_owned(),
            }),
        }
    }
}

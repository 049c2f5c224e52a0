//! Monthly mean temperatures for a city.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TemperatureBar;

/// Calendar month, ordered January to December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Month {
    /// January.
    #[cfg_attr(feature = "serde", serde(rename = "jan"))]
    January,
    /// February.
    #[cfg_attr(feature = "serde", serde(rename = "feb"))]
    February,
    /// March.
    #[cfg_attr(feature = "serde", serde(rename = "mar"))]
    March,
    /// April.
    #[cfg_attr(feature = "serde", serde(rename = "apr"))]
    April,
    /// May.
    #[cfg_attr(feature = "serde", serde(rename = "may"))]
    May,
    /// June.
    #[cfg_attr(feature = "serde", serde(rename = "jun"))]
    June,
    /// July.
    #[cfg_attr(feature = "serde", serde(rename = "jul"))]
    July,
    /// August.
    #[cfg_attr(feature = "serde", serde(rename = "aug"))]
    August,
    /// September.
    #[cfg_attr(feature = "serde", serde(rename = "sep"))]
    September,
    /// October.
    #[cfg_attr(feature = "serde", serde(rename = "oct"))]
    October,
    /// November.
    #[cfg_attr(feature = "serde", serde(rename = "nov"))]
    November,
    /// December.
    #[cfg_attr(feature = "serde", serde(rename = "dec"))]
    December,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Three-letter lowercase abbreviation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "jan",
            Self::February => "feb",
            Self::March => "mar",
            Self::April => "apr",
            Self::May => "may",
            Self::June => "jun",
            Self::July => "jul",
            Self::August => "aug",
            Self::September => "sep",
            Self::October => "oct",
            Self::November => "nov",
            Self::December => "dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean minimum and maximum temperature for one month, in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureRange {
    /// Mean daily minimum.
    pub min: f64,
    /// Mean daily maximum.
    pub max: f64,
}

impl TemperatureRange {
    fn is_usable(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Sparse table of monthly temperature ranges.
///
/// # Examples
/// ```
/// use moonscore_core::{Month, MonthlyClimate, TemperatureRange};
///
/// let climate = MonthlyClimate::default()
///     .with_month(Month::February, TemperatureRange { min: -2.0, max: 5.0 })
///     .with_month(Month::July, TemperatureRange { min: 14.0, max: 27.0 });
/// assert_eq!(climate.february_low(), Some(-2.0));
/// assert!(climate.annual_bar().is_some());
/// assert_eq!(climate.monthly_bars().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonthlyClimate {
    months: BTreeMap<Month, TemperatureRange>,
}

impl MonthlyClimate {
    /// Insert or replace a month's range.
    pub fn set_month(&mut self, month: Month, range: TemperatureRange) {
        self.months.insert(month, range);
    }

    /// Insert a month's range while returning `self` for chaining.
    #[must_use]
    pub fn with_month(mut self, month: Month, range: TemperatureRange) -> Self {
        self.set_month(month, range);
        self
    }

    /// Return a month's range when both figures are present and finite.
    pub fn month(&self, month: Month) -> Option<TemperatureRange> {
        self.months
            .get(&month)
            .copied()
            .filter(|range| range.is_usable())
    }

    /// February's mean minimum, the fallback winter low.
    pub fn february_low(&self) -> Option<f64> {
        self.month(Month::February).map(|range| range.min)
    }

    /// Catalogue-card bar spanning February's minimum to July's maximum.
    pub fn annual_bar(&self) -> Option<TemperatureBar> {
        let winter = self.month(Month::February)?;
        let summer = self.month(Month::July)?;
        Some(TemperatureBar::new(winter.min, summer.max))
    }

    /// One bar per month with usable figures, in calendar order.
    pub fn monthly_bars(&self) -> Vec<(Month, TemperatureBar)> {
        Month::ALL
            .iter()
            .filter_map(|&month| match self.month(month) {
                Some(range) => Some((month, TemperatureBar::new(range.min, range.max))),
                None => {
                    log::debug!("no usable temperature data for {month}");
                    None
                }
            })
            .collect()
    }
}

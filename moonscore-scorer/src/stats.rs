//! Catalogue-wide distribution statistics.
#![forbid(unsafe_code)]

/// Mean and population standard deviation of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation; `0.0` when every value is equal.
    pub std_dev: f64,
}

impl Distribution {
    /// Measure `values`.
    ///
    /// An empty slice, or one where every value is identical, yields a
    /// degenerate distribution with zero spread.
    ///
    /// # Examples
    /// ```
    /// use moonscore_scorer::Distribution;
    ///
    /// let flat = Distribution::of(&[0.1, 0.1, 0.1]);
    /// assert!(flat.is_degenerate());
    /// assert_eq!(flat.z_score(0.1), 0.0);
    /// ```
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        let Some(&first) = values.first() else {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        };
        // Identical inputs can still produce a rounding-sized spread.
        if values.iter().all(|&value| value == first) {
            return Self {
                mean: first,
                std_dev: 0.0,
            };
        }
        let direct = Self::measure(values, 1.0);
        if direct.mean.is_finite() && direct.std_dev.is_finite() {
            return direct;
        }
        // Sums near the top of the f64 range overflow; measure in units of
        // the largest magnitude instead.
        let scale = values
            .iter()
            .fold(0.0_f64, |largest, value| largest.max(value.abs()));
        Self::measure(values, scale)
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "statistics over catalogue metrics are floating-point by nature"
    )]
    fn measure(values: &[f64], scale: f64) -> Self {
        let count = values.len() as f64;
        let mean = values.iter().map(|value| value / scale).sum::<f64>() / count;
        let variance = values
            .iter()
            .map(|value| (value / scale - mean).powi(2))
            .sum::<f64>()
            / count;
        Self {
            mean: mean * scale,
            std_dev: variance.sqrt() * scale,
        }
    }

    /// Whether the distribution has no spread.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Standardise `value`; a degenerate distribution maps everything to `0.0`.
    ///
    /// A z-score that cannot be represented also falls back to `0.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "z-scores divide the deviation by the spread"
    )]
    #[must_use]
    pub fn z_score(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        // Halving is exact and keeps the deviation finite near `f64::MAX`.
        let z = (value / 2.0 - self.mean / 2.0) / (self.std_dev / 2.0);
        if z.is_finite() { z } else { 0.0 }
    }
}

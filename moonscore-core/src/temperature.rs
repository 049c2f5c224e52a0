//! Temperature-bar geometry and colour gradient.
//!
//! Bars are positioned on a fixed −11 °C … 36 °C scale so cards remain
//! visually comparable, and coloured with the eleven-step Spectral ramp.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SCALE_MIN: f64 = -11.0;
const SCALE_MAX: f64 = 36.0;
const GRADIENT_STEPS: u8 = 10;

const COLOR_STOPS: [Rgb; 11] = [
    Rgb::new(94, 79, 162),
    Rgb::new(50, 136, 189),
    Rgb::new(102, 194, 165),
    Rgb::new(171, 221, 164),
    Rgb::new(230, 245, 152),
    Rgb::new(255, 255, 191),
    Rgb::new(254, 224, 139),
    Rgb::new(253, 174, 97),
    Rgb::new(244, 109, 67),
    Rgb::new(213, 62, 79),
    Rgb::new(158, 1, 66),
];

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Colour for a temperature on the fixed display scale.
///
/// Temperatures outside the scale clamp to the end colours; a non-finite
/// temperature falls back to the coldest colour.
///
/// # Examples
/// ```
/// use moonscore_core::{Rgb, interpolate_color};
///
/// assert_eq!(interpolate_color(-40.0), Rgb::new(94, 79, 162));
/// assert_eq!(interpolate_color(36.0), Rgb::new(158, 1, 66));
/// ```
pub fn interpolate_color(celsius: f64) -> Rgb {
    let coldest = COLOR_STOPS[0];
    if !celsius.is_finite() {
        return coldest;
    }
    let normalised = ((celsius - SCALE_MIN) / (SCALE_MAX - SCALE_MIN)).clamp(0.0, 1.0);
    let position = normalised * (COLOR_STOPS.len() - 1) as f64;
    let lower = position.floor();
    let upper = position.ceil();
    let (Some(from), Some(to)) = (
        COLOR_STOPS.get(lower as usize),
        COLOR_STOPS.get(upper as usize),
    ) else {
        return coldest;
    };
    if lower == upper {
        return *from;
    }
    let fraction = position - lower;
    Rgb::new(
        mix(from.r, to.r, fraction),
        mix(from.g, to.g, fraction),
        mix(from.b, to.b, fraction),
    )
}

fn mix(from: u8, to: u8, fraction: f64) -> u8 {
    let start = f64::from(from);
    (start + fraction * (f64::from(to) - start)).round() as u8
}

/// One colour stop of a bar gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientStop {
    /// Colour at this stop.
    pub color: Rgb,
    /// Position along the bar, in percent.
    pub position: f64,
}

/// Horizontal bar covering a temperature range on the display scale.
///
/// # Examples
/// ```
/// use moonscore_core::TemperatureBar;
///
/// let bar = TemperatureBar::new(-11.0, 36.0);
/// assert_eq!(bar.offset_percent, 0.0);
/// assert_eq!(bar.width_percent, 100.0);
/// assert_eq!(bar.stops.len(), 11);
/// assert!(bar.css_gradient().starts_with("linear-gradient(to right, rgb(94,79,162) 0%"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureBar {
    /// Low end of the range in °C.
    pub low: f64,
    /// High end of the range in °C.
    pub high: f64,
    /// Distance of the bar's left edge from the scale minimum, in percent.
    pub offset_percent: f64,
    /// Bar width relative to the whole scale, in percent.
    pub width_percent: f64,
    /// Eleven evenly spaced colour stops.
    pub stops: Vec<GradientStop>,
}

impl TemperatureBar {
    /// Lay out a bar for the range `low..=high`.
    pub fn new(low: f64, high: f64) -> Self {
        let span = SCALE_MAX - SCALE_MIN;
        let stops = (0..=GRADIENT_STEPS)
            .map(|step| {
                let fraction = f64::from(step) / f64::from(GRADIENT_STEPS);
                GradientStop {
                    color: interpolate_color(low + (high - low) * fraction),
                    position: f64::from(step) * 10.0,
                }
            })
            .collect();
        Self {
            low,
            high,
            offset_percent: (low - SCALE_MIN) / span * 100.0,
            width_percent: (high - low) / span * 100.0,
            stops,
        }
    }

    /// Render the gradient as a CSS `linear-gradient` value.
    pub fn css_gradient(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|stop| format!("{} {}%", stop.color, stop.position))
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }
}

//! JSON reports printed by the moonscore CLI.

use std::io::Write;

use moonscore_core::{
    Axis, AxisScores, CityId, CityRecord, CompositeRating, LanguageCode, ScoreTable,
    TemperatureBar, format_score,
};
use moonscore_ranker::FilterOutcome;
use moonscore_scorer::DetailRatings;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// One-decimal axis scores, `N/A` when unrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AxisReport {
    pub(crate) popularity: String,
    pub(crate) cost: String,
    pub(crate) safety: String,
    pub(crate) public_transport: String,
    pub(crate) language: String,
}

impl AxisReport {
    fn from_axes(axes: Option<AxisScores>) -> Self {
        let render = |axis: Axis| format_score(axes.map(|scores| scores.get(axis)));
        Self {
            popularity: render(Axis::Popularity),
            cost: render(Axis::Cost),
            safety: render(Axis::Safety),
            public_transport: render(Axis::PublicTransport),
            language: render(Axis::Language),
        }
    }
}

/// Annual temperature bar, from February's low to July's high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TemperatureBarReport {
    pub(crate) low: f64,
    pub(crate) high: f64,
    pub(crate) offset_percent: f64,
    pub(crate) width_percent: f64,
    pub(crate) gradient: String,
}

impl From<TemperatureBar> for TemperatureBarReport {
    fn from(bar: TemperatureBar) -> Self {
        Self {
            gradient: bar.css_gradient(),
            low: bar.low,
            high: bar.high,
            offset_percent: bar.offset_percent,
            width_percent: bar.width_percent,
        }
    }
}

/// A visible city as listed by `moonscore rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CityReport {
    pub(crate) id: CityId,
    pub(crate) name: String,
    pub(crate) country: String,
    pub(crate) rank: usize,
    pub(crate) scores: AxisReport,
    pub(crate) composite: String,
    pub(crate) glyphs: Option<String>,
    pub(crate) temperature_bar: Option<TemperatureBarReport>,
}

/// Output of `moonscore rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankReport {
    pub(crate) language: LanguageCode,
    pub(crate) visible_count: usize,
    pub(crate) total_count: usize,
    pub(crate) cities: Vec<CityReport>,
}

impl RankReport {
    pub(crate) fn build(
        catalog: &[CityRecord],
        table: &ScoreTable,
        outcome: &FilterOutcome,
        language: LanguageCode,
    ) -> Self {
        let cities = outcome
            .ranked
            .iter()
            .filter_map(|ranked| {
                let city = catalog.get(ranked.position)?;
                let scores = table.get(&ranked.id);
                let rating = scores.and_then(|entry| entry.composite.rating);
                Some(CityReport {
                    id: ranked.id.clone(),
                    name: city.names.display_name.clone(),
                    country: city.names.display_country.clone(),
                    rank: ranked.rank,
                    scores: AxisReport::from_axes(scores.map(|entry| entry.axes)),
                    composite: format_composite(rating),
                    glyphs: glyphs(rating),
                    temperature_bar: city.climate.annual_bar().map(TemperatureBarReport::from),
                })
            })
            .collect();
        Self {
            language,
            visible_count: outcome.visible_count(),
            total_count: outcome.total_count,
            cities,
        }
    }
}

/// Output of `moonscore detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetailReport {
    pub(crate) id: CityId,
    pub(crate) selected_language: Option<LanguageCode>,
    pub(crate) scores: AxisReport,
    pub(crate) composite: String,
    pub(crate) glyphs: Option<String>,
}

impl DetailReport {
    pub(crate) fn build(id: CityId, ratings: &DetailRatings) -> Self {
        Self {
            id,
            selected_language: ratings.selected_language.clone(),
            scores: AxisReport::from_axes(ratings.axes),
            composite: ratings.formatted_composite(),
            glyphs: glyphs(ratings.composite),
        }
    }
}

fn format_composite(rating: Option<CompositeRating>) -> String {
    format_score(rating.map(|rating| rating.value))
}

fn glyphs(rating: Option<CompositeRating>) -> Option<String> {
    rating.map(|rating| rating.tier.glyphs().to_owned())
}

/// Writes `report` as pretty JSON followed by a newline.
pub(crate) fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

//! Rank command implementation for the moonscore CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use moonscore_core::{
    BudgetCeiling, FilterState, LanguageCode, MemoryScoreStore, ParseFilterError, PopulationTier,
    ScoreStore, SortKey, WeatherTier, parse_choice,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::report::{RankReport, write_report};
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_LANGUAGE, ARG_POPULATION, ARG_SEARCH, ARG_SORT, ARG_STORE,
    ARG_WEATHER, CliError, ENV_RANK_CATALOG, require_existing,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every city in a JSON catalog against the selected \
                 language, then filter and order the catalog. Scores are \
                 written to the SQLite store when one is given so `detail` \
                 can read them back.",
    about = "Score, filter, and rank a city catalog"
)]
#[ortho_config(prefix = "MOONSCORE")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of city records.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Language code scored on the language axis (default `en`).
    #[arg(long = ARG_LANGUAGE, value_name = "code")]
    #[serde(default)]
    pub(crate) language: Option<String>,
    /// Case-insensitive substring matched against city and country names.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Monthly budget ceiling in euros, or `any`.
    #[arg(long = ARG_BUDGET, value_name = "euros")]
    #[serde(default)]
    pub(crate) budget: Option<String>,
    /// Weather tier: cold, mild, warm, or any.
    #[arg(long = ARG_WEATHER, value_name = "tier")]
    #[serde(default)]
    pub(crate) weather: Option<String>,
    /// Population tier: small, medium, large, metropolis, or any.
    #[arg(long = ARG_POPULATION, value_name = "tier")]
    #[serde(default)]
    pub(crate) population: Option<String>,
    /// Sort key: popularity, cost, or composite.
    #[arg(long = ARG_SORT, value_name = "key")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
    /// SQLite database receiving the computed scores.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the catalog JSON.
    pub(crate) catalog: Utf8PathBuf,
    /// Language scored on the language axis.
    pub(crate) language: LanguageCode,
    /// Search, filter, and sort selections.
    pub(crate) filters: FilterState,
    /// Optional SQLite score store.
    pub(crate) store: Option<Utf8PathBuf>,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RANK_CATALOG,
        })?;
        let language = args
            .language
            .filter(|code| !code.trim().is_empty())
            .map(|code| LanguageCode::new(code.trim()))
            .unwrap_or_default();
        let filters = FilterState {
            search_term: args.search.unwrap_or_default(),
            budget: choice::<BudgetCeiling>(args.budget.as_deref(), ARG_BUDGET)?,
            weather: choice::<WeatherTier>(args.weather.as_deref(), ARG_WEATHER)?,
            population: choice::<PopulationTier>(args.population.as_deref(), ARG_POPULATION)?,
            sort: args
                .sort
                .as_deref()
                .map(str::parse::<SortKey>)
                .transpose()
                .map_err(|source| CliError::InvalidFilter {
                    field: ARG_SORT,
                    source,
                })?
                .unwrap_or_default(),
        };
        Ok(Self {
            catalog,
            language,
            filters,
            store: args.store,
        })
    }
}

fn choice<T>(token: Option<&str>, field: &'static str) -> Result<Option<T>, CliError>
where
    T: std::str::FromStr<Err = ParseFilterError>,
{
    token
        .map_or(Ok(None), parse_choice::<T>)
        .map_err(|source| CliError::InvalidFilter { field, source })
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let report = execute_rank(&config)?;
    write_report(writer, &report)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<RankReport, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let mut store = open_store(config.store.as_deref())?;
    let table = moonscore_scorer::recompute(&catalog, &config.language, store.as_mut());
    let outcome = moonscore_ranker::evaluate(&catalog, &table, &config.filters);
    Ok(RankReport::build(
        &catalog,
        &table,
        &outcome,
        config.language.clone(),
    ))
}

fn open_store(path: Option<&Utf8Path>) -> Result<Box<dyn ScoreStore>, CliError> {
    match path {
        Some(path) => open_sqlite_store(path),
        None => Ok(Box::new(MemoryScoreStore::default())),
    }
}

#[cfg(feature = "store-sqlite")]
fn open_sqlite_store(path: &Utf8Path) -> Result<Box<dyn ScoreStore>, CliError> {
    moonscore_fs::ensure_parent_dir(path).map_err(|source| CliError::PrepareStore {
        path: path.to_path_buf(),
        source,
    })?;
    let store = moonscore_core::SqliteScoreStore::open(path.as_std_path()).map_err(|source| {
        CliError::OpenStore {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "store-sqlite"))]
fn open_sqlite_store(_path: &Utf8Path) -> Result<Box<dyn ScoreStore>, CliError> {
    Err(CliError::MissingFeature {
        feature: crate::FEATURE_STORE_SQLITE,
        action: "persisting scores",
    })
}

//! Detail command implementation for the moonscore CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use moonscore_core::CityId;
use moonscore_scorer::DetailRatings;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::{DetailReport, write_report};
use crate::{
    ARG_CITY_ID, ARG_STORE, CliError, ENV_DETAIL_CITY_ID, ENV_DETAIL_STORE, require_existing,
};

/// CLI arguments for the `detail` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read one city's ratings back from a score store written by \
                 `moonscore rank --store`. Cities without a usable entry \
                 report N/A for every rating.",
    about = "Show the stored ratings for one city"
)]
#[ortho_config(prefix = "MOONSCORE")]
pub(crate) struct DetailArgs {
    /// Identifier of the city to look up.
    #[arg(value_name = "city-id")]
    #[serde(default)]
    pub(crate) city_id: Option<String>,
    /// SQLite database written by `moonscore rank --store`.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
}

impl DetailArgs {
    pub(crate) fn into_config(self) -> Result<DetailConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DetailConfig::try_from(merged)
    }
}

/// Resolved `detail` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailConfig {
    pub(crate) city_id: CityId,
    pub(crate) store: Utf8PathBuf,
}

impl TryFrom<DetailArgs> for DetailConfig {
    type Error = CliError;

    fn try_from(args: DetailArgs) -> Result<Self, Self::Error> {
        let city_id = args.city_id.ok_or(CliError::MissingArgument {
            field: ARG_CITY_ID,
            env: ENV_DETAIL_CITY_ID,
        })?;
        let store = args.store.ok_or(CliError::MissingArgument {
            field: ARG_STORE,
            env: ENV_DETAIL_STORE,
        })?;
        Ok(Self {
            city_id: CityId::new(city_id),
            store,
        })
    }
}

pub(crate) fn run_detail(args: DetailArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_detail_with(args, &mut stdout)
}

pub(crate) fn run_detail_with(args: DetailArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.store, ARG_STORE)?;
    let ratings = read_ratings(&config.store, &config.city_id)?;
    write_report(writer, &DetailReport::build(config.city_id, &ratings))
}

#[cfg(feature = "store-sqlite")]
fn read_ratings(path: &Utf8Path, id: &CityId) -> Result<DetailRatings, CliError> {
    let store = moonscore_core::SqliteScoreStore::open(path.as_std_path()).map_err(|source| {
        CliError::OpenStore {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(moonscore_scorer::load_detail_ratings(&store, id))
}

#[cfg(not(feature = "store-sqlite"))]
fn read_ratings(_path: &Utf8Path, _id: &CityId) -> Result<DetailRatings, CliError> {
    Err(CliError::MissingFeature {
        feature: crate::FEATURE_STORE_SQLITE,
        action: "reading stored scores",
    })
}

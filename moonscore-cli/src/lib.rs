//! Command-line interface for the moonscore city comparison engine.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod catalog;
mod detail;
mod error;
mod rank;
mod report;

pub use error::CliError;

use detail::{DetailArgs, run_detail};
use rank::{RankArgs, run_rank};

const ARG_CATALOG: &str = "catalog";
const ARG_LANGUAGE: &str = "language";
const ARG_SEARCH: &str = "search";
const ARG_BUDGET: &str = "budget";
const ARG_WEATHER: &str = "weather";
const ARG_POPULATION: &str = "population";
const ARG_SORT: &str = "sort";
const ARG_STORE: &str = "store";
const ARG_CITY_ID: &str = "city-id";
const ENV_RANK_CATALOG: &str = "MOONSCORE_CMDS_RANK_CATALOG";
const ENV_DETAIL_CITY_ID: &str = "MOONSCORE_CMDS_DETAIL_CITY_ID";
const ENV_DETAIL_STORE: &str = "MOONSCORE_CMDS_DETAIL_STORE";
#[cfg(not(feature = "store-sqlite"))]
const FEATURE_STORE_SQLITE: &str = "store-sqlite";

/// Run the moonscore CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Detail(args) => run_detail(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "moonscore",
    about = "Score, filter, and rank cities for an exchange semester",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a catalog and list the cities that pass the filters.
    Rank(RankArgs),
    /// Show the stored ratings for one city.
    Detail(DetailArgs),
}

/// Check that `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match moonscore_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;

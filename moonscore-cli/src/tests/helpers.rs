//! Test helpers for writing catalogs and driving CLI invocations.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three European cities with every metric the CLI reports on.
///
/// | City   | Cost | Budget | Winter low | Population |
/// |--------|-----:|-------:|-----------:|-----------:|
/// | Porto  | 45   | 750    | 5.5        | 230,000    |
/// | Munich | 75   | 1100   | -2.5       | 1,500,000  |
/// | Madrid | 55   | 900    | 3.0        | 3,300,000  |
///
/// Only Porto carries February and July climate figures.
pub(super) const CATALOG_JSON: &str = r#"[
  {
    "id": "PT002C",
    "names": { "displayName": "Porto", "localName": "Porto",
               "displayCountry": "Portugal", "localCountry": "Portugal" },
    "erasmusPopulation": 4000,
    "costOfLivingPlusRent": 45,
    "safetyIndex": 70,
    "publicTransportSatisfaction": 3.5,
    "languageSpeakers": { "en": 30, "pt": 100 },
    "monthlyBudget": 750,
    "winterLowTemperature": 5.5,
    "population": 230000,
    "climate": {
      "feb": { "min": 5.5, "max": 14.5 },
      "jul": { "min": 16.0, "max": 26.0 }
    }
  },
  {
    "id": "DE004C",
    "names": { "displayName": "Munich", "localName": "München",
               "displayCountry": "Germany", "localCountry": "Deutschland" },
    "erasmusPopulation": 6000,
    "costOfLivingPlusRent": 75,
    "safetyIndex": 80,
    "publicTransportSatisfaction": 4.5,
    "languageSpeakers": { "en": 60, "de": 100 },
    "monthlyBudget": 1100,
    "winterLowTemperature": -2.5,
    "population": 1500000
  },
  {
    "id": "ES001C",
    "names": { "displayName": "Madrid", "localName": "Madrid",
               "displayCountry": "Spain", "localCountry": "España" },
    "erasmusPopulation": 9000,
    "costOfLivingPlusRent": 55,
    "safetyIndex": 65,
    "publicTransportSatisfaction": 4.0,
    "languageSpeakers": { "en": 25, "es": 100 },
    "monthlyBudget": 900,
    "winterLowTemperature": 3.0,
    "population": 3300000
  }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Temporary workspace holding a catalog file and a score store path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn store(&self) -> Utf8PathBuf {
        self.root.join("state/scores.db")
    }

    pub(super) fn write_catalog(&self) -> Utf8PathBuf {
        let path = self.catalog();
        write_utf8(&path, CATALOG_JSON.as_bytes());
        path
    }
}

/// Parse `argv` and run the selected command, capturing stdout.
pub(super) fn invoke(argv: &[String], stdout: &mut Vec<u8>) -> Result<(), CliError> {
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => crate::rank::run_rank_with(args, stdout),
        Command::Detail(args) => crate::detail::run_detail_with(args, stdout),
    }
}

/// Argument vector for `moonscore rank` over the workspace catalog.
pub(super) fn rank_argv(workspace: &Workspace, extra: &[&str]) -> Vec<String> {
    let mut argv = vec![
        "moonscore".to_owned(),
        "rank".to_owned(),
        format!("--{ARG_CATALOG}"),
        workspace.catalog().into_string(),
    ];
    argv.extend(extra.iter().map(|arg| (*arg).to_owned()));
    argv
}

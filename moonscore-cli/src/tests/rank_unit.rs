//! Focused unit tests covering rank configuration and execution.

use super::helpers::{Workspace, write_utf8};
use super::*;
use moonscore_core::{BudgetCeiling, FilterState, LanguageCode, PopulationTier, SortKey, WeatherTier};
use crate::rank::{RankArgs, RankConfig, execute_rank};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(workspace: &Workspace, filters: FilterState) -> RankConfig {
    RankConfig {
        catalog: workspace.write_catalog(),
        language: LanguageCode::default(),
        filters,
        store: None,
    }
}

fn ids(config: &RankConfig) -> Vec<String> {
    execute_rank(config)
        .expect("rank should succeed")
        .cities
        .into_iter()
        .map(|city| city.id.to_string())
        .collect()
}

#[rstest]
fn converting_rank_without_catalog_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_RANK_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_applies_defaults() {
    let args = RankArgs {
        catalog: Some("catalog.json".into()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.language, LanguageCode::new("en"));
    assert_eq!(config.filters, FilterState::default());
    assert_eq!(config.store, None);
}

#[rstest]
fn rank_config_parses_filter_tokens() {
    let args = RankArgs {
        catalog: Some("catalog.json".into()),
        language: Some(" PT ".into()),
        search: Some("port".into()),
        budget: Some("850".into()),
        weather: Some("Warm".into()),
        population: Some("340000".into()),
        sort: Some("moon-score".into()),
        store: None,
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.language, LanguageCode::new("pt"));
    assert_eq!(
        config.filters,
        FilterState {
            search_term: "port".into(),
            budget: Some(BudgetCeiling::new(850)),
            weather: Some(WeatherTier::Warm),
            population: Some(PopulationTier::Medium),
            sort: SortKey::Composite,
        }
    );
}

#[rstest]
fn any_tokens_clear_filters() {
    let args = RankArgs {
        catalog: Some("catalog.json".into()),
        budget: Some("any".into()),
        weather: Some("ALL".into()),
        population: Some(String::new()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert!(!config.filters.has_active_filters());
}

#[rstest]
#[case::budget(ARG_BUDGET)]
#[case::weather(ARG_WEATHER)]
#[case::population(ARG_POPULATION)]
#[case::sort(ARG_SORT)]
fn unknown_tokens_are_rejected(#[case] expected_field: &'static str) {
    let mut args = RankArgs {
        catalog: Some("catalog.json".into()),
        ..RankArgs::default()
    };
    let token = Some("tropical".to_owned());
    match expected_field {
        ARG_BUDGET => args.budget = token,
        ARG_WEATHER => args.weather = token,
        ARG_POPULATION => args.population = token,
        _ => args.sort = token,
    }
    let err = RankConfig::try_from(args).expect_err("unknown token should error");
    match err {
        CliError::InvalidFilter { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected InvalidFilter, found {other:?}"),
    }
}

#[rstest]
#[case::popularity(SortKey::Popularity, ["ES001C", "DE004C", "PT002C"])]
#[case::cost(SortKey::Cost, ["PT002C", "ES001C", "DE004C"])]
fn execute_rank_orders_by_sort_key(
    workspace: Workspace,
    #[case] sort: SortKey,
    #[case] expected: [&str; 3],
) {
    let config = config_for(
        &workspace,
        FilterState {
            sort,
            ..FilterState::default()
        },
    );
    assert_eq!(ids(&config), expected);
}

#[rstest]
fn execute_rank_reports_counts_and_ranks(workspace: Workspace) {
    let config = config_for(
        &workspace,
        FilterState {
            budget: Some(BudgetCeiling::new(850)),
            ..FilterState::default()
        },
    );
    let report = execute_rank(&config).expect("rank should succeed");
    assert_eq!(report.visible_count, 1);
    assert_eq!(report.total_count, 3);
    let porto = report.cities.first().expect("Porto is visible");
    assert_eq!(porto.name, "Porto");
    assert_eq!(porto.rank, 1);
    assert_ne!(porto.composite, "N/A");
    assert!(porto.glyphs.is_some());
}

#[rstest]
fn annual_temperature_bar_needs_climate_figures(workspace: Workspace) {
    let config = config_for(&workspace, FilterState::default());
    let report = execute_rank(&config).expect("rank should succeed");

    for city in &report.cities {
        let bar = city.temperature_bar.as_ref();
        if city.id.as_str() == "PT002C" {
            let bar = bar.expect("Porto has February and July figures");
            assert_eq!((bar.low, bar.high), (5.5, 26.0));
            assert!(bar.gradient.starts_with("linear-gradient(to right, "));
        } else {
            assert!(bar.is_none(), "{} has no climate figures", city.id);
        }
    }
}

#[rstest]
fn duplicate_ids_keep_their_own_records(workspace: Workspace) {
    let config = config_for(&workspace, FilterState::default());
    write_utf8(
        &config.catalog,
        br#"[
          { "id": "dup", "names": { "displayName": "Lille", "displayCountry": "France" },
            "erasmusPopulation": 10 },
          { "id": "dup", "names": { "displayName": "Lyon", "displayCountry": "France" },
            "erasmusPopulation": 30 }
        ]"#,
    );
    let report = execute_rank(&RankConfig {
        filters: FilterState {
            sort: SortKey::Popularity,
            ..FilterState::default()
        },
        ..config
    })
    .expect("rank should succeed");

    let names: Vec<&str> = report.cities.iter().map(|city| city.name.as_str()).collect();
    assert_eq!(names, ["Lyon", "Lille"]);
}

#[rstest]
fn search_matches_local_names(workspace: Workspace) {
    let config = config_for(
        &workspace,
        FilterState {
            search_term: "münchen".into(),
            ..FilterState::default()
        },
    );
    assert_eq!(ids(&config), ["DE004C"]);
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn execute_rank_creates_the_store(workspace: Workspace) {
    let mut config = config_for(&workspace, FilterState::default());
    config.store = Some(workspace.store());
    execute_rank(&config).expect("rank should succeed");
    assert!(workspace.store().is_file());
}

#[rstest]
fn malformed_catalog_is_reported(workspace: Workspace) {
    let config = config_for(&workspace, FilterState::default());
    write_utf8(&config.catalog, b"{ not a catalog");
    let err = execute_rank(&config).expect_err("malformed catalog should error");
    match err {
        CliError::ParseCatalog { path, .. } => assert_eq!(path, workspace.catalog()),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn require_existing_distinguishes_missing_and_directories(workspace: Workspace) {
    let missing = require_existing(&workspace.root().join("absent.json"), ARG_CATALOG)
        .expect_err("missing file should error");
    assert!(matches!(missing, CliError::MissingSourceFile { field, .. } if field == ARG_CATALOG));

    let directory = require_existing(workspace.root(), ARG_CATALOG)
        .expect_err("directory should error");
    assert!(matches!(directory, CliError::SourcePathNotFile { .. }));
}

//! Behaviour-driven step definitions driving the detail CLI scenarios.

use super::helpers::{Workspace, invoke, rank_argv};
use super::*;
use crate::report::DetailReport;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct DetailWorld {
    workspace: Workspace,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl DetailWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn report(&self) -> DetailReport {
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be a JSON detail")
    }
}

#[fixture]
fn world() -> DetailWorld {
    DetailWorld::new()
}

#[given("a score store written by the rank command")]
fn store_written(#[from(world)] world: &DetailWorld) {
    world.workspace.write_catalog();
    let store = world.workspace.store();
    let flag = format!("--{ARG_STORE}");
    let argv = rank_argv(&world.workspace, &[flag.as_str(), store.as_str()]);
    invoke(&argv, &mut Vec::new()).expect("rank should populate the store");
    assert!(store.is_file());
}

#[given("no score store exists")]
fn store_absent(#[from(world)] world: &DetailWorld) {
    assert!(!world.workspace.store().exists());
}

#[when("I request the detail for {id}")]
fn request_detail(id: String, #[from(world)] world: &DetailWorld) {
    let argv = vec![
        "moonscore".to_owned(),
        "detail".to_owned(),
        id,
        format!("--{ARG_STORE}"),
        world.workspace.store().into_string(),
    ];
    let outcome = invoke(&argv, &mut world.stdout.borrow_mut());
    world.result.replace(Some(outcome));
}

#[then("the detail command succeeds")]
fn detail_succeeds(#[from(world)] world: &DetailWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the detail reports a composite rating")]
fn detail_has_composite(#[from(world)] world: &DetailWorld) {
    let report = world.report();
    assert_ne!(report.composite, "N/A");
    assert!(report.glyphs.is_some());
    assert_ne!(report.scores.cost, "N/A");
}

#[then("the detail was scored for language {code}")]
fn detail_language(code: String, #[from(world)] world: &DetailWorld) {
    let language = world.report().selected_language.expect("language recorded");
    assert_eq!(language.as_str(), code);
}

#[then("every detail rating reads N/A")]
fn detail_unrated(#[from(world)] world: &DetailWorld) {
    let report = world.report();
    let scores = [
        report.scores.popularity,
        report.scores.cost,
        report.scores.safety,
        report.scores.public_transport,
        report.scores.language,
        report.composite,
    ];
    assert!(scores.iter().all(|score| score == "N/A"), "{scores:?}");
    assert_eq!(report.selected_language, None);
    assert_eq!(report.glyphs, None);
}

#[then("the detail command reports the store is missing")]
fn reports_missing_store(#[from(world)] world: &DetailWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_STORE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_detail_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/detail_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: DetailWorld) {
            let _ = world;
        }
    };
}

register_detail_scenario!(detail_read_back, "reading back a ranked city");
register_detail_scenario!(detail_unknown_city, "unknown cities report N/A");
register_detail_scenario!(detail_missing_store, "rejecting a missing score store");

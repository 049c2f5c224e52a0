//! Behavioural coverage for recompute passes and detail read-back.

use std::cell::RefCell;

use moonscore_core::test_support::{sample_catalog, sample_city};
use moonscore_core::{Axis, CityId, CityRecord, LanguageCode, MemoryScoreStore, ScoreTable};
use moonscore_scorer::{DetailRatings, load_detail_ratings, recompute};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared by every step.
#[derive(Debug, Default)]
struct RecomputeWorld {
    catalog: RefCell<Vec<CityRecord>>,
    store: RefCell<MemoryScoreStore>,
    table: RefCell<Option<ScoreTable>>,
    detail: RefCell<Option<DetailRatings>>,
}

impl RecomputeWorld {
    fn table(&self) -> ScoreTable {
        self.table
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("scores must be recomputed first"))
    }
}

#[fixture]
fn world() -> RecomputeWorld {
    RecomputeWorld::default()
}

#[given("the three-city sample catalogue")]
fn sample(#[from(world)] world: &RecomputeWorld) {
    *world.catalog.borrow_mut() = sample_catalog();
}

#[given("a catalogue where every city has the same safety index")]
fn flat_safety(#[from(world)] world: &RecomputeWorld) {
    *world.catalog.borrow_mut() = vec![
        sample_city("P", 300.0, 45.0, 61.0, 2.0, 15.0),
        sample_city("Q", 700.0, 55.0, 61.0, 3.0, 35.0),
        sample_city("R", 1200.0, 65.0, 61.0, 4.0, 55.0),
    ];
}

#[when("I recompute scores for language {code}")]
fn recompute_for(code: String, #[from(world)] world: &RecomputeWorld) {
    let catalog = world.catalog.borrow();
    let mut store = world.store.borrow_mut();
    let table = recompute(&catalog, &LanguageCode::new(code), &mut *store);
    *world.table.borrow_mut() = Some(table);
}

#[when("I load the detail ratings for {id}")]
fn load_detail(id: String, #[from(world)] world: &RecomputeWorld) {
    let store = world.store.borrow();
    let detail = load_detail_ratings(&*store, &CityId::new(id));
    *world.detail.borrow_mut() = Some(detail);
}

#[then("city {id} has the highest popularity score")]
fn highest_popularity(id: String, #[from(world)] world: &RecomputeWorld) {
    let table = world.table();
    let best = table
        .iter()
        .max_by(|(_, left), (_, right)| left.axes.popularity.total_cmp(&right.axes.popularity))
        .map(|(best_id, _)| best_id.clone());
    assert_eq!(best, Some(CityId::new(id)));
}

#[then("every axis score lies between 0 and 5")]
fn scores_clamped(#[from(world)] world: &RecomputeWorld) {
    for (id, scores) in world.table().iter() {
        for (axis, score) in scores.axes.iter() {
            assert!(
                (0.0..=5.0).contains(&score),
                "{id} scored {score} on {axis}"
            );
        }
    }
}

#[then("every city has a stored score entry")]
fn entries_stored(#[from(world)] world: &RecomputeWorld) {
    let store = world.store.borrow();
    for city in world.catalog.borrow().iter() {
        let detail = load_detail_ratings(&*store, &city.id);
        assert!(detail.axes.is_some(), "{} has no stored entry", city.id);
    }
}

#[then("every city scores 2.5 on safety")]
fn flat_midpoint(#[from(world)] world: &RecomputeWorld) {
    for (id, scores) in world.table().iter() {
        assert_eq!(scores.axes.get(Axis::Safety), 2.5, "{id} safety");
    }
}

#[then("the stored entry for {id} records language {code}")]
fn entry_language(id: String, code: String, #[from(world)] world: &RecomputeWorld) {
    let store = world.store.borrow();
    let detail = load_detail_ratings(&*store, &CityId::new(id));
    assert_eq!(detail.selected_language, Some(LanguageCode::new(code)));
}

#[then("every detail rating is N/A")]
fn detail_unrated(#[from(world)] world: &RecomputeWorld) {
    let detail = world
        .detail
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("detail must be loaded first"));
    for axis in Axis::ALL {
        assert_eq!(detail.formatted_axis(axis), "N/A");
    }
    assert_eq!(detail.formatted_composite(), "N/A");
    assert!(detail.selected_language.is_none());
}

macro_rules! register_recompute_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recompute.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecomputeWorld) {
            let _ = world;
        }
    };
}

register_recompute_scenario!(scoring_sample, "scoring the sample catalogue");
register_recompute_scenario!(flat_axis, "scoring a catalogue with a flat safety axis");
register_recompute_scenario!(
    language_switch,
    "switching language overwrites stored entries"
);
register_recompute_scenario!(never_scored, "reading back a city that was never scored");

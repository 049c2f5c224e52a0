//! Interactive comparison session over one catalogue.

use moonscore_core::{CityId, CityRecord, FilterState, LanguageCode, ScoreStore, ScoreTable};
use moonscore_ranker::{FilterOutcome, evaluate};
use moonscore_scorer::{DetailRatings, load_detail_ratings, recompute};

/// A loaded catalogue with its scores, filters, and current ranking.
///
/// Scores are recomputed, and written to the store, when the session is
/// created and whenever the language changes. Filter changes only re-run
/// the filter and sort pass over the existing scores.
///
/// # Examples
/// ```
/// use moonscore_engine::{
///     CityId, CityNames, CityRecord, Comparison, LanguageCode, MemoryScoreStore, SortKey,
/// };
///
/// let catalog = vec![
///     CityRecord::new("a", CityNames::new("Lille", "France")).with_erasmus_population(900.0),
///     CityRecord::new("b", CityNames::new("Lyon", "France")).with_erasmus_population(1_400.0),
/// ];
/// let mut session = Comparison::new(catalog, LanguageCode::new("fr"), MemoryScoreStore::default());
/// session.update_filters(|filters| filters.sort = SortKey::Popularity);
/// assert_eq!(session.outcome().rank_of(&CityId::new("b")), Some(1));
/// ```
#[derive(Debug)]
pub struct Comparison<S> {
    catalog: Vec<CityRecord>,
    language: LanguageCode,
    filters: FilterState,
    scores: ScoreTable,
    outcome: FilterOutcome,
    store: S,
}

impl<S: ScoreStore> Comparison<S> {
    /// Score `catalog` for `language` and rank it with default filters.
    #[must_use]
    pub fn new(catalog: Vec<CityRecord>, language: LanguageCode, mut store: S) -> Self {
        let scores = recompute(&catalog, &language, &mut store);
        let filters = FilterState::default();
        let outcome = evaluate(&catalog, &scores, &filters);
        Self {
            catalog,
            language,
            filters,
            scores,
            outcome,
            store,
        }
    }

    /// Switch language, rescoring and re-ranking the whole catalogue.
    pub fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
        self.scores = recompute(&self.catalog, &self.language, &mut self.store);
        self.refresh();
    }

    /// Replace the filter state and re-rank.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    /// Edit the filter state in place and re-rank.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        edit(&mut self.filters);
        self.refresh();
    }

    /// Ratings stored for `id`, as a detail view would read them.
    #[must_use]
    pub fn detail(&self, id: &CityId) -> DetailRatings {
        load_detail_ratings(&self.store, id)
    }

    fn refresh(&mut self) {
        self.outcome = evaluate(&self.catalog, &self.scores, &self.filters);
    }
}

impl<S> Comparison<S> {
    /// The catalogue in load order.
    #[must_use]
    pub fn catalog(&self) -> &[CityRecord] {
        &self.catalog
    }

    /// Language the current scores were computed for.
    #[must_use]
    pub const fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Current filter state.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Scores from the last recompute.
    #[must_use]
    pub const fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Ranking from the last filter pass.
    #[must_use]
    pub const fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// Release the score store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

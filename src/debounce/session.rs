//! Search box state: debounced suggestions and filtering over one collection.
//!
//! A session walks `Idle -> Debouncing -> Matching -> Displaying`. Every
//! keystroke restarts both debounce windows (cancel-and-restart, never
//! queued), so only the latest query is ever matched. Matching itself is
//! synchronous, so `Matching` lasts exactly as long as one [`SearchSession::tick`].

use std::time::{Duration, Instant};

use tracing::debug;

use super::debouncer::{Debouncer, Ticket};
use crate::filters::{MatchScope, Searchable, matching_indices, suggest};

/// Default debounce before refreshing suggestions
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);
/// Default debounce before refiltering the displayed list
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(500);
/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Matching,
    Displaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub suggest_window: Duration,
    pub filter_window: Duration,
    pub suggestion_limit: usize,
    pub scope: MatchScope,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            suggest_window: SUGGEST_DEBOUNCE,
            filter_window: FILTER_DEBOUNCE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            scope: MatchScope::Primary,
        }
    }
}

/// What a [`SearchSession::tick`] refreshed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub suggestions_refreshed: bool,
    /// Set when the filter window fired; tag remote lookups with it
    pub results_refreshed: Option<Ticket>,
}

impl TickOutcome {
    pub fn changed(&self) -> bool {
        self.suggestions_refreshed || self.results_refreshed.is_some()
    }
}

pub struct SearchSession<T> {
    collection: Vec<T>,
    config: SessionConfig,
    category: Option<String>,
    query: String,
    // Queries the displayed results and suggestions were last computed for
    filtered_query: String,
    suggested_query: String,
    phase: Phase,
    suggest_timer: Debouncer,
    filter_timer: Debouncer,
    // Indices into `collection`
    results: Vec<usize>,
    suggestions: Vec<String>,
    lookup_results: Vec<T>,
}

impl<T: Searchable> SearchSession<T> {
    pub fn new(collection: Vec<T>, config: SessionConfig) -> Self {
        let mut session = Self {
            collection,
            config,
            category: None,
            query: String::new(),
            filtered_query: String::new(),
            suggested_query: String::new(),
            phase: Phase::Idle,
            suggest_timer: Debouncer::new(config.suggest_window),
            filter_timer: Debouncer::new(config.filter_window),
            results: Vec::new(),
            suggestions: Vec::new(),
            lookup_results: Vec::new(),
        };
        session.refilter();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// Entries currently displayed, in collection order
    pub fn results(&self) -> Vec<&T> {
        self.results.iter().filter_map(|&i| self.collection.get(i)).collect()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Results delivered by the last accepted remote lookup
    pub fn lookup_results(&self) -> &[T] {
        &self.lookup_results
    }

    /// A keystroke: record the query and restart both debounce windows
    pub fn input(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.suggest_timer.schedule(self.query.clone(), now);
        self.filter_timer.schedule(self.query.clone(), now);
        self.phase = Phase::Debouncing;
    }

    /// Change the category restriction; refilters immediately
    ///
    /// The query side of the filter stays at the last query whose debounce
    /// window fired, so a pending keystroke is not matched early.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.refilter();
        if self.phase != Phase::Debouncing {
            self.phase = Phase::Displaying;
        }
    }

    /// Replace the collection wholesale after a (re)fetch
    ///
    /// A failed fetch should pass an empty collection: every result then
    /// degrades to empty instead of erroring.
    pub fn replace_collection(&mut self, collection: Vec<T>) {
        debug!(entries = collection.len(), "Search collection replaced");
        self.collection = collection;
        self.refilter();
        self.suggestions =
            suggest(&self.collection, &self.suggested_query, self.config.suggestion_limit);
    }

    /// Time until the next debounce window elapses, for the owner's event loop
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        [self.suggest_timer.time_remaining(now), self.filter_timer.time_remaining(now)]
            .into_iter()
            .flatten()
            .min()
    }

    /// Run whichever debounce windows have elapsed
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(fired) = self.suggest_timer.poll(now) {
            self.phase = Phase::Matching;
            self.suggestions =
                suggest(&self.collection, &fired.query, self.config.suggestion_limit);
            self.suggested_query = fired.query;
            outcome.suggestions_refreshed = true;
        }

        if let Some(fired) = self.filter_timer.poll(now) {
            self.phase = Phase::Matching;
            self.filtered_query = fired.query;
            self.refilter();
            outcome.results_refreshed = Some(fired.ticket);
        }

        if self.suggest_timer.is_pending() || self.filter_timer.is_pending() {
            self.phase = Phase::Debouncing;
        } else if outcome.changed() {
            self.phase = Phase::Displaying;
        }

        outcome
    }

    /// Store remote lookup results unless a newer query superseded them
    pub fn accept_lookup(&mut self, ticket: Ticket, results: Vec<T>) -> bool {
        if !self.filter_timer.is_current(ticket) {
            debug!(?ticket, "Discarding stale lookup results");
            return false;
        }
        self.lookup_results = results;
        true
    }

    /// Clear the search box
    pub fn reset(&mut self) {
        self.query.clear();
        self.filtered_query.clear();
        self.suggested_query.clear();
        self.suggest_timer.cancel();
        self.filter_timer.cancel();
        self.suggestions.clear();
        self.lookup_results.clear();
        self.refilter();
        self.phase = Phase::Idle;
    }

    fn refilter(&mut self) {
        self.results = matching_indices(
            &self.collection,
            &self.filtered_query,
            self.category.as_deref(),
            self.config.scope,
        );
    }
}

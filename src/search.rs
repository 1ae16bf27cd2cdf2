//! Verse search session state.
//!
//! A search is split in two so the UI can await the request in between:
//! [`SearchState::begin`] hands out a [`SearchTicket`] and
//! [`SearchState::finish`] applies the response. Every `begin` bumps a
//! generation counter; a response carrying an older generation is dropped so
//! the most recently submitted query always wins.

use crate::api::{Verse, VerseSearch};
use crate::diagnostics::log_search_outcome;
use crate::error::Result;

/// Non-blocking user-facing message raised by a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoResults,
    Failed,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Self::NoResults => "No results found",
            Self::Failed => "Error",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NoResults => "Try different keywords or phrases.",
            Self::Failed => "An error occurred while searching. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    /// Trimmed form of the typed query; this is what goes on the wire, so
    /// leading and trailing whitespace never reaches the API.
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Verse>,
    pub loading: bool,
    generation: u64,
}

impl SearchState {
    /// Start a search for `query`. Blank queries are ignored and leave the state
    /// untouched.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.generation = self.generation.saturating_add(1);
        self.query = query.to_string();
        self.results.clear();
        self.loading = true;

        Some(SearchTicket {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// Apply the outcome of the request started by `ticket`.
    pub fn finish(&mut self, ticket: &SearchTicket, result: Result<Vec<Verse>>) -> Option<Notice> {
        if !self.is_current(ticket) {
            tracing::debug!(
                query = %ticket.query,
                generation = ticket.generation,
                current = self.generation,
                "dropping stale search response"
            );
            return None;
        }

        log_search_outcome(&ticket.query, &result);
        self.loading = false;

        match result {
            Ok(verses) if !verses.is_empty() => {
                self.results = verses;
                None
            }
            Ok(_) => Some(Notice::NoResults),
            Err(_) => Some(Notice::Failed),
        }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }
}

/// Somewhere a [`SearchState`] lives. Access is scoped to `update` so no
/// borrow is held while the request is in flight.
pub trait SearchStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R;
}

impl SearchStore for SearchState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        f(self)
    }
}

/// Run one complete search against `source`.
pub async fn run_search<S: VerseSearch>(
    store: &mut impl SearchStore,
    source: &S,
    query: &str,
) -> Option<Notice> {
    let ticket = store.update(|state| state.begin(query))?;
    let result = source.search_verses(&ticket.query).await;
    store.update(|state| state.finish(&ticket, result))
}

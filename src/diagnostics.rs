use crate::api::Verse;
use crate::error::Result;

/// Log how a search request ended. Failures go out at `error` so they show up
/// in the browser console even with the default filter.
pub fn log_search_outcome(query: &str, result: &Result<Vec<Verse>>) {
    match result {
        Ok(verses) if verses.is_empty() => {
            tracing::info!(query, "verse search returned no results")
        }
        Ok(verses) => tracing::info!(query, count = verses.len(), "verse search completed"),
        Err(error) => tracing::error!(query, %error, "error fetching verses"),
    }
}

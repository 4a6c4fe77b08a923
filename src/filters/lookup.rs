use super::matcher::filter;
use crate::models::{Direction, SearchPage, TranslationEntry};

/// Site search needs more than this many characters
pub const MIN_PAGE_QUERY_CHARS: usize = 3;
/// Site search shows at most this many pages
pub const PAGE_RESULT_LIMIT: usize = 5;

/// A translation oriented in the requested direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
    pub entry_id: i64,
    pub source: &'a str,
    pub target: &'a str,
    pub description: Option<&'a str>,
}

/// Exact, case-insensitive word lookup on the source side of each pair
///
/// Returns the first matching pair, or `None` for a blank word.
pub fn lookup_word<'a>(
    collection: &'a [TranslationEntry],
    word: &str,
    direction: Direction,
) -> Option<Translation<'a>> {
    let needle = word.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    collection.iter().find_map(|entry| {
        let (source, target) = entry.oriented(direction);
        (source.trim().to_lowercase() == needle).then_some(Translation {
            entry_id: entry.id,
            source,
            target,
            description: entry.description.as_deref(),
        })
    })
}

/// Pages for the global search bar dropdown
pub fn search_pages<'a>(pages: &'a [SearchPage], query: &str) -> Vec<&'a SearchPage> {
    if query.trim().chars().count() < MIN_PAGE_QUERY_CHARS {
        return Vec::new();
    }

    let mut results = filter(pages, query, None);
    results.truncate(PAGE_RESULT_LIMIT);
    results
}

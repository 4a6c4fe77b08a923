use std::collections::HashSet;

use super::category::CategoryFilter;
use crate::models::{GlossaryEntry, SearchIndexRecord, SearchPage, TranslationEntry};

/// Queries shorter than this (after trimming) produce no suggestions
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Record that can be filtered and suggested from
pub trait Searchable {
    fn id(&self) -> i64;

    /// Fields a query is matched against by default
    fn primary_fields(&self) -> Vec<&str>;

    /// Longer descriptive fields, only searched in [`MatchScope::Extended`]
    fn extended_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    fn category(&self) -> Option<&str> {
        None
    }

    /// Values offered as autocomplete suggestions
    fn suggestion_keys(&self) -> Vec<&str>;
}

impl Searchable for GlossaryEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn primary_fields(&self) -> Vec<&str> {
        vec![self.term.as_str()]
    }

    fn extended_fields(&self) -> Vec<&str> {
        vec![self.definition.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn suggestion_keys(&self) -> Vec<&str> {
        vec![self.term.as_str()]
    }
}

impl Searchable for TranslationEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn primary_fields(&self) -> Vec<&str> {
        vec![self.boomer_word.as_str(), self.slang_word.as_str()]
    }

    fn extended_fields(&self) -> Vec<&str> {
        self.description.as_deref().into_iter().collect()
    }

    fn suggestion_keys(&self) -> Vec<&str> {
        vec![self.boomer_word.as_str(), self.slang_word.as_str()]
    }
}

impl Searchable for SearchPage {
    fn id(&self) -> i64 {
        self.id
    }

    fn primary_fields(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.keywords.iter().map(String::as_str))
            .collect()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn suggestion_keys(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

/// Which fields a filter query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchScope {
    #[default]
    Primary,
    /// Primary plus extended fields (definitions, descriptions)
    Extended,
}

/// Filter a collection by category and case-insensitive substring query
///
/// Matches against primary fields only. See [`filter_in_scope`].
pub fn filter<'a, T: Searchable>(
    collection: &'a [T],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a T> {
    filter_in_scope(collection, query, category, MatchScope::Primary)
}

/// Filter a collection by category and query within the given scope
///
/// - A category other than `"all"` keeps only entries with exactly that category
/// - A non-blank query keeps only entries with a field containing it (case-insensitive)
///
/// Surviving entries keep their original order.
pub fn filter_in_scope<'a, T: Searchable>(
    collection: &'a [T],
    query: &str,
    category: Option<&str>,
    scope: MatchScope,
) -> Vec<&'a T> {
    matching_indices(collection, query, category, scope)
        .into_iter()
        .map(|i| &collection[i])
        .collect()
}

/// Positions of the entries [`filter_in_scope`] would keep, ascending
pub fn matching_indices<T: Searchable>(
    collection: &[T],
    query: &str,
    category: Option<&str>,
    scope: MatchScope,
) -> Vec<usize> {
    let category = CategoryFilter::parse(category);
    let needle = query.trim().to_lowercase();

    collection
        .iter()
        .enumerate()
        .filter(|(_, entry)| category.matches(entry.category()))
        .filter(|(_, entry)| needle.is_empty() || matches_query(*entry, &needle, scope))
        .map(|(i, _)| i)
        .collect()
}

fn matches_query<T: Searchable>(entry: &T, needle: &str, scope: MatchScope) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    entry.primary_fields().into_iter().any(contains)
        || (scope == MatchScope::Extended && entry.extended_fields().into_iter().any(contains))
}

/// Derive suggestion candidates from the current collection
pub fn search_index<T: Searchable>(collection: &[T]) -> Vec<SearchIndexRecord> {
    collection
        .iter()
        .flat_map(|entry| {
            let owner_id = entry.id();
            entry
                .suggestion_keys()
                .into_iter()
                .map(move |key| SearchIndexRecord { key: key.to_string(), owner_id })
        })
        .collect()
}

/// Autocomplete suggestions for a partially typed query
///
/// Returns distinct keys containing the query (case-insensitive) in
/// first-seen order, at most `limit` of them. Queries shorter than
/// [`MIN_SUGGESTION_QUERY_CHARS`] yield nothing.
///
/// # Examples
///
/// ```
/// use digiguard::filters::suggest;
/// use digiguard::models::GlossaryEntry;
///
/// let terms = vec![
///     GlossaryEntry::new(1, "Phishing", "", "Email"),
///     GlossaryEntry::new(2, "Pharma scam", "", "Web"),
/// ];
/// assert_eq!(suggest(&terms, "ph", 5), vec!["Phishing", "Pharma scam"]);
/// ```
pub fn suggest<T: Searchable>(collection: &[T], query: &str, limit: usize) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_SUGGESTION_QUERY_CHARS || limit == 0 {
        return Vec::new();
    }

    let needle = trimmed.to_lowercase();
    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for record in search_index(collection) {
        if suggestions.len() >= limit {
            break;
        }
        if record.key.to_lowercase().contains(&needle) && seen.insert(record.key.clone()) {
            suggestions.push(record.key);
        }
    }

    suggestions
}

use super::matcher::Searchable;

/// Category value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

/// Category restriction applied before text matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    All,
    /// Exact, case-sensitive category name
    Only(&'a str),
}

impl<'a> CategoryFilter<'a> {
    /// `None` and the `"all"` sentinel both mean no restriction
    pub fn parse(category: Option<&'a str>) -> Self {
        match category {
            None | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(name) => CategoryFilter::Only(name),
        }
    }

    /// Entries without a category only pass [`CategoryFilter::All`]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => category == Some(*name),
        }
    }
}

/// Distinct categories in first-seen order, for the category dropdown
pub fn unique_categories<T: Searchable>(collection: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in collection.iter().filter_map(|entry| entry.category()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

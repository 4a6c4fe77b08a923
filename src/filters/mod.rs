//! Search-as-you-type matching over small in-memory collections.
//!
//! Everything here is a pure function of (query, collection): there is no
//! index to keep in sync, and results keep the collection's order.

pub mod category;
pub mod lookup;
pub mod matcher;

pub use category::{ALL_CATEGORIES, CategoryFilter, unique_categories};
pub use lookup::{Translation, lookup_word, search_pages};
pub use matcher::{
    MatchScope, Searchable, filter, filter_in_scope, matching_indices, search_index, suggest,
};

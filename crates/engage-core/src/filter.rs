//! Pure client-side filter/search over loaded collections.
//!
//! The backend is never consulted here: filtering narrows whatever pages have
//! already been fetched. All matching is case-insensitive — the original
//! dashboard matched leads case-insensitively and engagements case-sensitively,
//! and this crate deliberately unifies on the former.

/// Free-text search plus exact status/category constraints.
///
/// An empty string means "no constraint", never "match empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub status_filter: String,
    pub category_filter: String,
}

impl FilterState {
    /// True when no predicate constrains the collection.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_query.trim().is_empty()
            && self.status_filter.is_empty()
            && self.category_filter.is_empty()
    }
}

/// An entity the filter engine knows how to narrow.
pub trait Filterable {
    /// Fields the free-text search runs over, absent fields excluded.
    fn search_haystacks(&self) -> Vec<&str>;

    fn status(&self) -> Option<&str>;

    fn category(&self) -> Option<&str>;
}

/// Narrows `items` to those matching every predicate in `filter`.
///
/// Pure and order-preserving: identical inputs always yield identical
/// outputs, so results are safe to memoize. Entities with a missing status
/// or category never match a non-empty exact filter.
#[must_use]
pub fn filter_collection<'a, T: Filterable>(items: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, filter)).collect()
}

fn matches<T: Filterable>(item: &T, filter: &FilterState) -> bool {
    matches_search(item, &filter.search_query)
        && matches_exact(item.status(), &filter.status_filter)
        && matches_exact(item.category(), &filter.category_filter)
}

fn matches_search<T: Filterable>(item: &T, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

fn matches_exact(field: Option<&str>, wanted: &str) -> bool {
    if wanted.is_empty() {
        return true;
    }
    field.is_some_and(|value| value.to_lowercase() == wanted.to_lowercase())
}

//! Search hooks shared by every stored entity.

use std::cmp::Ordering;

use chrono::NaiveDate;
use uuid::Uuid;

/// Comparable value a record exposes for one sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Text(String),
    Number(i64),
    Date(NaiveDate),
    Missing,
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map(Self::text).unwrap_or(Self::Missing)
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// An entity the record store can search, filter and sort.
pub trait Searchable: Clone + Send + Sync + 'static {
    /// Singular name used in log fields and error messages.
    const KIND: &'static str;
    /// Filter keys accepted in search params (camelCase, as on the wire).
    const FILTER_KEYS: &'static [&'static str];
    /// Sort keys accepted in `sortBy`. The first one is the default.
    const SORT_KEYS: &'static [&'static str];

    fn id(&self) -> Uuid;

    /// `term` is already trimmed and lowercased.
    fn matches_term(&self, term: &str) -> bool;

    /// `key` is one of `FILTER_KEYS`; `value` is an active filter value.
    fn matches_filter(&self, key: &str, value: &str) -> bool;

    /// `key` is one of `SORT_KEYS`.
    fn sort_key(&self, key: &str) -> SortKey;

    /// Re-derive date-dependent fields before the record is read.
    fn as_of(self, _today: NaiveDate) -> Self {
        self
    }
}

/// Case-insensitive substring check; `needle` must already be lowercase.
pub fn contains_term(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether `value` names the given id.
pub fn id_matches(id: Uuid, value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok_and(|parsed| parsed == id)
}

pub fn optional_id_matches(id: Option<Uuid>, value: &str) -> bool {
    id.is_some_and(|id| id_matches(id, value))
}

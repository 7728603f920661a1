//! Pagination profiles, normalization, validation and page metadata.
//!
//! Everything here is pure: list screens, the state controllers and the
//! search service all funnel caller-supplied page parameters through these
//! functions so the same bounds apply on both sides of the API.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest page size any profile accepts.
pub const MIN_PAGE_SIZE: i64 = 1;

/// Sentinel filter value meaning "no constraint".
pub const FILTER_ALL: &str = "all";

/// Named page-size profile chosen when a list is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationType {
    Lookup,
    #[default]
    Search,
    Grid,
    Table,
}

/// Default size, maximum size and selectable sizes for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationProfile {
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub page_size_options: &'static [i64],
}

const LOOKUP_PROFILE: PaginationProfile = PaginationProfile {
    default_page_size: 100,
    max_page_size: 1000,
    page_size_options: &[50, 100, 500, 1000],
};

const SEARCH_PROFILE: PaginationProfile = PaginationProfile {
    default_page_size: 20,
    max_page_size: 100,
    page_size_options: &[10, 20, 50, 100],
};

const GRID_PROFILE: PaginationProfile = PaginationProfile {
    default_page_size: 12,
    max_page_size: 100,
    page_size_options: &[12, 24, 48, 96],
};

const TABLE_PROFILE: PaginationProfile = PaginationProfile {
    default_page_size: 25,
    max_page_size: 200,
    page_size_options: &[10, 25, 50, 100, 200],
};

impl PaginationType {
    pub const ALL: [PaginationType; 4] = [Self::Lookup, Self::Search, Self::Grid, Self::Table];

    pub fn profile(self) -> &'static PaginationProfile {
        match self {
            Self::Lookup => &LOOKUP_PROFILE,
            Self::Search => &SEARCH_PROFILE,
            Self::Grid => &GRID_PROFILE,
            Self::Table => &TABLE_PROFILE,
        }
    }

    pub fn default_page_size(self) -> i64 {
        self.profile().default_page_size
    }

    pub fn max_page_size(self) -> i64 {
        self.profile().max_page_size
    }

    pub fn page_size_options(self) -> &'static [i64] {
        self.profile().page_size_options
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lookup => "lookup",
            Self::Search => "search",
            Self::Grid => "grid",
            Self::Table => "table",
        }
    }

    /// Parse a profile name, falling back to `Search` for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for PaginationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lookup" => Ok(Self::Lookup),
            "search" => Ok(Self::Search),
            "grid" => Ok(Self::Grid),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown pagination type '{other}'")),
        }
    }
}

/// Selectable page sizes for a profile name; unknown names get the search sizes.
pub fn page_size_options(type_name: &str) -> &'static [i64] {
    PaginationType::parse_or_default(type_name).page_size_options()
}

/// A page number and size that are both inside their legal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageParams {
    /// Rows to skip; saturates for absurdly large page numbers.
    pub fn offset(&self) -> i64 {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Clamp caller-supplied page parameters into the profile's legal range.
///
/// Missing values take the defaults (page 1, profile default size). Never
/// fails: out-of-range input is sanitized, not rejected.
pub fn normalize_pagination(
    page_number: Option<i64>,
    page_size: Option<i64>,
    pagination_type: PaginationType,
) -> PageParams {
    let page_number = page_number.unwrap_or(1).max(1);
    let page_size = page_size
        .unwrap_or_else(|| pagination_type.default_page_size())
        .clamp(MIN_PAGE_SIZE, pagination_type.max_page_size());

    PageParams {
        page_number,
        page_size,
    }
}

/// Outcome of [`validate_pagination`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check page parameters without changing them.
pub fn validate_pagination(
    page_number: i64,
    page_size: i64,
    pagination_type: PaginationType,
) -> PaginationValidation {
    let mut errors = Vec::new();

    if page_number < 1 {
        errors.push("Page number must be greater than 0".to_string());
    }
    if page_size < MIN_PAGE_SIZE {
        errors.push(format!("Page size must be at least {MIN_PAGE_SIZE}"));
    }
    let max = pagination_type.max_page_size();
    if page_size > max {
        errors.push(format!(
            "Page size cannot exceed {max} for {pagination_type} pagination"
        ));
    }

    PaginationValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Values derived from a total count and the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMetadata {
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_record: i64,
    pub end_record: i64,
}

pub fn calculate_pagination_metadata(
    total_records: i64,
    page_number: i64,
    page_size: i64,
) -> PaginationMetadata {
    let total_records = total_records.max(0);
    let page_size = page_size.max(MIN_PAGE_SIZE);
    let total_pages = total_records / page_size + i64::from(total_records % page_size != 0);

    PaginationMetadata {
        total_pages,
        has_next_page: page_number < total_pages,
        has_previous_page: page_number > 1,
        start_record: page_number.saturating_sub(1).saturating_mul(page_size).saturating_add(1),
        end_record: page_number.saturating_mul(page_size).min(total_records),
    }
}

/// Human-readable "Showing x to y of z records" line.
pub fn format_pagination_info(total_records: i64, page_number: i64, page_size: i64) -> String {
    if total_records <= 0 {
        return "No records found".to_string();
    }
    let meta = calculate_pagination_metadata(total_records, page_number, page_size);
    format!(
        "Showing {} to {} of {} records",
        meta.start_record, meta.end_record, total_records
    )
}

/// Sort order requested by a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Outbound query object sent to a search endpoint.
///
/// Flattens to `pageNumber, pageSize, searchTerm?, sortBy?, sortDirection?`
/// plus one entry per active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub page_number: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl SearchParams {
    const RESERVED_KEYS: [&'static str; 5] = [
        "pageNumber",
        "pageSize",
        "searchTerm",
        "sortBy",
        "sortDirection",
    ];

    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
            search_term: None,
            sort_by: None,
            sort_direction: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_direction = Some(direction);
        self
    }

    /// Build params from a raw query-string map, normalizing the page values.
    ///
    /// Non-numeric page values fall back to the defaults. Filter entries with
    /// an empty or `"all"` value are dropped.
    pub fn from_query(query: &HashMap<String, String>, pagination_type: PaginationType) -> Self {
        let page = normalize_pagination(
            query.get("pageNumber").and_then(|v| v.trim().parse().ok()),
            query.get("pageSize").and_then(|v| v.trim().parse().ok()),
            pagination_type,
        );

        let search_term = query
            .get("searchTerm")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let sort_by = query
            .get("sortBy")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let sort_direction = query.get("sortDirection").and_then(|d| SortDirection::parse(d));

        let filters = query
            .iter()
            .filter(|(key, _)| !Self::RESERVED_KEYS.contains(&key.as_str()))
            .filter(|(_, value)| is_active_filter_value(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            search_term,
            sort_by,
            sort_direction,
            filters,
        }
    }

    /// Flatten into query-string pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(term) = &self.search_term {
            pairs.push(("searchTerm".to_string(), term.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push(("sortDirection".to_string(), direction.as_str().to_string()));
        }
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }

    pub fn page_params(&self) -> PageParams {
        PageParams {
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

/// Whether a filter value actually constrains results.
pub fn is_active_filter_value(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != FILTER_ALL
}

/// Paged result envelope returned by search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PagedResult<T> {
    pub fn new(data: Vec<T>, total_records: i64, page: PageParams) -> Self {
        let meta = calculate_pagination_metadata(total_records, page.page_number, page.page_size);
        Self {
            data,
            page_number: page.page_number,
            page_size: page.page_size,
            total_records,
            total_pages: meta.total_pages,
            has_next_page: meta.has_next_page,
            has_previous_page: meta.has_previous_page,
        }
    }

    /// Slice one page out of an already filtered and sorted collection.
    pub fn from_items(items: Vec<T>, page: PageParams) -> Self {
        let total_records = items.len() as i64;
        let data = items
            .into_iter()
            .skip(page.offset().max(0) as usize)
            .take(page.page_size.max(0) as usize)
            .collect();
        Self::new(data, total_records, page)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_defaults() {
        let p = normalize_pagination(None, None, PaginationType::Table);
        assert_eq!(p.page_number, 1);
        assert_eq!(p.page_size, 25);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn normalize_clamps_grid_page_size() {
        let p = normalize_pagination(Some(2), Some(1000), PaginationType::Grid);
        assert_eq!(p.page_size, 100);
        assert_eq!(p.page_number, 2);
    }

    #[test]
    fn normalize_clamps_page_number_not_size() {
        let p = normalize_pagination(Some(-4), Some(50), PaginationType::Search);
        assert_eq!(p.page_number, 1);
        assert_eq!(p.page_size, 50);

        let p = normalize_pagination(Some(0), Some(0), PaginationType::Search);
        assert_eq!(p.page_number, 1);
        assert_eq!(p.page_size, MIN_PAGE_SIZE);
    }

    #[test]
    fn normalize_size_always_in_bounds() {
        for ty in PaginationType::ALL {
            for requested in [-10, 0, 1, 7, 99, 100, 101, 250, 5000] {
                let p = normalize_pagination(Some(1), Some(requested), ty);
                assert!(p.page_size >= MIN_PAGE_SIZE, "{ty} {requested}");
                assert!(p.page_size <= ty.max_page_size(), "{ty} {requested}");
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for ty in PaginationType::ALL {
            for (page, size) in [(None, None), (Some(-1), Some(9999)), (Some(7), Some(0))] {
                let once = normalize_pagination(page, size, ty);
                let twice =
                    normalize_pagination(Some(once.page_number), Some(once.page_size), ty);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn validate_reports_errors_in_order() {
        let v = validate_pagination(0, 500, PaginationType::Search);
        assert!(!v.is_valid);
        assert_eq!(v.errors.len(), 2);
        assert!(v.errors[0].contains("Page number"));
        assert!(v.errors[1].contains("cannot exceed 100"));

        let v = validate_pagination(1, 0, PaginationType::Grid);
        assert_eq!(v.errors, vec!["Page size must be at least 1".to_string()]);

        assert!(validate_pagination(3, 100, PaginationType::Grid).is_valid);
    }

    #[test]
    fn metadata_for_twenty_five_records() {
        let first = calculate_pagination_metadata(25, 1, 10);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);
        assert_eq!((first.start_record, first.end_record), (1, 10));

        let last = calculate_pagination_metadata(25, 3, 10);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
        assert_eq!((last.start_record, last.end_record), (21, 25));
    }

    #[test]
    fn metadata_total_pages_is_ceiling() {
        for total in 0..60 {
            for size in 1..12 {
                let meta = calculate_pagination_metadata(total, 1, size);
                let expected = (total as f64 / size as f64).ceil() as i64;
                assert_eq!(meta.total_pages, expected);
                assert_eq!(meta.has_next_page, 1 < expected);
            }
        }
    }

    #[test]
    fn metadata_zero_records_is_degenerate() {
        let meta = calculate_pagination_metadata(0, 1, 20);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.start_record, 1);
        assert_eq!(meta.end_record, 0);
    }

    #[test]
    fn info_string() {
        assert_eq!(format_pagination_info(0, 1, 10), "No records found");
        assert_eq!(
            format_pagination_info(25, 3, 10),
            "Showing 21 to 25 of 25 records"
        );
    }

    #[test]
    fn unknown_type_falls_back_to_search_options() {
        assert_eq!(page_size_options("carousel"), &[10, 20, 50, 100]);
        assert_eq!(page_size_options("TABLE"), &[10, 25, 50, 100, 200]);
        assert_eq!(
            PaginationType::parse_or_default("nope"),
            PaginationType::Search
        );
    }

    #[test]
    fn search_params_from_query() {
        let mut query = HashMap::new();
        query.insert("pageNumber".to_string(), "abc".to_string());
        query.insert("pageSize".to_string(), "500".to_string());
        query.insert("searchTerm".to_string(), "  maple ".to_string());
        query.insert("sortDirection".to_string(), "DESC".to_string());
        query.insert("status".to_string(), "all".to_string());
        query.insert("city".to_string(), "Leeds".to_string());
        query.insert("ownerId".to_string(), "".to_string());

        let params = SearchParams::from_query(&query, PaginationType::Search);
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 100);
        assert_eq!(params.search_term.as_deref(), Some("maple"));
        assert_eq!(params.sort_direction, Some(SortDirection::Desc));
        assert_eq!(params.filters.len(), 1);
        assert_eq!(params.filters["city"], "Leeds");
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let mut query = HashMap::new();
        query.insert("pageNumber".to_string(), i64::MAX.to_string());
        query.insert("pageSize".to_string(), "100".to_string());
        let params = SearchParams::from_query(&query, PaginationType::Search);
        assert_eq!(params.page_number, i64::MAX);

        let page = params.page_params();
        assert_eq!(page.offset(), i64::MAX);
        assert_eq!(calculate_pagination_metadata(i64::MAX, 1, 1).total_pages, i64::MAX);
        let meta = calculate_pagination_metadata(25, i64::MAX, 100);
        assert_eq!(meta.start_record, i64::MAX);
        assert_eq!(meta.end_record, 25);
        assert!(!meta.has_next_page);

        let result = PagedResult::from_items((1..=25).collect::<Vec<i64>>(), page);
        assert!(result.data.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(
            format_pagination_info(25, i64::MAX, 100),
            format!("Showing {} to 25 of 25 records", i64::MAX)
        );
    }

    #[test]
    fn search_params_serialize_flat() {
        let params = SearchParams::new(2, 10)
            .with_search_term("oak")
            .with_filter("status", "Occupied");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["pageNumber"], 2);
        assert_eq!(json["searchTerm"], "oak");
        assert_eq!(json["status"], "Occupied");
        assert!(json.get("sortBy").is_none());
    }

    #[test]
    fn paged_result_from_items() {
        let page = PageParams {
            page_number: 3,
            page_size: 10,
        };
        let result = PagedResult::from_items((1..=25).collect::<Vec<i32>>(), page);
        assert_eq!(result.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(result.total_records, 25);
        assert_eq!(result.total_pages, 3);
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
    }
}

//! In-memory record store backing the REST service.
//!
//! Each entity lives in its own [`Table`], guarded by a `tokio` read/write
//! lock. Rows keep insertion order, which is also the tie-break order when a
//! sort key compares equal.

use std::path::Path;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::owner::Owner;
use crate::models::pagination::{
    is_active_filter_value, normalize_pagination, PagedResult, PaginationType, SearchParams,
    SortDirection,
};
use crate::models::property::Property;
use crate::models::record::Searchable;
use crate::models::rent::RentCharge;
use crate::models::room::Room;
use crate::models::tenant::Tenant;
use crate::services::lookup::LookupItem;
use crate::services::search::SearchApi;

/// Filter, sort and slice rows according to `params`.
///
/// Unknown filter or sort keys are rejected; filter values that are empty or
/// `"all"` are ignored.
pub fn search_rows<T: Searchable>(
    rows: impl IntoIterator<Item = T>,
    params: &SearchParams,
    today: NaiveDate,
) -> Result<PagedResult<T>, AppError> {
    if let Some(key) = params
        .filters
        .keys()
        .find(|key| !T::FILTER_KEYS.contains(&key.as_str()))
    {
        return Err(AppError::Validation(format!(
            "Unknown {} filter '{key}'",
            T::KIND
        )));
    }

    let sort_by = match params.sort_by.as_deref() {
        Some(key) if T::SORT_KEYS.contains(&key) => Some(key),
        Some(key) => {
            return Err(AppError::Validation(format!(
                "Cannot sort {} records by '{key}'",
                T::KIND
            )))
        }
        None => T::SORT_KEYS.first().copied(),
    };

    let term = params
        .search_term
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    let active_filters: Vec<(&str, &str)> = params
        .filters
        .iter()
        .filter(|(_, value)| is_active_filter_value(value))
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let mut matches: Vec<T> = rows
        .into_iter()
        .map(|row| row.as_of(today))
        .filter(|row| term.as_deref().map_or(true, |t| row.matches_term(t)))
        .filter(|row| {
            active_filters
                .iter()
                .all(|(key, value)| row.matches_filter(key, value))
        })
        .collect();

    if let Some(key) = sort_by {
        matches.sort_by(|a, b| a.sort_key(key).compare(&b.sort_key(key)));
        if params.sort_direction == Some(SortDirection::Desc) {
            matches.reverse();
        }
    }

    let page = normalize_pagination(
        Some(params.page_number),
        Some(params.page_size),
        PaginationType::Lookup,
    );
    Ok(PagedResult::from_items(matches, page))
}

/// One entity collection.
#[derive(Debug)]
pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Searchable> Table<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Copy of every row in insertion order.
    pub async fn rows(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Result<T, AppError> {
        let today = Utc::now().date_naive();
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .map(|row| row.as_of(today))
            .ok_or_else(|| AppError::NotFound(format!("{} {id} not found", T::KIND)))
    }

    pub async fn exists(&self, id: Uuid) -> bool {
        self.rows.read().await.iter().any(|row| row.id() == id)
    }

    pub async fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.read().await.iter().any(predicate)
    }

    pub async fn insert(&self, row: T) -> T {
        self.rows.write().await.push(row.clone());
        row
    }

    pub async fn remove(&self, id: Uuid) -> Result<T, AppError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("{} {id} not found", T::KIND)))?;
        Ok(rows.remove(index))
    }

    /// Apply `change` to the row with `id` under the write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        change: impl FnOnce(&mut T) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("{} {id} not found", T::KIND)))?;
        change(row)
    }

    pub async fn search_at(
        &self,
        params: &SearchParams,
        today: NaiveDate,
    ) -> Result<PagedResult<T>, AppError> {
        let rows = self.rows.read().await.clone();
        search_rows(rows, params, today)
    }
}

#[async_trait]
impl<T: Searchable> SearchApi<T> for Table<T> {
    async fn search(&self, params: &SearchParams) -> Result<PagedResult<T>, AppError> {
        self.search_at(params, Utc::now().date_naive()).await
    }
}

/// Contents of a seed file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub owners: Vec<Owner>,
    pub properties: Vec<Property>,
    pub rooms: Vec<Room>,
    pub tenants: Vec<Tenant>,
    pub rents: Vec<RentCharge>,
    pub lookups: Vec<LookupItem>,
}

/// All entity tables.
#[derive(Debug, Default)]
pub struct Store {
    pub owners: Table<Owner>,
    pub properties: Table<Property>,
    pub rooms: Table<Room>,
    pub tenants: Table<Tenant>,
    pub rents: Table<RentCharge>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data, returning the lookup items alongside.
    pub fn from_seed(seed: SeedData) -> (Self, Vec<LookupItem>) {
        let store = Self {
            owners: Table::from_rows(seed.owners),
            properties: Table::from_rows(seed.properties),
            rooms: Table::from_rows(seed.rooms),
            tenants: Table::from_rows(seed.tenants),
            rents: Table::from_rows(seed.rents),
        };
        (store, seed.lookups)
    }

    /// Dump every table into seed form.
    pub async fn snapshot(&self, lookups: Vec<LookupItem>) -> SeedData {
        SeedData {
            owners: self.owners.rows().await,
            properties: self.properties.rows().await,
            rooms: self.rooms.rows().await,
            tenants: self.tenants.rows().await,
            rents: self.rents.rows().await,
            lookups,
        }
    }

    pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<SeedData, AppError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            owners = seed.owners.len(),
            properties = seed.properties.len(),
            rooms = seed.rooms.len(),
            tenants = seed.tenants.len(),
            rents = seed.rents.len(),
            lookups = seed.lookups.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }
}

/// Entities that live in a [`Store`] table.
pub trait Stored: Searchable {
    fn table(store: &Store) -> &Table<Self>;
}

impl Stored for Owner {
    fn table(store: &Store) -> &Table<Self> {
        &store.owners
    }
}

impl Stored for Property {
    fn table(store: &Store) -> &Table<Self> {
        &store.properties
    }
}

impl Stored for Room {
    fn table(store: &Store) -> &Table<Self> {
        &store.rooms
    }
}

impl Stored for Tenant {
    fn table(store: &Store) -> &Table<Self> {
        &store.tenants
    }
}

impl Stored for RentCharge {
    fn table(store: &Store) -> &Table<Self> {
        &store.rents
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::models::owner::CreateOwner;
    use crate::models::property::{CreateProperty, PropertyStatus, PropertyType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn property(name: &str, city: &str, status: PropertyStatus) -> Property {
        CreateProperty {
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            address: format!("1 {name} Road"),
            city: city.to_string(),
            property_type: PropertyType::House,
            status: Some(status),
        }
        .into_property(Utc::now())
    }

    fn properties() -> Vec<Property> {
        vec![
            property("Oak House", "York", PropertyStatus::Occupied),
            property("Birch Lodge", "Leeds", PropertyStatus::Available),
            property("Ash Villa", "Leeds", PropertyStatus::Occupied),
            property("Cedar Flats", "Hull", PropertyStatus::Maintenance),
        ]
    }

    #[test]
    fn default_sort_is_first_sort_key() {
        let result = search_rows(properties(), &SearchParams::new(1, 10), today()).unwrap();
        let names: Vec<_> = result.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ash Villa", "Birch Lodge", "Cedar Flats", "Oak House"]);
        assert_eq!(result.total_records, 4);
    }

    #[test]
    fn filters_and_term_combine() {
        let params = SearchParams::new(1, 10)
            .with_filter("city", "leeds")
            .with_filter("status", "all")
            .with_search_term("VILLA");
        let result = search_rows(properties(), &params, today()).unwrap();
        assert_eq!(result.total_records, 1);
        assert_eq!(result.data[0].name, "Ash Villa");
    }

    #[test]
    fn descending_sort_and_paging() {
        let params = SearchParams::new(2, 3).with_sort("name", SortDirection::Desc);
        let result = search_rows(properties(), &params, today()).unwrap();
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].name, "Ash Villa");
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
    }

    #[test]
    fn unknown_filter_or_sort_is_rejected() {
        let params = SearchParams::new(1, 10).with_filter("colour", "red");
        let err = search_rows(properties(), &params, today()).unwrap_err();
        assert!(err.is_validation());

        let params = SearchParams::new(1, 10).with_sort("price", SortDirection::Asc);
        assert!(search_rows(properties(), &params, today()).is_err());
    }

    #[test]
    fn page_number_at_i64_max_yields_an_empty_page() {
        let query = HashMap::from([("pageNumber".to_string(), i64::MAX.to_string())]);
        let params = SearchParams::from_query(&query, PaginationType::Search);

        let result = search_rows(properties(), &params, today()).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.total_records, 4);
        assert!(!result.has_next_page);

        let empty = search_rows(Vec::<Owner>::new(), &params, today()).unwrap();
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn table_crud() {
        tokio_test::block_on(async {
            let table = Table::default();
            let owner = CreateOwner {
                full_name: "Lena Marsh".to_string(),
                email: "lena@example.com".to_string(),
                phone: None,
            }
            .into_owner(Utc::now());
            table.insert(owner.clone()).await;
            assert_eq!(table.len().await, 1);
            assert_eq!(table.get(owner.id).await.unwrap(), owner);

            table
                .update(owner.id, |o| {
                    o.phone = Some("0113 496 0000".to_string());
                    Ok(())
                })
                .await
                .unwrap();
            assert!(table.get(owner.id).await.unwrap().phone.is_some());

            table.remove(owner.id).await.unwrap();
            assert!(table.is_empty().await);
            assert!(table.get(owner.id).await.unwrap_err().is_not_found());
        });
    }

    #[tokio::test]
    async fn loads_seed_file() {
        let seed = SeedData {
            properties: properties(),
            lookups: vec![LookupItem::new("city", "Leeds", "Leeds")],
            ..SeedData::default()
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&seed).unwrap().as_bytes())
            .unwrap();

        let loaded = Store::load_seed_file(file.path()).await.unwrap();
        let (store, lookups) = Store::from_seed(loaded);
        assert_eq!(store.properties.len().await, 4);
        assert!(store.owners.is_empty().await);
        assert_eq!(lookups.len(), 1);
    }

    #[tokio::test]
    async fn malformed_seed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = Store::load_seed_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::Seed(_)));
    }

    #[tokio::test]
    async fn snapshot_reloads_into_an_equal_store() {
        let (store, _) = Store::from_seed(SeedData {
            properties: properties(),
            ..SeedData::default()
        });
        let seed = store.snapshot(Vec::new()).await;
        let json = serde_json::to_string(&seed).unwrap();

        let (reloaded, _) = Store::from_seed(serde_json::from_str(&json).unwrap());
        assert_eq!(reloaded.properties.rows().await, store.properties.rows().await);
    }
}

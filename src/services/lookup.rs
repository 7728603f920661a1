//! Reference-data labels (property types, statuses, cities, ...).
//!
//! A [`LookupService`] is built once at startup and handed to whatever needs
//! labels: card builders, routes. There is no ambient registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::pagination::{PagedResult, SearchParams};
use crate::models::property::{PropertyStatus, PropertyType};
use crate::models::record::contains_term;
use crate::models::rent::RentStatus;
use crate::models::room::RoomStatus;
use crate::models::tenant::TenantStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub category: String,
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub sort_order: i64,
}

impl LookupItem {
    pub fn new(category: &str, code: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            code: code.to_string(),
            label: label.to_string(),
            sort_order: 0,
        }
    }

    /// `term` is already lowercased.
    pub fn matches_term(&self, term: &str) -> bool {
        contains_term(&self.label, term) || contains_term(&self.code, term)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LookupService {
    items: Vec<LookupItem>,
    index: HashMap<(String, String), usize>,
}

impl LookupService {
    pub fn new(items: Vec<LookupItem>) -> Self {
        let mut service = Self::default();
        for item in items {
            service.insert(item);
        }
        service
    }

    /// Built-in labels for the enumerations the screens display.
    pub fn builtin() -> Self {
        let mut items = Vec::new();
        let mut push = |category: &str, code: &str, label: &str, order: i64| {
            let mut item = LookupItem::new(category, code, label);
            item.sort_order = order;
            items.push(item);
        };

        for (i, t) in [
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Studio,
            PropertyType::Commercial,
        ]
        .into_iter()
        .enumerate()
        {
            push("propertyType", t.as_str(), t.as_str(), i as i64);
        }
        for (i, s) in [
            PropertyStatus::Available,
            PropertyStatus::Occupied,
            PropertyStatus::Maintenance,
        ]
        .into_iter()
        .enumerate()
        {
            push("propertyStatus", s.as_str(), s.as_str(), i as i64);
        }
        for (i, s) in [RoomStatus::Vacant, RoomStatus::Occupied, RoomStatus::Maintenance]
            .into_iter()
            .enumerate()
        {
            push("roomStatus", s.as_str(), s.as_str(), i as i64);
        }
        push("tenantStatus", TenantStatus::Active.as_str(), "Active", 0);
        push("tenantStatus", TenantStatus::Notice.as_str(), "On notice", 1);
        push("tenantStatus", TenantStatus::MovedOut.as_str(), "Moved out", 2);
        for (i, s) in [
            RentStatus::Pending,
            RentStatus::Partial,
            RentStatus::Paid,
            RentStatus::Overdue,
        ]
        .into_iter()
        .enumerate()
        {
            push("rentStatus", s.as_str(), s.as_str(), i as i64);
        }

        Self::new(items)
    }

    /// Add or replace an item; later items win over earlier ones.
    pub fn insert(&mut self, item: LookupItem) {
        let key = (item.category.clone(), item.code.clone());
        match self.index.get(&key) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = LookupItem>) {
        for item in items {
            self.insert(item);
        }
    }

    pub fn label(&self, category: &str, code: &str) -> Option<&str> {
        self.index
            .get(&(category.to_string(), code.to_string()))
            .map(|&pos| self.items[pos].label.as_str())
    }

    /// Label for `code`, or the code itself when nothing is registered.
    pub fn label_or_code<'a>(&'a self, category: &str, code: &'a str) -> &'a str {
        self.label(category, code).unwrap_or(code)
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.items.iter().map(|i| i.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page through items, optionally limited to one category.
    pub fn search(&self, category: Option<&str>, params: &SearchParams) -> PagedResult<LookupItem> {
        let term = params
            .search_term
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        let mut matches: Vec<LookupItem> = self
            .items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| term.as_deref().map_or(true, |t| item.matches_term(t)))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.sort_order.cmp(&b.sort_order))
                .then(a.label.cmp(&b.label))
        });

        PagedResult::from_items(matches, params.page_params())
    }
}

//! Rental properties and their classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::badge::{BadgeVariant, Badged};
use crate::models::record::{contains_term, id_matches, Searchable, SortKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Commercial,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Studio => "Studio",
            Self::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PropertyStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl Badged for PropertyStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Available => BadgeVariant::Default,
            Self::Occupied => BadgeVariant::Secondary,
            Self::Maintenance => BadgeVariant::Destructive,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub property_type: PropertyType,
    pub status: Option<PropertyStatus>,
}

impl CreateProperty {
    pub fn into_property(self, now: DateTime<Utc>) -> Property {
        Property {
            id: Uuid::new_v4(),
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            city: self.city,
            property_type: self.property_type,
            status: self.status.unwrap_or_default(),
            created_at: now,
        }
    }
}

impl Searchable for Property {
    const KIND: &'static str = "property";
    const FILTER_KEYS: &'static [&'static str] = &["ownerId", "city", "status", "propertyType"];
    const SORT_KEYS: &'static [&'static str] = &["name", "city", "status", "createdAt"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_term(&self, term: &str) -> bool {
        contains_term(&self.name, term)
            || contains_term(&self.address, term)
            || contains_term(&self.city, term)
    }

    fn matches_filter(&self, key: &str, value: &str) -> bool {
        match key {
            "ownerId" => id_matches(self.owner_id, value),
            "city" => self.city.eq_ignore_ascii_case(value.trim()),
            "status" => self.status.as_str().eq_ignore_ascii_case(value.trim()),
            "propertyType" => self.property_type.as_str().eq_ignore_ascii_case(value.trim()),
            _ => false,
        }
    }

    fn sort_key(&self, key: &str) -> SortKey {
        match key {
            "city" => SortKey::text(&self.city),
            "status" => SortKey::text(self.status.as_str()),
            "createdAt" => SortKey::Number(self.created_at.timestamp()),
            _ => SortKey::text(&self.name),
        }
    }
}

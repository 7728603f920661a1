//! Lettable rooms inside a property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::badge::{BadgeVariant, Badged};
use crate::models::record::{contains_term, id_matches, Searchable, SortKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RoomStatus {
    #[default]
    Vacant,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vacant => "Vacant",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl Badged for RoomStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Vacant => BadgeVariant::Outline,
            Self::Occupied => BadgeVariant::Default,
            Self::Maintenance => BadgeVariant::Destructive,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub property_id: Uuid,
    pub label: String,
    pub floor: Option<i32>,
    /// Monthly rent in minor currency units.
    pub monthly_rent: i64,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub property_id: Uuid,
    pub label: String,
    pub floor: Option<i32>,
    pub monthly_rent: i64,
    pub status: Option<RoomStatus>,
}

impl CreateRoom {
    pub fn into_room(self, now: DateTime<Utc>) -> Room {
        Room {
            id: Uuid::new_v4(),
            property_id: self.property_id,
            label: self.label,
            floor: self.floor,
            monthly_rent: self.monthly_rent,
            status: self.status.unwrap_or_default(),
            created_at: now,
        }
    }
}

impl Searchable for Room {
    const KIND: &'static str = "room";
    const FILTER_KEYS: &'static [&'static str] = &["propertyId", "status"];
    const SORT_KEYS: &'static [&'static str] = &["label", "monthlyRent", "floor", "createdAt"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_term(&self, term: &str) -> bool {
        contains_term(&self.label, term)
    }

    fn matches_filter(&self, key: &str, value: &str) -> bool {
        match key {
            "propertyId" => id_matches(self.property_id, value),
            "status" => self.status.as_str().eq_ignore_ascii_case(value.trim()),
            _ => false,
        }
    }

    fn sort_key(&self, key: &str) -> SortKey {
        match key {
            "monthlyRent" => SortKey::Number(self.monthly_rent),
            "floor" => self
                .floor
                .map(|f| SortKey::Number(f.into()))
                .unwrap_or(SortKey::Missing),
            "createdAt" => SortKey::Number(self.created_at.timestamp()),
            _ => SortKey::text(&self.label),
        }
    }
}

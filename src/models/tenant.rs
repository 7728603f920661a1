//! Tenants and their tenancy state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::badge::{BadgeVariant, Badged};
use crate::models::record::{contains_term, optional_id_matches, Searchable, SortKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TenantStatus {
    #[default]
    Active,
    Notice,
    MovedOut,
}

impl TenantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Notice => "Notice",
            Self::MovedOut => "MovedOut",
        }
    }
}

impl Badged for TenantStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Default,
            Self::Notice => BadgeVariant::Outline,
            Self::MovedOut => BadgeVariant::Secondary,
        }
    }

    fn badge_label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Notice => "On notice",
            Self::MovedOut => "Moved out",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub room_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    pub room_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
}

impl CreateTenant {
    pub fn into_tenant(self, now: DateTime<Utc>) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            room_id: self.room_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            lease_start: self.lease_start,
            lease_end: self.lease_end,
            status: TenantStatus::Active,
            created_at: now,
        }
    }
}

impl Searchable for Tenant {
    const KIND: &'static str = "tenant";
    const FILTER_KEYS: &'static [&'static str] = &["roomId", "status"];
    const SORT_KEYS: &'static [&'static str] = &["fullName", "leaseStart", "status", "createdAt"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_term(&self, term: &str) -> bool {
        contains_term(&self.full_name, term)
            || contains_term(&self.email, term)
            || self.phone.as_deref().is_some_and(|p| contains_term(p, term))
    }

    fn matches_filter(&self, key: &str, value: &str) -> bool {
        match key {
            "roomId" => optional_id_matches(self.room_id, value),
            "status" => self.status.as_str().eq_ignore_ascii_case(value.trim()),
            _ => false,
        }
    }

    fn sort_key(&self, key: &str) -> SortKey {
        match key {
            "leaseStart" => SortKey::Date(self.lease_start),
            "status" => SortKey::text(self.status.as_str()),
            "createdAt" => SortKey::Number(self.created_at.timestamp()),
            _ => SortKey::text(&self.full_name),
        }
    }
}

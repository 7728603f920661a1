//! Property owners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::record::{contains_term, Searchable, SortKey};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwner {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl CreateOwner {
    pub fn into_owner(self, now: DateTime<Utc>) -> Owner {
        Owner {
            id: Uuid::new_v4(),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            created_at: now,
        }
    }
}

impl Searchable for Owner {
    const KIND: &'static str = "owner";
    const FILTER_KEYS: &'static [&'static str] = &[];
    const SORT_KEYS: &'static [&'static str] = &["fullName", "email", "createdAt"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_term(&self, term: &str) -> bool {
        contains_term(&self.full_name, term)
            || contains_term(&self.email, term)
            || self.phone.as_deref().is_some_and(|p| contains_term(p, term))
    }

    fn matches_filter(&self, _key: &str, _value: &str) -> bool {
        true
    }

    fn sort_key(&self, key: &str) -> SortKey {
        match key {
            "email" => SortKey::text(&self.email),
            "createdAt" => SortKey::Number(self.created_at.timestamp()),
            _ => SortKey::text(&self.full_name),
        }
    }
}

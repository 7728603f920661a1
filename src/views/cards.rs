//! Card view models for the entity list screens.
//!
//! Builders take the lookup service and currency formatter explicitly.

use serde::Serialize;
use uuid::Uuid;

use crate::models::badge::Badge;
use crate::models::owner::Owner;
use crate::models::property::Property;
use crate::models::rent::{period_label, RentCharge};
use crate::models::room::Room;
use crate::models::tenant::Tenant;
use crate::services::currency::CurrencyFormatter;
use crate::services::lookup::LookupService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub details: Vec<(String, String)>,
    pub badge: Option<Badge>,
}

pub fn owner_card(owner: &Owner) -> Card {
    let mut details = vec![("Email".to_string(), owner.email.clone())];
    if let Some(phone) = &owner.phone {
        details.push(("Phone".to_string(), phone.clone()));
    }
    Card {
        id: owner.id,
        title: owner.full_name.clone(),
        subtitle: format!("Owner since {}", owner.created_at.format("%b %Y")),
        details,
        badge: None,
    }
}

pub fn property_card(property: &Property, lookups: &LookupService) -> Card {
    let type_label = lookups.label_or_code("propertyType", property.property_type.as_str());
    Card {
        id: property.id,
        title: property.name.clone(),
        subtitle: format!("{}, {}", property.address, property.city),
        details: vec![("Type".to_string(), type_label.to_string())],
        badge: Some(Badge::of(&property.status)),
    }
}

pub fn room_card(room: &Room, currency: &CurrencyFormatter) -> Card {
    let mut details = vec![(
        "Rent".to_string(),
        format!("{} / month", currency.format(room.monthly_rent)),
    )];
    if let Some(floor) = room.floor {
        details.push(("Floor".to_string(), floor.to_string()));
    }
    Card {
        id: room.id,
        title: room.label.clone(),
        subtitle: String::new(),
        details,
        badge: Some(Badge::of(&room.status)),
    }
}

pub fn tenant_card(tenant: &Tenant, lookups: &LookupService) -> Card {
    let lease = match tenant.lease_end {
        Some(end) => format!("{} to {}", tenant.lease_start, end),
        None => format!("From {}", tenant.lease_start),
    };
    let mut badge = Badge::of(&tenant.status);
    if let Some(label) = lookups.label("tenantStatus", tenant.status.as_str()) {
        badge.label = label.to_string();
    }
    Card {
        id: tenant.id,
        title: tenant.full_name.clone(),
        subtitle: tenant.email.clone(),
        details: vec![("Lease".to_string(), lease)],
        badge: Some(badge),
    }
}

pub fn rent_card(charge: &RentCharge, currency: &CurrencyFormatter) -> Card {
    Card {
        id: charge.id,
        title: period_label(charge.period),
        subtitle: format!("Due {}", charge.due_date),
        details: vec![
            ("Due".to_string(), currency.format(charge.amount_due)),
            ("Paid".to_string(), currency.format(charge.amount_paid)),
            ("Outstanding".to_string(), currency.format(charge.outstanding())),
        ],
        badge: Some(Badge::of(&charge.status)),
    }
}

/// Records that render as a [`Card`].
pub trait Carded {
    fn card(&self, lookups: &LookupService, currency: &CurrencyFormatter) -> Card;
}

impl Carded for Owner {
    fn card(&self, _lookups: &LookupService, _currency: &CurrencyFormatter) -> Card {
        owner_card(self)
    }
}

impl Carded for Property {
    fn card(&self, lookups: &LookupService, _currency: &CurrencyFormatter) -> Card {
        property_card(self, lookups)
    }
}

impl Carded for Room {
    fn card(&self, _lookups: &LookupService, currency: &CurrencyFormatter) -> Card {
        room_card(self, currency)
    }
}

impl Carded for Tenant {
    fn card(&self, lookups: &LookupService, _currency: &CurrencyFormatter) -> Card {
        tenant_card(self, lookups)
    }
}

impl Carded for RentCharge {
    fn card(&self, _lookups: &LookupService, currency: &CurrencyFormatter) -> Card {
        rent_card(self, currency)
    }
}

//! Create, delete and payment operations with referential checks.
//!
//! Parents must exist before children are created, and a parent with live
//! children cannot be deleted.

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::owner::{CreateOwner, Owner};
use crate::models::property::{CreateProperty, Property};
use crate::models::rent::{CreateRentCharge, RentCharge};
use crate::models::room::{CreateRoom, Room, RoomStatus};
use crate::models::tenant::{CreateTenant, Tenant, TenantStatus};
use crate::services::store::Store;

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub async fn create_owner(store: &Store, input: CreateOwner) -> Result<Owner, AppError> {
    require_text("fullName", &input.full_name)?;
    require_text("email", &input.email)?;

    let email = input.email.trim().to_lowercase();
    if store
        .owners
        .any(|o| o.email.eq_ignore_ascii_case(&email))
        .await
    {
        return Err(AppError::Conflict(format!(
            "Owner with email '{email}' already exists"
        )));
    }

    let owner = store.owners.insert(input.into_owner(Utc::now())).await;
    tracing::info!(owner_id = %owner.id, "Owner created");
    Ok(owner)
}

pub async fn create_property(store: &Store, input: CreateProperty) -> Result<Property, AppError> {
    require_text("name", &input.name)?;
    if !store.owners.exists(input.owner_id).await {
        return Err(AppError::Validation(format!(
            "Owner {} does not exist",
            input.owner_id
        )));
    }

    let property = store.properties.insert(input.into_property(Utc::now())).await;
    tracing::info!(property_id = %property.id, owner_id = %property.owner_id, "Property created");
    Ok(property)
}

pub async fn create_room(store: &Store, input: CreateRoom) -> Result<Room, AppError> {
    require_text("label", &input.label)?;
    if input.monthly_rent < 0 {
        return Err(AppError::Validation(
            "monthlyRent cannot be negative".to_string(),
        ));
    }
    if !store.properties.exists(input.property_id).await {
        return Err(AppError::Validation(format!(
            "Property {} does not exist",
            input.property_id
        )));
    }

    let room = store.rooms.insert(input.into_room(Utc::now())).await;
    tracing::info!(room_id = %room.id, property_id = %room.property_id, "Room created");
    Ok(room)
}

/// Create a tenant; assigning a room marks that room occupied.
pub async fn create_tenant(store: &Store, input: CreateTenant) -> Result<Tenant, AppError> {
    require_text("fullName", &input.full_name)?;
    if let Some(end) = input.lease_end {
        if end < input.lease_start {
            return Err(AppError::Validation(
                "leaseEnd cannot be before leaseStart".to_string(),
            ));
        }
    }

    if let Some(room_id) = input.room_id {
        store
            .rooms
            .update(room_id, |room| match room.status {
                RoomStatus::Maintenance => Err(AppError::Conflict(format!(
                    "Room {room_id} is under maintenance"
                ))),
                _ => {
                    room.status = RoomStatus::Occupied;
                    Ok(())
                }
            })
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => {
                    AppError::Validation(format!("Room {room_id} does not exist"))
                }
                other => other,
            })?;
    }

    let tenant = store.tenants.insert(input.into_tenant(Utc::now())).await;
    tracing::info!(tenant_id = %tenant.id, room_id = ?tenant.room_id, "Tenant created");
    Ok(tenant)
}

pub async fn create_rent_charge(
    store: &Store,
    input: CreateRentCharge,
) -> Result<RentCharge, AppError> {
    if input.amount_due <= 0 {
        return Err(AppError::Validation(
            "amountDue must be positive".to_string(),
        ));
    }
    if !store.tenants.exists(input.tenant_id).await {
        return Err(AppError::Validation(format!(
            "Tenant {} does not exist",
            input.tenant_id
        )));
    }
    if !store.rooms.exists(input.room_id).await {
        return Err(AppError::Validation(format!(
            "Room {} does not exist",
            input.room_id
        )));
    }

    let charge = input.into_charge(Utc::now());
    let duplicate = store
        .rents
        .any(|r| r.tenant_id == charge.tenant_id && r.period == charge.period)
        .await;
    if duplicate {
        return Err(AppError::Conflict(format!(
            "Tenant {} already has a charge for {}",
            charge.tenant_id,
            crate::models::rent::period_label(charge.period)
        )));
    }

    let charge = store.rents.insert(charge).await;
    tracing::info!(rent_id = %charge.id, tenant_id = %charge.tenant_id, "Rent charge created");
    Ok(charge)
}

pub async fn record_payment(store: &Store, id: Uuid, amount: i64) -> Result<RentCharge, AppError> {
    let today = Utc::now().date_naive();
    let charge = store
        .rents
        .update(id, |charge| {
            charge.record_payment(amount, today)?;
            Ok(charge.clone())
        })
        .await?;
    tracing::info!(
        rent_id = %id,
        amount,
        status = charge.status.as_str(),
        "Rent payment recorded"
    );
    Ok(charge)
}

pub async fn delete_owner(store: &Store, id: Uuid) -> Result<Owner, AppError> {
    if store.properties.any(|p| p.owner_id == id).await {
        return Err(AppError::Conflict(
            "Owner still has properties".to_string(),
        ));
    }
    let owner = store.owners.remove(id).await?;
    tracing::info!(owner_id = %id, "Owner deleted");
    Ok(owner)
}

pub async fn delete_property(store: &Store, id: Uuid) -> Result<Property, AppError> {
    if store.rooms.any(|r| r.property_id == id).await {
        return Err(AppError::Conflict(
            "Property still has rooms".to_string(),
        ));
    }
    let property = store.properties.remove(id).await?;
    tracing::info!(property_id = %id, "Property deleted");
    Ok(property)
}

pub async fn delete_room(store: &Store, id: Uuid) -> Result<Room, AppError> {
    let occupied = store
        .tenants
        .any(|t| t.room_id == Some(id) && t.status != TenantStatus::MovedOut)
        .await;
    if occupied {
        return Err(AppError::Conflict("Room still has tenants".to_string()));
    }
    let room = store.rooms.remove(id).await?;
    tracing::info!(room_id = %id, "Room deleted");
    Ok(room)
}

pub async fn delete_tenant(store: &Store, id: Uuid) -> Result<Tenant, AppError> {
    let tenant = store.tenants.remove(id).await?;
    tracing::info!(tenant_id = %id, "Tenant deleted");
    Ok(tenant)
}

pub async fn delete_rent_charge(store: &Store, id: Uuid) -> Result<RentCharge, AppError> {
    let charge = store.rents.remove(id).await?;
    tracing::info!(rent_id = %id, "Rent charge deleted");
    Ok(charge)
}

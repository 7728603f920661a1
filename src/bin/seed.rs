//! Seed script for development: writes a demo portfolio as a seed file.
//!
//! Usage: `cargo run --bin seed [-- <output path>]`
//!
//! The output defaults to `SEED_FILE` (reads .env), then `seed/demo.json`.
//! Point the server's `SEED_FILE` at the result to start with data.

use std::path::PathBuf;

use chrono::{Datelike, Months, NaiveDate, Utc};
use rentdesk::models::owner::CreateOwner;
use rentdesk::models::property::{CreateProperty, PropertyType};
use rentdesk::models::rent::{first_of_month, CreateRentCharge};
use rentdesk::models::room::CreateRoom;
use rentdesk::models::tenant::CreateTenant;
use rentdesk::services::catalog;
use rentdesk::services::lookup::LookupItem;
use rentdesk::services::store::Store;

const CITIES: [&str; 4] = ["Leeds", "York", "Bristol", "Derby"];
const STREETS: [&str; 6] = ["High Street", "Mill Lane", "Park Road", "Church Way", "Quay Side", "Elm Grove"];
const FIRST_NAMES: [&str; 8] = ["Ada", "Ben", "Chen", "Dina", "Emil", "Farah", "Goran", "Hana"];
const LAST_NAMES: [&str; 6] = ["Okafor", "Lund", "Silva", "Kowalski", "Reyes", "Park"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let output = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SEED_FILE").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("seed/demo.json"));

    println!("=== rentdesk Seed Script ===");

    let store = Store::new();
    let today = Utc::now().date_naive();

    let owners = seed_owners(&store).await?;
    let rooms = seed_properties(&store, &owners).await?;
    let tenants = seed_tenants(&store, &rooms, today).await?;
    seed_rents(&store, &tenants, today).await?;

    let seed = store.snapshot(demo_lookups()).await;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, serde_json::to_string_pretty(&seed)?)?;

    println!("\n=== Seed complete! ===");
    println!("Wrote {}", output.display());
    Ok(())
}

async fn seed_owners(store: &Store) -> anyhow::Result<Vec<uuid::Uuid>> {
    let mut ids = Vec::new();
    for (i, last) in LAST_NAMES.iter().enumerate().take(3) {
        let owner = catalog::create_owner(
            store,
            CreateOwner {
                full_name: format!("{} {last}", FIRST_NAMES[i]),
                email: format!("{}.{}@example.com", FIRST_NAMES[i], last).to_lowercase(),
                phone: Some(format!("0113 496 {:04}", 100 + i)),
            },
        )
        .await?;
        ids.push(owner.id);
    }
    println!("[done] {} owners", ids.len());
    Ok(ids)
}

/// Returns `(room id, monthly rent)` for every room created.
async fn seed_properties(
    store: &Store,
    owners: &[uuid::Uuid],
) -> anyhow::Result<Vec<(uuid::Uuid, i64)>> {
    let types = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Commercial,
    ];
    let mut rooms = Vec::new();
    let mut count = 0;

    for i in 0..30usize {
        let property = catalog::create_property(
            store,
            CreateProperty {
                owner_id: owners[i % owners.len()],
                name: format!("{} {}", STREETS[i % STREETS.len()], i + 1),
                address: format!("{} {}", i + 1, STREETS[i % STREETS.len()]),
                city: CITIES[i % CITIES.len()].to_string(),
                property_type: types[i % types.len()],
                status: None,
            },
        )
        .await?;
        count += 1;

        for r in 0..(1 + i % 3) {
            let rent = 45_000 + (i as i64 % 7) * 2_500 + r as i64 * 1_000;
            let room = catalog::create_room(
                store,
                CreateRoom {
                    property_id: property.id,
                    label: format!("Room {}", r + 1),
                    floor: Some(r as i32),
                    monthly_rent: rent,
                    status: None,
                },
            )
            .await?;
            rooms.push((room.id, rent));
        }
    }
    println!("[done] {count} properties, {} rooms", rooms.len());
    Ok(rooms)
}

/// Fills two rooms in three; returns `(tenant id, room id, rent)`.
async fn seed_tenants(
    store: &Store,
    rooms: &[(uuid::Uuid, i64)],
    today: NaiveDate,
) -> anyhow::Result<Vec<(uuid::Uuid, uuid::Uuid, i64)>> {
    let mut tenants = Vec::new();
    let lease_start = first_of_month(today)
        .checked_sub_months(Months::new(6))
        .unwrap_or(today);

    for (i, (room_id, rent)) in rooms.iter().enumerate().filter(|(i, _)| i % 3 != 2) {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
        let tenant = catalog::create_tenant(
            store,
            CreateTenant {
                room_id: Some(*room_id),
                full_name: format!("{first} {last}"),
                email: format!("{first}.{last}{i}@example.com").to_lowercase(),
                phone: None,
                lease_start,
                lease_end: lease_start.checked_add_months(Months::new(12)),
            },
        )
        .await?;
        tenants.push((tenant.id, *room_id, *rent));
    }
    println!("[done] {} tenants", tenants.len());
    Ok(tenants)
}

/// Three months of charges per tenant with a mix of payment states.
async fn seed_rents(
    store: &Store,
    tenants: &[(uuid::Uuid, uuid::Uuid, i64)],
    today: NaiveDate,
) -> anyhow::Result<()> {
    let mut count = 0;
    for (i, (tenant_id, room_id, rent)) in tenants.iter().enumerate() {
        for back in 0..3u32 {
            let period = first_of_month(today)
                .checked_sub_months(Months::new(back))
                .unwrap_or(today);
            let charge = catalog::create_rent_charge(
                store,
                CreateRentCharge {
                    tenant_id: *tenant_id,
                    room_id: *room_id,
                    period,
                    amount_due: *rent,
                    due_date: None,
                },
            )
            .await?;
            count += 1;

            let paid = match (back, (i + period.month() as usize) % 4) {
                (0, 0) => 0,
                (_, 1) => rent / 2,
                (b, 2) if b > 0 => 0,
                _ => *rent,
            };
            if paid > 0 {
                catalog::record_payment(store, charge.id, paid).await?;
            }
        }
    }
    println!("[done] {count} rent charges");
    Ok(())
}

fn demo_lookups() -> Vec<LookupItem> {
    CITIES
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let mut item = LookupItem::new("city", *city, *city);
            item.sort_order = i as i64;
            item
        })
        .collect()
}

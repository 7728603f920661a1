//! Route definitions for the rentdesk API.

pub mod health;
pub mod lookups;
pub mod owners;
pub mod properties;
pub mod records;
pub mod rents;
pub mod rooms;
pub mod tenants;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::owner::Owner;
use crate::models::property::Property;
use crate::models::rent::RentCharge;
use crate::models::room::Room;
use crate::models::tenant::Tenant;
use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let owner_routes = Router::new()
        .route(
            "/owners",
            get(records::list::<Owner>).post(owners::create),
        )
        .route("/owners/cards", get(records::cards::<Owner>))
        .route(
            "/owners/{id}",
            get(records::get_by_id::<Owner>).delete(owners::delete),
        );

    let property_routes = Router::new()
        .route(
            "/properties",
            get(records::list::<Property>).post(properties::create),
        )
        .route("/properties/cards", get(records::cards::<Property>))
        .route(
            "/properties/{id}",
            get(records::get_by_id::<Property>).delete(properties::delete),
        );

    let room_routes = Router::new()
        .route("/rooms", get(records::list::<Room>).post(rooms::create))
        .route("/rooms/cards", get(records::cards::<Room>))
        .route(
            "/rooms/{id}",
            get(records::get_by_id::<Room>).delete(rooms::delete),
        );

    let tenant_routes = Router::new()
        .route(
            "/tenants",
            get(records::list::<Tenant>).post(tenants::create),
        )
        .route("/tenants/cards", get(records::cards::<Tenant>))
        .route(
            "/tenants/{id}",
            get(records::get_by_id::<Tenant>).delete(tenants::delete),
        );

    let rent_routes = Router::new()
        .route(
            "/rents",
            get(records::list::<RentCharge>).post(rents::create),
        )
        .route("/rents/cards", get(records::cards::<RentCharge>))
        .route(
            "/rents/{id}",
            get(records::get_by_id::<RentCharge>).delete(rents::delete),
        )
        .route("/rents/{id}/payments", post(rents::record_payment));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/v1/lookups", get(lookups::list))
        .nest("/api/v1", owner_routes)
        .nest("/api/v1", property_routes)
        .nest("/api/v1", room_routes)
        .nest("/api/v1", tenant_routes)
        .nest("/api/v1", rent_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

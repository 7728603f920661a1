//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub owners: usize,
    pub properties: usize,
    pub rooms: usize,
    pub tenants: usize,
    pub rents: usize,
    pub lookups: usize,
}

/// Liveness probe: always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe: reports how many records each table holds.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let store = &state.store;
    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        owners: store.owners.len().await,
        properties: store.properties.len().await,
        rooms: store.rooms.len().await,
        tenants: store.tenants.len().await,
        rents: store.rents.len().await,
        lookups: state.lookups.len(),
    })
}

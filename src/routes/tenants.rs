//! Tenant routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::tenant::{CreateTenant, Tenant};
use crate::services::catalog;
use crate::AppState;

/// POST /api/v1/tenants: create a tenant, optionally placing them in a room.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTenant>,
) -> Result<Json<ApiResponse<Tenant>>, AppError> {
    let tenant = catalog::create_tenant(&state.store, body).await?;
    Ok(ApiResponse::success(tenant))
}

/// DELETE /api/v1/tenants/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, AppError> {
    let tenant = catalog::delete_tenant(&state.store, id).await?;
    Ok(ApiResponse::success(tenant))
}

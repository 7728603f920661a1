//! Owner routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::owner::{CreateOwner, Owner};
use crate::services::catalog;
use crate::AppState;

/// POST /api/v1/owners: create an owner.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOwner>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let owner = catalog::create_owner(&state.store, body).await?;
    Ok(ApiResponse::success(owner))
}

/// DELETE /api/v1/owners/{id}: delete an owner without properties.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let owner = catalog::delete_owner(&state.store, id).await?;
    Ok(ApiResponse::success(owner))
}

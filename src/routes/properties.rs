//! Property routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::property::{CreateProperty, Property};
use crate::services::catalog;
use crate::AppState;

/// POST /api/v1/properties: create a property for an existing owner.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProperty>,
) -> Result<Json<ApiResponse<Property>>, AppError> {
    let property = catalog::create_property(&state.store, body).await?;
    Ok(ApiResponse::success(property))
}

/// DELETE /api/v1/properties/{id}: delete a property without rooms.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Property>>, AppError> {
    let property = catalog::delete_property(&state.store, id).await?;
    Ok(ApiResponse::success(property))
}

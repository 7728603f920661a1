//! Room routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::room::{CreateRoom, Room};
use crate::services::catalog;
use crate::AppState;

/// POST /api/v1/rooms: create a room in an existing property.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRoom>,
) -> Result<Json<ApiResponse<Room>>, AppError> {
    let room = catalog::create_room(&state.store, body).await?;
    Ok(ApiResponse::success(room))
}

/// DELETE /api/v1/rooms/{id}: delete a room nobody lives in.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Room>>, AppError> {
    let room = catalog::delete_room(&state.store, id).await?;
    Ok(ApiResponse::success(room))
}

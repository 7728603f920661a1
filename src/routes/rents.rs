//! Rent tracking routes: charges and payments.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::rent::{CreateRentCharge, RecordPayment, RentCharge};
use crate::services::catalog;
use crate::AppState;

/// POST /api/v1/rents: bill a tenant for a month.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRentCharge>,
) -> Result<Json<ApiResponse<RentCharge>>, AppError> {
    let charge = catalog::create_rent_charge(&state.store, body).await?;
    Ok(ApiResponse::success(charge))
}

/// DELETE /api/v1/rents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RentCharge>>, AppError> {
    let charge = catalog::delete_rent_charge(&state.store, id).await?;
    Ok(ApiResponse::success(charge))
}

/// POST /api/v1/rents/{id}/payments: record a (possibly partial) payment.
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecordPayment>,
) -> Result<Json<ApiResponse<RentCharge>>, AppError> {
    let charge = catalog::record_payment(&state.store, id, body.amount).await?;
    Ok(ApiResponse::success(charge))
}

//! Search and fetch-by-id handlers shared by every entity.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PagedResult, PaginationType, SearchParams};
use crate::services::search::SearchApi;
use crate::services::store::Stored;
use crate::views::cards::{Card, Carded};
use crate::AppState;

/// GET /api/v1/{entity}: paged search with filters and sorting.
pub async fn list<T: Stored + Serialize>(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<PagedResult<T>>>, AppError> {
    let params = SearchParams::from_query(&query, PaginationType::Search);
    tracing::debug!(
        kind = T::KIND,
        page_number = params.page_number,
        page_size = params.page_size,
        filters = params.filters.len(),
        "Search"
    );
    let result = T::table(&state.store).search(&params).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/v1/{entity}/{id}: fetch one record.
pub async fn get_by_id<T: Stored + Serialize>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    let record = T::table(&state.store).get(id).await?;
    Ok(ApiResponse::success(record))
}

/// GET /api/v1/{entity}/cards: one page of rendered cards for the grid view.
pub async fn cards<T: Stored + Carded>(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<PagedResult<Card>>>, AppError> {
    let params = SearchParams::from_query(&query, PaginationType::Grid);
    let result = T::table(&state.store).search(&params).await?;
    let cards = result.map(|record| record.card(&state.lookups, &state.currency));
    Ok(ApiResponse::success(cards))
}

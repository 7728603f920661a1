//! Reference data route.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PagedResult, PaginationType, SearchParams};
use crate::services::lookup::LookupItem;
use crate::AppState;

/// GET /api/v1/lookups: lookup items, optionally for one `category`.
///
/// Items come back in category, sort order, label order; sorting is not
/// negotiable here.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<PagedResult<LookupItem>>>, AppError> {
    let mut params = SearchParams::from_query(&query, PaginationType::Lookup);
    let category = params.filters.remove("category");
    if let Some(key) = params.filters.keys().next() {
        return Err(AppError::Validation(format!("Unknown lookup filter '{key}'")));
    }
    if params.sort_by.is_some() || params.sort_direction.is_some() {
        return Err(AppError::Validation(
            "Lookups cannot be re-sorted".to_string(),
        ));
    }
    let result = state.lookups.search(category.as_deref(), &params);
    Ok(ApiResponse::success(result))
}

//! The search interface list screens query.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, SearchParams};

/// A backend that answers paged search queries for one record type.
///
/// Implementations own their wire format; callers only rely on the
/// `PagedResult` fields being authoritative for the page they asked for.
#[async_trait]
pub trait SearchApi<T>: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<PagedResult<T>, AppError>;
}

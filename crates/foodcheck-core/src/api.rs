//! Abstraction over the remote food API.

use std::future::Future;

use foodcheck_model::{ColumnCatalog, FoodPage, PageQuery};

/// Read-only access to the food data service.
///
/// Implemented by the HTTP client and by in-memory fakes in tests.
pub trait FoodApi {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches the full list of data columns.
    fn fetch_columns(&self) -> impl Future<Output = Result<ColumnCatalog, Self::Error>> + Send;

    /// Fetches one page of records matching `query`.
    fn fetch_page(
        &self,
        query: &PageQuery,
    ) -> impl Future<Output = Result<FoodPage, Self::Error>> + Send;
}

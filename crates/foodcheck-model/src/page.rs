//! Request and response payloads of the food API.

use serde::{Deserialize, Serialize};

use crate::catalog::ColumnCatalog;
use crate::error::{ModelError, Result};
use crate::record::FoodRecord;

/// Rows requested per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parameters of a single food page request.
///
/// An empty `query` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl PageQuery {
    /// Creates a validated query; `page` and `per_page` must both be at least 1.
    pub fn new(query: impl Into<String>, page: u32, per_page: u32) -> Result<Self> {
        if page == 0 {
            return Err(ModelError::InvalidPage(page));
        }
        if per_page == 0 {
            return Err(ModelError::InvalidPageSize(per_page));
        }
        Ok(Self {
            query: query.into(),
            page,
            per_page,
        })
    }

    /// Query string pairs in the order the API expects them.
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// One page of food records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodPage {
    pub data: Vec<FoodRecord>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

/// Body of the columns endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

impl From<ColumnsResponse> for ColumnCatalog {
    fn from(response: ColumnsResponse) -> Self {
        ColumnCatalog::new(response.columns)
    }
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

//! HTTP client for the food data service.
//!
//! The service exposes two read-only endpoints:
//!
//! - `GET api/columns` returning `{"columns": [...]}`
//! - `GET api/food?query=&page=&per_page=` returning one page of records

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use foodcheck_core::FoodApi;
use foodcheck_model::{ApiErrorBody, ColumnCatalog, ColumnsResponse, FoodPage, PageQuery};

use crate::error::{ClientError, Result};
use crate::sanitize::replace_non_finite;

/// Service address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const COLUMNS_PATH: &str = "api/columns";
const FOOD_PATH: &str = "api/food";

/// Client for the food data service.
#[derive(Debug, Clone)]
pub struct FoodApiClient {
    /// HTTP client.
    client: Client,
    /// Service root, always ending with a slash.
    base_url: Url,
}

impl FoodApiClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the columns endpoint.
    pub fn columns_url(&self) -> Result<Url> {
        self.endpoint(COLUMNS_PATH)
    }

    /// URL of the food endpoint with the query string for `query`.
    pub fn food_url(&self, query: &PageQuery) -> Result<Url> {
        let mut url = self.endpoint(FOOD_PATH)?;
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "requesting");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, concat!("foodcheck/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("Unknown error").to_string()
                    } else {
                        body.clone()
                    }
                });
            warn!(status = status.as_u16(), %message, "food service error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&replace_non_finite(&body))?)
    }
}

impl FoodApi for FoodApiClient {
    type Error = ClientError;

    async fn fetch_columns(&self) -> Result<ColumnCatalog> {
        let response: ColumnsResponse = self.get_json(self.columns_url()?).await?;
        Ok(response.into())
    }

    async fn fetch_page(&self, query: &PageQuery) -> Result<FoodPage> {
        let url = self.food_url(query)?;
        self.get_json(url).await
    }
}

/// Parses `raw` and makes sure relative endpoint paths append to it.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!("{raw} cannot be used as a base")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

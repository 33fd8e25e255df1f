//! Reading records and catalogs from local JSON files.

use anyhow::{Context, Result};
use serde::Deserialize;

use foodcheck_client::replace_non_finite;
use foodcheck_model::{ColumnCatalog, ColumnsResponse, FoodPage, FoodRecord};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    Records(Vec<FoodRecord>),
    Page(FoodPage),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Columns(Vec<String>),
    Response(ColumnsResponse),
}

/// Parses a JSON array of records, or a saved API page.
///
/// Bare `NaN`/`Infinity` values are accepted and read as missing.
pub fn parse_records(content: &str) -> Result<Vec<FoodRecord>> {
    let parsed: RecordsFile = serde_json::from_str(&replace_non_finite(content))
        .context("expected a JSON array of records or a page object with \"data\"")?;
    Ok(match parsed {
        RecordsFile::Records(records) => records,
        RecordsFile::Page(page) => page.data,
    })
}

/// Parses a column catalog given as an array or as `{"columns": [...]}`.
pub fn parse_catalog(content: &str) -> Result<ColumnCatalog> {
    let parsed: CatalogFile = serde_json::from_str(content)
        .context("expected a JSON array of column names or {\"columns\": [...]}")?;
    Ok(match parsed {
        CatalogFile::Columns(columns) => ColumnCatalog::new(columns),
        CatalogFile::Response(response) => response.into(),
    })
}

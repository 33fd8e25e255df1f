//! Column catalog reported by the columns endpoint.

use serde::{Deserialize, Serialize};

/// Every column name known to exist in the backing dataset, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnCatalog {
    columns: Vec<String>,
}

impl ColumnCatalog {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

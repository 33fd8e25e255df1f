pub mod catalog;
pub mod category;
pub mod error;
pub mod page;
pub mod record;
pub mod resolved;

pub use catalog::ColumnCatalog;
pub use category::FieldCategory;
pub use error::{ModelError, Result};
pub use page::{ApiErrorBody, ColumnsResponse, DEFAULT_PAGE_SIZE, FoodPage, PageQuery};
pub use record::{CellValue, FoodRecord};
pub use resolved::{ResolvedFood, Verdict};

/// Marker shown when a field could not be resolved.
pub const UNSPECIFIED: &str = "לא צוין";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_rejects_zero_page() {
        assert_eq!(
            PageQuery::new("", 0, 20).unwrap_err(),
            ModelError::InvalidPage(0)
        );
        assert_eq!(
            PageQuery::new("", 1, 0).unwrap_err(),
            ModelError::InvalidPageSize(0)
        );
    }

    #[test]
    fn page_query_pairs_keep_api_order() {
        let query = PageQuery::new("תפוח", 3, 20).unwrap();
        let keys: Vec<&str> = query.to_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["query", "page", "per_page"]);
        assert_eq!(query.to_pairs()[1].1, "3");
    }

    #[test]
    fn every_category_has_aliases() {
        for category in FieldCategory::ALL {
            assert!(!category.aliases().is_empty(), "{category} has no aliases");
        }
        assert_eq!(FieldCategory::Name.aliases()[0], "shmmitzrach");
        assert_eq!(FieldCategory::Calories.aliases()[1], "קלוריות");
    }
}

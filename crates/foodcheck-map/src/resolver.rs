//! Column resolution engine.

use std::collections::BTreeMap;

use tracing::trace;

use foodcheck_model::{CellValue, ColumnCatalog, FieldCategory, FoodRecord};

use crate::numeric::is_numeric_text;
use crate::patterns::{build_alias_patterns, build_name_hints};
use crate::utils::{contains_either_way, fold_case, utf16_len};

/// Minimum text length (UTF-16 units, exclusive) for the first-text fallback.
const FIRST_TEXT_MIN_LEN: usize = 3;

/// Strategy that produced a resolved value, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolutionSource {
    /// The record has a field named exactly like one of the category's aliases.
    ExactAlias,
    /// A catalog column whose name overlaps an alias.
    CatalogMatch,
    /// A record field whose name contains a descriptive name term.
    NameHint,
    /// The first non-numeric text value of the record.
    FirstText,
    /// Nothing matched; the caller's default was used.
    Default,
}

impl ResolutionSource {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExactAlias => "exact alias",
            Self::CatalogMatch => "catalog column match",
            Self::NameHint => "name hint in field name",
            Self::FirstText => "first text field",
            Self::Default => "default value",
        }
    }
}

/// A resolved value together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub value: CellValue,
    pub source: ResolutionSource,
    /// Field the value was read from; `None` for defaults.
    pub column: Option<String>,
}

/// Locates canonical fields in records whose schema is not known in advance.
///
/// Lookup runs through four strategies and stops at the first hit:
///
/// 1. exact alias keys, in alias priority order
/// 2. catalog columns overlapping any alias (case-insensitive, either direction)
/// 3. for names only, record fields whose name contains a descriptive term
/// 4. for names only, the first text value longer than three characters that is
///    not a number
///
/// A miss is never an error; [`ColumnResolver::resolve`] falls back to the
/// caller's default value.
///
/// # Example
///
/// ```ignore
/// use foodcheck_map::ColumnResolver;
/// use foodcheck_model::{CellValue, FieldCategory, FoodRecord};
///
/// let resolver = ColumnResolver::new(None);
/// let record = FoodRecord::new().with("שם", "תפוח");
/// let name = resolver.resolve(&record, FieldCategory::Name, &CellValue::from("לא צוין"));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    catalog: Option<ColumnCatalog>,
    folded_catalog: Vec<(String, String)>,
    alias_patterns: BTreeMap<FieldCategory, Vec<String>>,
    name_hints: Vec<String>,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ColumnResolver {
    /// Creates a resolver; without a catalog the fuzzy catalog step is skipped.
    pub fn new(catalog: Option<ColumnCatalog>) -> Self {
        let mut resolver = Self {
            catalog: None,
            folded_catalog: Vec::new(),
            alias_patterns: build_alias_patterns(),
            name_hints: build_name_hints(),
        };
        resolver.set_catalog(catalog);
        resolver
    }

    pub fn catalog(&self) -> Option<&ColumnCatalog> {
        self.catalog.as_ref()
    }

    /// Replaces the column catalog.
    pub fn set_catalog(&mut self, catalog: Option<ColumnCatalog>) {
        self.folded_catalog = catalog
            .iter()
            .flat_map(ColumnCatalog::iter)
            .map(|column| (column.to_string(), fold_case(column)))
            .collect();
        self.catalog = catalog;
    }

    /// Returns the value for `category`, or `default` when nothing matches.
    pub fn resolve(
        &self,
        record: &FoodRecord,
        category: FieldCategory,
        default: &CellValue,
    ) -> CellValue {
        self.locate(record, category)
            .map_or_else(|| default.clone(), |resolution| resolution.value)
    }

    /// Like [`Self::resolve`] but also reports which strategy matched.
    pub fn explain(
        &self,
        record: &FoodRecord,
        category: FieldCategory,
        default: &CellValue,
    ) -> Resolution {
        self.locate(record, category).unwrap_or_else(|| {
            trace!(%category, "no column matched, using default");
            Resolution {
                value: default.clone(),
                source: ResolutionSource::Default,
                column: None,
            }
        })
    }

    /// Finds the value for `category`, or `None` on a miss.
    pub fn locate(&self, record: &FoodRecord, category: FieldCategory) -> Option<Resolution> {
        if let Some(found) = self.exact_alias(record, category) {
            return Some(found);
        }
        if let Some(found) = self.catalog_match(record, category) {
            return Some(found);
        }
        if category == FieldCategory::Name {
            if let Some(found) = self.name_hint(record) {
                return Some(found);
            }
            if let Some(found) = first_text(record) {
                return Some(found);
            }
        }
        None
    }

    /// Catalog columns that overlap any alias of `category`, in catalog order.
    pub fn catalog_matches(&self, category: FieldCategory) -> Vec<&str> {
        let aliases = self.aliases(category);
        self.folded_catalog
            .iter()
            .filter(|(_, folded)| aliases.iter().any(|alias| contains_either_way(folded, alias)))
            .map(|(column, _)| column.as_str())
            .collect()
    }

    fn aliases(&self, category: FieldCategory) -> &[String] {
        self.alias_patterns
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn exact_alias(&self, record: &FoodRecord, category: FieldCategory) -> Option<Resolution> {
        for alias in category.aliases() {
            if let Some(value) = record.present(alias) {
                trace!(%category, column = alias, "exact alias match");
                return Some(found(value, ResolutionSource::ExactAlias, alias));
            }
        }
        None
    }

    fn catalog_match(&self, record: &FoodRecord, category: FieldCategory) -> Option<Resolution> {
        let aliases = self.aliases(category);
        for (column, folded) in &self.folded_catalog {
            if !aliases.iter().any(|alias| contains_either_way(folded, alias)) {
                continue;
            }
            if let Some(value) = record.present(column) {
                trace!(%category, column = column.as_str(), "catalog column match");
                return Some(found(value, ResolutionSource::CatalogMatch, column));
            }
        }
        None
    }

    fn name_hint(&self, record: &FoodRecord) -> Option<Resolution> {
        for (field, value) in record.iter() {
            let folded = fold_case(field);
            if self.name_hints.iter().any(|term| folded.contains(term.as_str()))
                && !value.is_empty()
            {
                trace!(column = field, "name hint match");
                return Some(found(value, ResolutionSource::NameHint, field));
            }
        }
        None
    }
}

fn first_text(record: &FoodRecord) -> Option<Resolution> {
    record.iter().find_map(|(field, value)| {
        let text = value.as_text()?;
        if utf16_len(text) > FIRST_TEXT_MIN_LEN && !is_numeric_text(text) {
            trace!(column = field, "falling back to first text field");
            Some(found(value, ResolutionSource::FirstText, field))
        } else {
            None
        }
    })
}

fn found(value: &CellValue, source: ResolutionSource, column: &str) -> Resolution {
    Resolution {
        value: value.clone(),
        source,
        column: Some(column.to_string()),
    }
}

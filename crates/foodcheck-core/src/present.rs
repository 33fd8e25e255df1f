//! Turns food records into display rows.

use foodcheck_map::ColumnResolver;
use foodcheck_model::{CellValue, FieldCategory, FoodRecord, ResolvedFood, UNSPECIFIED, Verdict};

use crate::classify::{ApprovalClassifier, ClassifierRules};

/// One display row: the five resolved attributes as text plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub verdict: Verdict,
}

impl RenderRow {
    pub fn cell(&self, category: FieldCategory) -> &str {
        match category {
            FieldCategory::Name => &self.name,
            FieldCategory::Calories => &self.calories,
            FieldCategory::Protein => &self.protein,
            FieldCategory::Carbs => &self.carbs,
            FieldCategory::Fat => &self.fat,
        }
    }
}

impl From<&ResolvedFood> for RenderRow {
    fn from(food: &ResolvedFood) -> Self {
        Self {
            name: food.name.display_text(),
            calories: food.calories.display_text(),
            protein: food.protein.display_text(),
            carbs: food.carbs.display_text(),
            fat: food.fat.display_text(),
            verdict: food.verdict,
        }
    }
}

/// Builds display rows from a page of records.
///
/// Owns the resolver and classifier rules so the column catalog can be
/// swapped in once it arrives.
#[derive(Debug, Clone)]
pub struct ResultsPresenter {
    resolver: ColumnResolver,
    rules: ClassifierRules,
    placeholder: CellValue,
}

impl Default for ResultsPresenter {
    fn default() -> Self {
        Self::new(ColumnResolver::default(), ClassifierRules::default())
    }
}

impl ResultsPresenter {
    pub fn new(resolver: ColumnResolver, rules: ClassifierRules) -> Self {
        Self {
            resolver,
            rules,
            placeholder: CellValue::from(UNSPECIFIED),
        }
    }

    /// Overrides the marker shown for unresolved attributes.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = CellValue::Text(placeholder.into());
        self
    }

    pub fn resolver(&self) -> &ColumnResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ColumnResolver {
        &mut self.resolver
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    pub fn placeholder(&self) -> &CellValue {
        &self.placeholder
    }

    pub fn classifier(&self) -> ApprovalClassifier<'_> {
        ApprovalClassifier::new(&self.resolver, &self.rules)
    }

    /// Resolves all five attributes of `record` and classifies it.
    pub fn resolve_food(&self, record: &FoodRecord) -> ResolvedFood {
        let value = |category| self.resolver.resolve(record, category, &self.placeholder);
        ResolvedFood {
            name: value(FieldCategory::Name),
            calories: value(FieldCategory::Calories),
            protein: value(FieldCategory::Protein),
            carbs: value(FieldCategory::Carbs),
            fat: value(FieldCategory::Fat),
            verdict: self.classifier().verdict(record),
        }
    }

    /// One row per record, in input order. An empty slice yields no rows.
    pub fn present(&self, records: &[FoodRecord]) -> Vec<RenderRow> {
        records
            .iter()
            .map(|record| RenderRow::from(&self.resolve_food(record)))
            .collect()
    }
}

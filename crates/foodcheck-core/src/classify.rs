//! Approved/restricted classification of food records.

use foodcheck_map::{ColumnResolver, lenient_number};
use foodcheck_model::{CellValue, FieldCategory, FoodRecord, Verdict};

/// Name fragments that mark a food as restricted.
pub const RESTRICTED_TERMS: &[&str] = &[
    "ממתק",
    "חטיף",
    "ממוזג",
    "sugar",
    "סוכר",
    "שוקולד",
    "קולה",
    "מטוגן",
    "צ'יפס",
    "בירה",
    "ויסקי",
    "אלכוהול",
    "alcohol",
    "עוגה",
    "עוגיות",
    "ממרח",
    "מרגרינה",
    "אינסטנט",
    "נקניק",
];

/// Foods at or above this many calories are restricted.
pub const CALORIE_LIMIT: f64 = 300.0;

/// Rule set applied by [`ApprovalClassifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierRules {
    restricted_terms: Vec<String>,
    calorie_limit: f64,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::new(RESTRICTED_TERMS.iter().copied(), CALORIE_LIMIT)
    }
}

impl ClassifierRules {
    /// Builds rules from custom terms; terms are lower-cased once here.
    pub fn new<I, S>(restricted_terms: I, calorie_limit: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            restricted_terms: restricted_terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
            calorie_limit,
        }
    }

    pub fn restricted_terms(&self) -> &[String] {
        &self.restricted_terms
    }

    pub fn calorie_limit(&self) -> f64 {
        self.calorie_limit
    }
}

/// Why a record received its verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict: Verdict,
    /// First restricted term found in the name.
    pub matched_term: Option<String>,
    /// Parsed calorie value; `None` when the value is not a number.
    pub calories: Option<f64>,
}

/// Decides whether a food is approved.
///
/// A record is approved when its name contains none of the restricted terms
/// and its calories are either unparsable or below the limit. A missing or
/// garbled calorie value never causes a rejection on its own.
#[derive(Debug, Clone, Copy)]
pub struct ApprovalClassifier<'a> {
    resolver: &'a ColumnResolver,
    rules: &'a ClassifierRules,
}

impl<'a> ApprovalClassifier<'a> {
    pub fn new(resolver: &'a ColumnResolver, rules: &'a ClassifierRules) -> Self {
        Self { resolver, rules }
    }

    /// Returns true when the record is approved.
    pub fn classify(&self, record: &FoodRecord) -> bool {
        self.assess(record).verdict.is_approved()
    }

    pub fn verdict(&self, record: &FoodRecord) -> Verdict {
        self.assess(record).verdict
    }

    pub fn assess(&self, record: &FoodRecord) -> Assessment {
        let name = self
            .resolver
            .resolve(record, FieldCategory::Name, &CellValue::from(""))
            .display_text()
            .to_lowercase();
        let calories_value =
            self.resolver
                .resolve(record, FieldCategory::Calories, &CellValue::from("0"));
        let calories = lenient_number(&calories_value);

        let matched_term = self
            .rules
            .restricted_terms
            .iter()
            .find(|term| name.contains(term.as_str()))
            .cloned();
        let reasonable_calories = calories.is_none_or(|value| value < self.rules.calorie_limit);

        Assessment {
            verdict: Verdict::from_approved(matched_term.is_none() && reasonable_calories),
            matched_term,
            calories,
        }
    }
}

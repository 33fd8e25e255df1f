use std::collections::BTreeMap;

use foodcheck_model::FieldCategory;

use crate::utils::fold_case;

/// Descriptive terms that suggest a field holds the food's name.
pub const NAME_HINT_TERMS: &[&str] = &["תיאור", "שם", "מזון", "תאור", "תיאור_המזון", "מוצר"];

/// Case-folded aliases for every category, in priority order.
pub fn build_alias_patterns() -> BTreeMap<FieldCategory, Vec<String>> {
    let mut patterns = BTreeMap::new();
    for category in FieldCategory::ALL {
        let values = category
            .aliases()
            .iter()
            .map(|alias| fold_case(alias))
            .collect();
        patterns.insert(category, values);
    }
    patterns
}

pub fn build_name_hints() -> Vec<String> {
    NAME_HINT_TERMS.iter().map(|term| fold_case(term)).collect()
}

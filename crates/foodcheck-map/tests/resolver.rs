use foodcheck_map::{ColumnResolver, ResolutionSource};
use foodcheck_model::{CellValue, ColumnCatalog, FieldCategory, FoodRecord, UNSPECIFIED};
use proptest::prelude::*;

fn unspecified() -> CellValue {
    CellValue::from(UNSPECIFIED)
}

#[test]
fn exact_alias_respects_priority_order() {
    let resolver = ColumnResolver::new(None);
    // "קלוריות" precedes "calories" in the calories alias list.
    let record = FoodRecord::new()
        .with("calories", 50.0)
        .with("קלוריות", 99.0);
    let value = resolver.resolve(&record, FieldCategory::Calories, &unspecified());
    assert_eq!(value, CellValue::Number(99.0));
}

#[test]
fn exact_alias_skips_empty_values() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new()
        .with("protein", "")
        .with("חלבון", CellValue::Missing)
        .with("proteins", 3.2);
    let resolution = resolver.explain(&record, FieldCategory::Protein, &unspecified());
    assert_eq!(resolution.value, CellValue::Number(3.2));
    assert_eq!(resolution.column.as_deref(), Some("proteins"));
}

#[test]
fn exact_alias_is_case_sensitive() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new().with("PROTEIN", 4.0);
    let value = resolver.resolve(&record, FieldCategory::Protein, &unspecified());
    assert_eq!(value, unspecified());
}

#[test]
fn catalog_match_uses_substring_in_either_direction() {
    let catalog = ColumnCatalog::from_iter(["Code", "Total_Fat_G", "carbohydrates_g"]);
    let resolver = ColumnResolver::new(Some(catalog));
    let record = FoodRecord::new()
        .with("Code", 1.0)
        .with("Total_Fat_G", 7.5)
        .with("carbohydrates_g", 12.0);

    let fat = resolver.explain(&record, FieldCategory::Fat, &unspecified());
    assert_eq!(fat.value, CellValue::Number(7.5));
    assert_eq!(fat.source, ResolutionSource::CatalogMatch);
    assert_eq!(fat.column.as_deref(), Some("Total_Fat_G"));

    let carbs = resolver.resolve(&record, FieldCategory::Carbs, &unspecified());
    assert_eq!(carbs, CellValue::Number(12.0));
}

#[test]
fn catalog_match_follows_catalog_order_and_skips_empty_columns() {
    let catalog = ColumnCatalog::from_iter(["energy_kj", "energy_kcal"]);
    let resolver = ColumnResolver::new(Some(catalog));
    let record = FoodRecord::new()
        .with("energy_kcal", 120.0)
        .with("energy_kj", "");
    let value = resolver.resolve(&record, FieldCategory::Calories, &unspecified());
    assert_eq!(value, CellValue::Number(120.0));
}

#[test]
fn catalog_match_ignores_columns_missing_from_record() {
    let catalog = ColumnCatalog::from_iter(["fat_per_100g"]);
    let resolver = ColumnResolver::new(Some(catalog));
    let record = FoodRecord::new().with("other", 1.0);
    let value = resolver.resolve(&record, FieldCategory::Fat, &unspecified());
    assert_eq!(value, unspecified());
}

#[test]
fn catalog_step_skipped_without_catalog() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new().with("Total_Fat_G", 7.5);
    let value = resolver.resolve(&record, FieldCategory::Fat, &unspecified());
    assert_eq!(value, unspecified());
}

#[test]
fn name_hint_scans_record_field_names() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new()
        .with("קוד", 1001.0)
        .with("תיאור_מוצר_מלא", "לחם מחיטה מלאה");
    let resolution = resolver.explain(&record, FieldCategory::Name, &unspecified());
    assert_eq!(resolution.value, CellValue::from("לחם מחיטה מלאה"));
    assert_eq!(resolution.source, ResolutionSource::NameHint);
}

#[test]
fn name_falls_back_to_first_non_numeric_text() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new()
        .with("code", "1234")
        .with("short", "abc")
        .with("label", "Whole wheat bread")
        .with("note", "other text");
    let resolution = resolver.explain(&record, FieldCategory::Name, &unspecified());
    assert_eq!(resolution.value, CellValue::from("Whole wheat bread"));
    assert_eq!(resolution.source, ResolutionSource::FirstText);
}

#[test]
fn heuristics_only_apply_to_names() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new().with("label", "Whole wheat bread");
    let value = resolver.resolve(&record, FieldCategory::Protein, &unspecified());
    assert_eq!(value, unspecified());
}

#[test]
fn name_default_when_only_numbers() {
    let resolver = ColumnResolver::new(None);
    let record = FoodRecord::new()
        .with("a", "12345")
        .with("b", 3.0)
        .with("c", " 1e5 ");
    let resolution = resolver.explain(&record, FieldCategory::Name, &CellValue::from(""));
    assert_eq!(resolution.source, ResolutionSource::Default);
    assert_eq!(resolution.value, CellValue::from(""));
}

#[test]
fn catalog_matches_lists_overlapping_columns() {
    let catalog = ColumnCatalog::from_iter(["shmmitzrach", "food_energy", "protein", "total_fat"]);
    let resolver = ColumnResolver::new(Some(catalog));
    assert_eq!(
        resolver.catalog_matches(FieldCategory::Calories),
        vec!["food_energy"]
    );
    assert_eq!(resolver.catalog_matches(FieldCategory::Fat), vec!["total_fat"]);
    assert_eq!(resolver.catalog_matches(FieldCategory::Name), vec!["shmmitzrach"]);
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Missing),
        any::<bool>().prop_map(CellValue::Bool),
        (-1000.0f64..1000.0).prop_map(CellValue::Number),
        "[a-zא-ת0-9 ]{0,8}".prop_map(CellValue::Text),
    ]
}

fn record_strategy() -> impl Strategy<Value = FoodRecord> {
    let field = prop_oneof![
        Just("name".to_string()),
        Just("שם".to_string()),
        Just("calories".to_string()),
        Just("fat".to_string()),
        "[a-zא-ת_]{1,10}",
    ];
    prop::collection::vec((field, cell_strategy()), 0..8).prop_map(FoodRecord::from_iter)
}

fn category_strategy() -> impl Strategy<Value = FieldCategory> {
    prop::sample::select(FieldCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn resolve_is_total_and_deterministic(
        record in record_strategy(),
        category in category_strategy(),
        columns in prop::collection::vec("[a-zא-ת_]{0,10}", 0..5),
    ) {
        let resolver = ColumnResolver::new(Some(ColumnCatalog::new(columns)));
        let default = CellValue::from(UNSPECIFIED);
        let first = resolver.resolve(&record, category, &default);
        let second = resolver.resolve(&record, category, &default);
        prop_assert_eq!(&first, &second);
        if first != default {
            prop_assert!(!first.is_empty());
        }
    }

    #[test]
    fn present_exact_alias_is_always_preferred(
        record in record_strategy(),
        value in 1.0f64..500.0,
    ) {
        let resolver = ColumnResolver::new(None);
        let record = FoodRecord::from_iter(
            std::iter::once(("food_energy".to_string(), CellValue::Number(value)))
                .chain(
                    record
                        .iter()
                        .filter(|(k, _)| *k != "food_energy")
                        .map(|(k, v)| (k.to_string(), v.clone())),
                ),
        );
        let resolution = resolver.explain(&record, FieldCategory::Calories, &CellValue::Missing);
        prop_assert_eq!(resolution.source, ResolutionSource::ExactAlias);
    }
}

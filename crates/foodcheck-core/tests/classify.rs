use foodcheck_core::{ClassifierRules, ResultsPresenter};
use foodcheck_map::ColumnResolver;
use foodcheck_model::{ColumnCatalog, FoodRecord, UNSPECIFIED, Verdict};

fn presenter() -> ResultsPresenter {
    ResultsPresenter::default()
}

fn verdict(record: &FoodRecord) -> Verdict {
    presenter().classifier().verdict(record)
}

#[test]
fn plain_fruit_is_approved() {
    let record = FoodRecord::new().with("שם", "תפוח").with("קלוריות", 95);
    assert_eq!(verdict(&record), Verdict::Approved);
}

#[test]
fn restricted_term_in_name_rejects() {
    let record = FoodRecord::new()
        .with("שם", "עוגת שוקולד")
        .with("קלוריות", 120);
    assert_eq!(verdict(&record), Verdict::Restricted);
}

#[test]
fn restricted_terms_match_case_insensitively() {
    let record = FoodRecord::new().with("name", "Brown SUGAR").with("calories", 10);
    assert_eq!(verdict(&record), Verdict::Restricted);
}

#[test]
fn calorie_limit_is_exclusive() {
    let below = FoodRecord::new().with("name", "Rice").with("calories", 299.9);
    let at = FoodRecord::new().with("name", "Rice").with("calories", 300);
    assert_eq!(verdict(&below), Verdict::Approved);
    assert_eq!(verdict(&at), Verdict::Restricted);
}

#[test]
fn calorie_text_is_read_leniently() {
    let record = FoodRecord::new().with("name", "Nuts").with("calories", "610 kcal");
    assert_eq!(verdict(&record), Verdict::Restricted);
}

#[test]
fn missing_or_garbled_calories_never_reject() {
    let missing = FoodRecord::new().with("name", "Mystery stew");
    let garbled = FoodRecord::new().with("name", "Mystery stew").with("calories", "n/a");
    assert_eq!(verdict(&missing), Verdict::Approved);
    assert_eq!(verdict(&garbled), Verdict::Approved);
}

#[test]
fn custom_rules_replace_defaults() {
    let rules = ClassifierRules::new(["Soda"], 100.0);
    let presenter = ResultsPresenter::new(ColumnResolver::default(), rules);
    let soda = FoodRecord::new().with("name", "Orange soda").with("calories", 40);
    let chocolate = FoodRecord::new().with("name", "שוקולד").with("calories", 90);
    assert!(!presenter.classifier().classify(&soda));
    assert!(presenter.classifier().classify(&chocolate));
}

#[test]
fn present_fills_placeholders_for_missing_attributes() {
    let records = vec![
        FoodRecord::new().with("שם", "תפוח").with("קלוריות", 95),
        FoodRecord::new()
            .with("שם", "עוגת שוקולד")
            .with("חלבון", 5.5)
            .with("שומן", ""),
    ];
    let rows = presenter().present(&records);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].name, "תפוח");
    assert_eq!(rows[0].calories, "95");
    assert_eq!(rows[0].protein, UNSPECIFIED);
    assert_eq!(rows[0].verdict, Verdict::Approved);

    assert_eq!(rows[1].protein, "5.5");
    assert_eq!(rows[1].fat, UNSPECIFIED);
    assert_eq!(rows[1].verdict, Verdict::Restricted);
}

#[test]
fn present_of_nothing_is_empty() {
    assert!(presenter().present(&[]).is_empty());
}

#[test]
fn presenter_uses_catalog_columns() {
    let resolver = ColumnResolver::new(Some(ColumnCatalog::from_iter(["Energy_Kcal_100g"])));
    let presenter = ResultsPresenter::new(resolver, ClassifierRules::default()).with_placeholder("-");
    let record = FoodRecord::new()
        .with("name", "Granola")
        .with("Energy_Kcal_100g", 450);
    let food = presenter.resolve_food(&record);
    assert_eq!(food.calories.display_text(), "450");
    assert_eq!(food.fat.display_text(), "-");
    assert_eq!(food.verdict, Verdict::Restricted);
}

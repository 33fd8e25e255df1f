use foodcheck_cli::render::{format_page, page_summary, pagination_bar, results_table};
use foodcheck_core::{EMPTY_RESULTS, PageView, ResultsPresenter, compute_window};
use foodcheck_model::FoodRecord;

fn view(records: &[FoodRecord], page: u32, total_pages: u32) -> PageView {
    PageView {
        query: String::new(),
        page,
        total_pages,
        total_items: Some(records.len() as u64),
        rows: ResultsPresenter::default().present(records),
        window: compute_window(page, total_pages, 5),
    }
}

#[test]
fn bar_for_middle_page() {
    insta::assert_snapshot!(pagination_bar(&compute_window(5, 10, 5)), @"‹ 1 … 3 4 [5] 6 7 … 10 ›");
}

#[test]
fn bar_for_first_page() {
    insta::assert_snapshot!(pagination_bar(&compute_window(1, 10, 5)), @"· [1] 2 3 4 5 … 10 ›");
}

#[test]
fn bar_for_last_page_narrow() {
    insta::assert_snapshot!(pagination_bar(&compute_window(10, 10, 3)), @"‹ 1 … 8 9 [10] ·");
}

#[test]
fn bar_is_empty_for_single_page() {
    assert_eq!(pagination_bar(&compute_window(1, 1, 5)), "");
}

#[test]
fn table_shows_status_markers() {
    let records = vec![
        FoodRecord::new().with("שם", "תפוח").with("קלוריות", 95),
        FoodRecord::new().with("שם", "עוגת שוקולד").with("קלוריות", 420),
    ];
    let rows = ResultsPresenter::default().present(&records);
    let table = results_table(&rows).to_string();
    assert!(table.contains("תפוח"));
    assert!(table.contains("✓ מאושר"));
    assert!(table.contains("✗ לא מאושר"));
    assert!(table.contains("שם המזון"));
}

#[test]
fn empty_page_shows_message() {
    let text = format_page(&view(&[], 1, 0));
    assert!(text.starts_with(EMPTY_RESULTS));
    assert!(!text.contains('›'));
}

#[test]
fn summary_line() {
    let mut page = view(&[FoodRecord::new().with("name", "Pear")], 2, 7);
    page.total_items = Some(131);
    page.query = "pear".to_string();
    insta::assert_snapshot!(page_summary(&page), @r#"Page 2 of 7 · 131 items · query "pear""#);
}

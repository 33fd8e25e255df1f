//! Terminal rendering: result tables, the pagination bar and the loading spinner.

use std::time::Duration;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use foodcheck_core::{EMPTY_RESULTS, PageControl, PageView, PageWindow, RenderRow, ResultsPresenter};
use foodcheck_map::ColumnResolver;
use foodcheck_model::{ColumnCatalog, FieldCategory, FoodRecord, Verdict};

const STATUS_HEADER: &str = "סטטוס";
const LOADING_MESSAGE: &str = "טוען נתונים...";

// =============================================================================
// RESULTS
// =============================================================================

/// Table with one row per food: the five attributes and the verdict.
pub fn results_table(rows: &[RenderRow]) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = FieldCategory::ALL
        .iter()
        .map(|category| header_cell(category.header()))
        .collect();
    header.push(header_cell(STATUS_HEADER));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..FieldCategory::ALL.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, FieldCategory::ALL.len(), CellAlignment::Center);

    for row in rows {
        let mut cells: Vec<Cell> = FieldCategory::ALL
            .iter()
            .map(|&category| Cell::new(row.cell(category)))
            .collect();
        cells.push(verdict_cell(row.verdict));
        table.add_row(cells);
    }
    table
}

/// Full text for a loaded page: table (or empty-state message), pagination
/// bar and a one-line summary.
pub fn format_page(view: &PageView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str(EMPTY_RESULTS);
    } else {
        out.push_str(&results_table(&view.rows).to_string());
    }
    out.push('\n');
    if !view.window.is_empty() {
        out.push_str(&pagination_bar(&view.window));
        out.push('\n');
    }
    out.push_str(&page_summary(view));
    out
}

pub fn print_page(view: &PageView) {
    println!("{}", format_page(view));
}

/// `Page 2 of 7 · 131 items · query "תפוח"`
pub fn page_summary(view: &PageView) -> String {
    let mut summary = format!("Page {} of {}", view.page, view.total_pages.max(1));
    if let Some(total) = view.total_items {
        summary.push_str(&format!(" · {total} items"));
    }
    if !view.query.is_empty() {
        summary.push_str(&format!(" · query \"{}\"", view.query));
    }
    summary
}

/// Text form of the pagination controls, e.g. `‹ 1 … 4 [5] 6 … 10 ›`.
///
/// Disabled previous/next controls are shown as `·`. Empty for an empty window.
pub fn pagination_bar(window: &PageWindow) -> String {
    window
        .controls()
        .into_iter()
        .map(|control| match control {
            PageControl::Previous { target: Some(_) } => "‹".to_string(),
            PageControl::Next { target: Some(_) } => "›".to_string(),
            PageControl::Previous { target: None } | PageControl::Next { target: None } => {
                "·".to_string()
            }
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Page { number, active: true } => format!("[{number}]"),
            PageControl::Page { number, active: false } => number.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Catalog columns and the categories each one fuzzy-matches.
pub fn columns_table(catalog: &ColumnCatalog, resolver: &ColumnResolver) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Matches")]);
    apply_table_style(&mut table);
    for column in catalog.iter() {
        let matches: Vec<&str> = FieldCategory::ALL
            .iter()
            .filter(|&&category| resolver.catalog_matches(category).contains(&column))
            .map(FieldCategory::as_str)
            .collect();
        let matches_cell = if matches.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(matches.join(", "))
        };
        table.add_row(vec![Cell::new(column), matches_cell]);
    }
    table
}

/// How each attribute of `record` was resolved, and why it got its verdict.
pub fn explain_table(presenter: &ResultsPresenter, record: &FoodRecord) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Source"),
        header_cell("Column"),
    ]);
    apply_table_style(&mut table);
    for category in FieldCategory::ALL {
        let resolution = presenter
            .resolver()
            .explain(record, category, presenter.placeholder());
        table.add_row(vec![
            Cell::new(category.header()),
            Cell::new(resolution.value.display_text()),
            Cell::new(resolution.source.description()),
            resolution
                .column
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }

    let assessment = presenter.classifier().assess(record);
    let reason = match (&assessment.matched_term, assessment.calories) {
        (Some(term), _) => format!("name contains \"{term}\""),
        (None, Some(calories)) if !assessment.verdict.is_approved() => {
            format!("{calories} calories, limit {}", presenter.rules().calorie_limit())
        }
        (None, Some(calories)) => format!("{calories} calories"),
        (None, None) => "calories unknown".to_string(),
    };
    table.add_row(vec![
        header_cell(STATUS_HEADER),
        verdict_cell(assessment.verdict),
        Cell::new(reason),
        dim_cell("-"),
    ]);
    table
}

// =============================================================================
// LOADING INDICATOR
// =============================================================================

/// Spinner shown while requests are in flight.
///
/// Call [`LoadingIndicator::sync`] with the session's loading state; the
/// spinner appears and disappears accordingly. Hidden when stderr is not a
/// terminal.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    pub fn sync(&mut self, loading: bool) {
        if loading && self.bar.is_none() {
            self.bar = Some(spinner(LOADING_MESSAGE));
        } else if !loading && let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

// =============================================================================
// CELLS
// =============================================================================

fn verdict_cell(verdict: Verdict) -> Cell {
    let color = if verdict.is_approved() {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(format!("{} {}", verdict.symbol(), verdict.label()))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use foodcheck_cli::config::FoodcheckConfig;
use foodcheck_cli::input::{parse_catalog, parse_records};
use foodcheck_cli::render::{
    LoadingIndicator, columns_table, explain_table, print_page, results_table,
};
use foodcheck_client::FoodApiClient;
use foodcheck_core::{
    BrowseError, BrowserSession, Completion, EMPTY_RESULTS, FoodApi, ResultsPresenter,
};
use foodcheck_map::ColumnResolver;
use foodcheck_model::ColumnCatalog;

use crate::cli::{ClassifyArgs, SearchArgs};

pub fn connect(config: &FoodcheckConfig) -> Result<FoodApiClient> {
    FoodApiClient::new(&config.api.base_url, config.timeout())
        .with_context(|| format!("create client for {}", config.api.base_url))
}

pub fn presenter(config: &FoodcheckConfig, catalog: Option<ColumnCatalog>) -> ResultsPresenter {
    ResultsPresenter::new(ColumnResolver::new(catalog), config.classifier_rules())
        .with_placeholder(config.display.placeholder.clone())
}

pub fn open_session(config: &FoodcheckConfig) -> Result<BrowserSession<FoodApiClient>> {
    Ok(BrowserSession::new(
        connect(config)?,
        presenter(config, None),
        config.display.per_page,
        config.viewport(),
    ))
}

/// Loads one page and prints it. Returns exit code 1 when the page fails to load.
#[instrument(skip_all, fields(query = %args.query, page = args.page))]
pub async fn run_search(config: &FoodcheckConfig, args: &SearchArgs) -> Result<i32> {
    let mut session = open_session(config)?;
    let mut indicator = LoadingIndicator::default();
    indicator.sync(true);
    session.load_columns().await;
    let mut request = session.state_mut().open(&args.query, args.page);
    let (outcome, records) = loop {
        let fetched = {
            let _loading = session.loading().begin();
            session.api().fetch_page(&request.query).await
        };
        let records = match (&fetched, args.explain) {
            (Ok(page), true) => page.data.clone(),
            _ => Vec::new(),
        };
        match session.complete(request.ticket, fetched.map_err(BrowseError::data_fetch)) {
            Ok(Completion::Refetch(next)) => request = next,
            outcome => break (outcome, records),
        }
    };
    indicator.sync(session.loading().is_loading());

    match outcome {
        Ok(Completion::Loaded(view)) => {
            print_page(&view);
            for record in &records {
                println!("{}", explain_table(session.presenter(), record));
            }
            Ok(0)
        }
        Ok(_) => Ok(0),
        Err(error) => {
            debug!(error = %error, "search failed");
            eprintln!("{}", error.user_message());
            Ok(1)
        }
    }
}

/// Prints the column catalog with the categories each column matches.
pub async fn run_columns(config: &FoodcheckConfig) -> Result<i32> {
    let client = connect(config)?;
    let mut indicator = LoadingIndicator::default();
    indicator.sync(true);
    let fetched = client.fetch_columns().await;
    indicator.sync(false);

    let catalog = fetched.context("fetch column catalog")?;
    let resolver = ColumnResolver::new(Some(catalog.clone()));
    println!("{}", columns_table(&catalog, &resolver));
    Ok(0)
}

/// Classifies records from a local file.
pub fn run_classify(config: &FoodcheckConfig, args: &ClassifyArgs) -> Result<i32> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let records =
        parse_records(&content).with_context(|| format!("parse {}", args.file.display()))?;
    let catalog = match &args.columns {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            Some(parse_catalog(&content).with_context(|| format!("parse {}", path.display()))?)
        }
        None => None,
    };

    let rows = presenter(config, catalog).present(&records);
    if rows.is_empty() {
        println!("{EMPTY_RESULTS}");
        return Ok(0);
    }
    println!("{}", results_table(&rows));
    let approved = rows.iter().filter(|row| row.verdict.is_approved()).count();
    println!(
        "{} foods · {approved} approved · {} restricted",
        rows.len(),
        rows.len() - approved
    );
    Ok(0)
}

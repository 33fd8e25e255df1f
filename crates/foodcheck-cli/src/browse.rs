//! Interactive browsing loop.
//!
//! Plain input lines are search text and go through the debouncer; lines
//! starting with `:` are navigation commands and act immediately. At most one
//! page request is in flight: starting a new one aborts the previous one.

use std::future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use foodcheck_cli::config::FoodcheckConfig;
use foodcheck_cli::render::{LoadingIndicator, print_page};
use foodcheck_client::FoodApiClient;
use foodcheck_core::{
    BrowseError, BrowserSession, Completion, Debouncer, InFlight, PageRequest, PageState,
    PageView, RequestTicket,
};
use foodcheck_model::FoodPage;

use crate::commands::open_session;

const HELP: &str = "type to search · :n next · :p previous · :g N go to page · :f first · :l last · :h help · :q quit";

/// A page move requested from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Next,
    Previous,
    First,
    Last,
    GoTo(u32),
}

impl PageMove {
    fn apply(self, state: &mut PageState) -> Option<PageRequest> {
        match self {
            Self::Next => state.next_page(),
            Self::Previous => state.previous_page(),
            Self::First => state.first_page(),
            Self::Last => state.last_page(),
            Self::GoTo(page) => state.go_to_page(page),
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    Move(PageMove),
    Help,
    Quit,
    Unknown(String),
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Search(line.to_string());
        };
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("n"), None, None) => Self::Move(PageMove::Next),
            (Some("p"), None, None) => Self::Move(PageMove::Previous),
            (Some("f"), None, None) => Self::Move(PageMove::First),
            (Some("l"), None, None) => Self::Move(PageMove::Last),
            (Some("g"), Some(page), None) => match page.parse() {
                Ok(page) => Self::Move(PageMove::GoTo(page)),
                Err(_) => Self::Unknown(line.trim().to_string()),
            },
            (Some("h"), None, None) => Self::Help,
            (Some("q"), None, None) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

pub async fn run_browse(config: &FoodcheckConfig) -> Result<i32> {
    let mut session = open_session(config)?;
    let mut indicator = LoadingIndicator::default();

    indicator.sync(true);
    let first = session.start().await;
    indicator.sync(session.loading().is_loading());
    show(first);
    eprintln!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut debouncer = Debouncer::new(config.debounce());
    let mut in_flight: Option<InFlight> = None;

    loop {
        indicator.sync(session.loading().is_loading());
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("read input")? else {
                    break;
                };
                match BrowseInput::parse(&line) {
                    BrowseInput::Search(text) => debouncer.push(text),
                    BrowseInput::Move(page_move) => match page_move.apply(session.state_mut()) {
                        Some(request) => in_flight = Some(session.spawn(request)),
                        None => debug!(?page_move, "page move not available"),
                    },
                    BrowseInput::Help => eprintln!("{HELP}"),
                    BrowseInput::Quit => break,
                    BrowseInput::Unknown(command) => eprintln!("unknown command: {command}"),
                }
            }
            query = debouncer.settled() => {
                let request = session.state_mut().submit_query(&query);
                in_flight = Some(session.spawn(request));
            }
            (ticket, result) = wait_for(&mut in_flight) => {
                in_flight = complete(&mut session, ticket, result);
            }
        }
    }
    Ok(0)
}

async fn wait_for(
    in_flight: &mut Option<InFlight>,
) -> (RequestTicket, foodcheck_core::Result<FoodPage>) {
    match in_flight {
        Some(request) => request.await,
        None => future::pending().await,
    }
}

/// Applies a finished request; returns the follow-up request for the last
/// page when the finished one was past the end.
fn complete(
    session: &mut BrowserSession<FoodApiClient>,
    ticket: RequestTicket,
    result: foodcheck_core::Result<FoodPage>,
) -> Option<InFlight> {
    match session.complete(ticket, result) {
        Ok(Completion::Loaded(view)) => print_page(&view),
        Ok(Completion::Refetch(request)) => return Some(session.spawn(request)),
        Ok(Completion::Stale) => {}
        Err(error) => report(&error),
    }
    None
}

fn show(outcome: foodcheck_core::Result<Option<PageView>>) {
    match outcome {
        Ok(Some(view)) => print_page(&view),
        Ok(None) => {}
        Err(error) => report(&error),
    }
}

fn report(error: &BrowseError) {
    debug!(error = %error, "page load failed");
    eprintln!("{}", error.user_message());
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodcheck_core::Applied;

    #[test]
    fn plain_lines_are_search_text() {
        assert_eq!(
            BrowseInput::parse(" לחם "),
            BrowseInput::Search(" לחם ".to_string())
        );
        assert_eq!(BrowseInput::parse(""), BrowseInput::Search(String::new()));
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(BrowseInput::parse(":n"), BrowseInput::Move(PageMove::Next));
        assert_eq!(BrowseInput::parse(" :p "), BrowseInput::Move(PageMove::Previous));
        assert_eq!(BrowseInput::parse(":g 12"), BrowseInput::Move(PageMove::GoTo(12)));
        assert_eq!(BrowseInput::parse(":q"), BrowseInput::Quit);
    }

    #[test]
    fn malformed_commands() {
        assert_eq!(BrowseInput::parse(":g"), BrowseInput::Unknown(":g".to_string()));
        assert_eq!(BrowseInput::parse(":g x"), BrowseInput::Unknown(":g x".to_string()));
        assert_eq!(BrowseInput::parse(":zz"), BrowseInput::Unknown(":zz".to_string()));
    }

    #[test]
    fn page_moves_use_state_rules() {
        let mut state = PageState::new(20);
        let request = state.refresh();
        let page = FoodPage {
            page: 1,
            total_pages: 4,
            ..FoodPage::default()
        };
        assert_eq!(state.apply_page(request.ticket, &page), Applied::Current);

        assert!(PageMove::Previous.apply(&mut state).is_none());
        assert_eq!(PageMove::Last.apply(&mut state).unwrap().query.page, 4);
        assert!(PageMove::GoTo(9).apply(&mut state).is_none());
        assert_eq!(PageMove::First.apply(&mut state).unwrap().query.page, 1);
    }
}

//! Query and paging state of a browsing session.

use tracing::debug;

use foodcheck_model::{DEFAULT_PAGE_SIZE, FoodPage, PageQuery};

/// Identifies one issued request; later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A fetch the caller should perform, tagged with its ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: RequestTicket,
    pub query: PageQuery,
}

/// Result of [`PageState::apply_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The response belongs to a superseded request; nothing changed.
    Stale,
    /// The response is now the current page.
    Current,
    /// The requested page lies past the last page. The page count was taken
    /// over and the last page should be fetched with the enclosed request.
    PastEnd(PageRequest),
}

/// Tracks the current page, the last submitted query and the latest request.
///
/// Only the most recently issued request may update the state; responses to
/// older tickets are reported stale by [`PageState::apply_page`].
///
/// `current_page` always stays within `1..=max(total_pages, 1)`.
#[derive(Debug, Clone)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    last_query: String,
    issued: u64,
    latest: Option<RequestTicket>,
    requested_page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Creates a fresh state; a zero page size falls back to one row.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            page_size: page_size.max(1),
            last_query: String::new(),
            issued: 0,
            latest: None,
            requested_page: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total pages reported by the last accepted response, 0 before any.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Ticket of the request whose response is still awaited or was last applied.
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        self.latest
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest == Some(ticket)
    }

    /// Request for the current page with the current query.
    pub fn refresh(&mut self) -> PageRequest {
        self.issue(self.current_page)
    }

    /// Submits search text.
    ///
    /// The text is trimmed. A query different from the last one resets the
    /// session to page 1. A request is issued either way, so an unchanged
    /// query re-fetches the current page.
    pub fn submit_query(&mut self, raw: &str) -> PageRequest {
        let query = raw.trim();
        if query != self.last_query {
            debug!(query, previous = self.last_query.as_str(), "search query changed");
            self.current_page = 1;
            self.last_query = query.to_string();
        }
        self.issue(self.current_page)
    }

    /// Moves to `target` when it differs from the current page and lies in
    /// `1..=total_pages`. Anything else is ignored.
    pub fn go_to_page(&mut self, target: u32) -> Option<PageRequest> {
        if target == self.current_page || target < 1 || target > self.total_pages {
            debug!(target, current = self.current_page, total = self.total_pages, "ignoring page change");
            return None;
        }
        self.current_page = target;
        Some(self.issue(target))
    }

    pub fn next_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(self.total_pages)
    }

    /// Requests `query` at `page` without knowing the page count, as when
    /// both come from the command line.
    ///
    /// The current page only moves once a response for the request is applied.
    pub fn open(&mut self, raw: &str, page: u32) -> PageRequest {
        let query = raw.trim();
        if query != self.last_query {
            self.current_page = 1;
            self.last_query = query.to_string();
        }
        self.issue(page.max(1))
    }

    /// Applies a response to the latest request.
    ///
    /// A response for a page past the last one is not shown; instead the last
    /// page is requested, once. A server that echoes a page beyond the count
    /// again is clamped.
    pub fn apply_page(&mut self, ticket: RequestTicket, page: &FoodPage) -> Applied {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.get(), "discarding stale response");
            return Applied::Stale;
        }
        self.total_pages = page.total_pages;
        let last = page.total_pages.max(1);
        if page.total_pages > 0 && page.page > last && self.requested_page > last {
            debug!(requested = self.requested_page, last, "requested page past the end");
            self.current_page = last;
            return Applied::PastEnd(self.issue(last));
        }
        self.current_page = page.page.clamp(1, last);
        Applied::Current
    }

    /// Returns to the initial state: page 1, empty query, nothing in flight.
    /// Ticket numbering keeps increasing.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.total_pages = 0;
        self.last_query.clear();
        self.latest = None;
        self.requested_page = 1;
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        self.latest = Some(ticket);
        self.requested_page = page;
        PageRequest {
            ticket,
            query: PageQuery {
                query: self.last_query.clone(),
                page,
                per_page: self.page_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32) -> FoodPage {
        FoodPage {
            page,
            total_pages,
            ..FoodPage::default()
        }
    }

    fn loaded(total_pages: u32) -> PageState {
        let mut state = PageState::default();
        let request = state.refresh();
        assert_eq!(state.apply_page(request.ticket, &page(1, total_pages)), Applied::Current);
        state
    }

    #[test]
    fn initial_request_is_first_page_without_filter() {
        let mut state = PageState::default();
        let request = state.refresh();
        assert_eq!(request.query, PageQuery::new("", 1, 20).unwrap());
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn changed_query_resets_to_first_page() {
        let mut state = loaded(10);
        state.go_to_page(4).unwrap();
        let request = state.submit_query("  תפוח ");
        assert_eq!(request.query.query, "תפוח");
        assert_eq!(request.query.page, 1);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn same_query_keeps_page_but_refetches() {
        let mut state = loaded(10);
        state.submit_query("apple");
        state.go_to_page(3).unwrap();
        let before = state.latest_ticket();
        let request = state.submit_query("apple ");
        assert_eq!(request.query.page, 3);
        assert!(Some(request.ticket) > before);
    }

    #[test]
    fn invalid_page_targets_are_ignored() {
        let mut state = loaded(5);
        assert!(state.go_to_page(1).is_none());
        assert!(state.go_to_page(0).is_none());
        assert!(state.go_to_page(6).is_none());
        assert!(state.previous_page().is_none());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.last_page().unwrap().query.page, 5);
        assert!(state.next_page().is_none());
    }

    #[test]
    fn no_navigation_before_first_response() {
        let mut state = PageState::default();
        assert!(state.go_to_page(2).is_none());
        assert!(state.next_page().is_none());
    }

    #[test]
    fn stale_ticket_does_not_apply() {
        let mut state = loaded(5);
        let old = state.submit_query("a");
        let new = state.submit_query("ab");
        assert_eq!(state.apply_page(old.ticket, &page(1, 9)), Applied::Stale);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.apply_page(new.ticket, &page(1, 2)), Applied::Current);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn open_leaves_current_page_until_applied() {
        let mut state = PageState::default();
        let request = state.open(" x ", 7);
        assert_eq!(request.query.page, 7);
        assert_eq!(request.query.query, "x");
        assert_eq!(state.current_page(), 1);
        assert!(state.current_page() <= state.total_pages().max(1));

        assert_eq!(state.apply_page(request.ticket, &page(7, 9)), Applied::Current);
        assert_eq!(state.current_page(), 7);
    }

    #[test]
    fn page_past_the_end_requests_last_page() {
        let mut state = PageState::default();
        let request = state.open("x", 7);
        let Applied::PastEnd(retry) = state.apply_page(request.ticket, &page(7, 3)) else {
            panic!("expected a request for the last page");
        };
        assert_eq!(retry.query.page, 3);
        assert_eq!(retry.query.query, "x");
        assert_eq!(state.current_page(), 3);
        assert!(state.is_current(retry.ticket));
        assert!(!state.is_current(request.ticket));

        // a second overshoot is clamped instead of retried
        assert_eq!(state.apply_page(retry.ticket, &page(7, 3)), Applied::Current);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn empty_response_is_clamped_to_first_page() {
        let mut state = PageState::default();
        let request = state.open("nothing", 4);
        assert_eq!(state.apply_page(request.ticket, &page(4, 0)), Applied::Current);
        assert_eq!(state.current_page(), 1);

        let request = state.refresh();
        assert_eq!(state.apply_page(request.ticket, &page(0, 0)), Applied::Current);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn reset_clears_query_and_pending_request() {
        let mut state = loaded(5);
        let request = state.submit_query("milk");
        state.reset();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.last_query(), "");
        assert_eq!(state.apply_page(request.ticket, &page(1, 5)), Applied::Stale);
    }
}

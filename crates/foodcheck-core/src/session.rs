//! A browsing session: API handle, paging state and presentation in one place.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use foodcheck_model::FoodPage;

use crate::api::FoodApi;
use crate::error::{BrowseError, Result};
use crate::pagination::{PageWindow, Viewport, compute_window};
use crate::present::{RenderRow, ResultsPresenter};
use crate::state::{Applied, PageRequest, PageState, RequestTicket};

// =============================================================================
// LOADING INDICATOR
// =============================================================================

/// Counts requests in flight; loading is shown while the count is non-zero.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Marks a request as started until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// Keeps the loading indicator on while alive, on every exit path.
#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// Everything needed to display one loaded page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: Option<u64>,
    pub rows: Vec<RenderRow>,
    pub window: PageWindow,
}

impl PageView {
    /// True when the page has no rows and the empty-state message applies.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of applying a finished request.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A newer request was issued meanwhile; nothing to show.
    Stale,
    /// The page to display.
    Loaded(PageView),
    /// The page was past the end; perform this request for the last page.
    Refetch(PageRequest),
}

// =============================================================================
// IN-FLIGHT REQUEST
// =============================================================================

/// A page fetch running on the runtime.
///
/// Resolves to the request's ticket and result. Dropping it aborts the fetch,
/// so replacing the in-flight request with a newer one cancels the old one.
#[derive(Debug)]
pub struct InFlight {
    ticket: RequestTicket,
    handle: JoinHandle<Result<FoodPage>>,
    _loading: LoadingGuard,
}

impl InFlight {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }
}

impl Future for InFlight {
    type Output = (RequestTicket, Result<FoodPage>);

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ticket = self.ticket;
        Pin::new(&mut self.handle).poll(cx).map(|joined| {
            let result = joined.unwrap_or_else(|err| Err(BrowseError::data_fetch(err)));
            (ticket, result)
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// One user's browsing session against a [`FoodApi`].
///
/// Only the latest issued request may update the display: responses to
/// superseded requests are dropped.
#[derive(Debug)]
pub struct BrowserSession<A> {
    api: Arc<A>,
    state: PageState,
    presenter: ResultsPresenter,
    viewport: Viewport,
    loading: LoadingTracker,
}

impl<A: FoodApi> BrowserSession<A> {
    pub fn new(
        api: impl Into<Arc<A>>,
        presenter: ResultsPresenter,
        page_size: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            api: api.into(),
            state: PageState::new(page_size),
            presenter,
            viewport,
            loading: LoadingTracker::default(),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PageState {
        &mut self.state
    }

    pub fn presenter(&self) -> &ResultsPresenter {
        &self.presenter
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Fetches the column catalog.
    ///
    /// On failure the session keeps working without a catalog; the failure
    /// is logged and `false` is returned.
    pub async fn load_columns(&mut self) -> bool {
        let _loading = self.loading.begin();
        match self.api.fetch_columns().await {
            Ok(catalog) => {
                info!(columns = catalog.len(), "loaded column catalog");
                self.presenter.resolver_mut().set_catalog(Some(catalog));
                true
            }
            Err(err) => {
                warn!(error = %err, "column catalog unavailable, using aliases only");
                false
            }
        }
    }

    /// Loads the column catalog, then the first unfiltered page.
    pub async fn start(&mut self) -> Result<Option<PageView>> {
        self.load_columns().await;
        let request = self.state.refresh();
        self.execute(request).await
    }

    /// Submits search text and loads the resulting page.
    pub async fn search(&mut self, raw: &str) -> Result<Option<PageView>> {
        let request = self.state.submit_query(raw);
        self.execute(request).await
    }

    /// Loads page `target`; `Ok(None)` when the target is not a valid move.
    pub async fn go_to_page(&mut self, target: u32) -> Result<Option<PageView>> {
        match self.state.go_to_page(target) {
            Some(request) => self.execute(request).await,
            None => Ok(None),
        }
    }

    /// Performs `request` and applies its response, following up with the
    /// last page when `request` was past the end.
    pub async fn execute(&mut self, mut request: PageRequest) -> Result<Option<PageView>> {
        loop {
            let result = {
                let _loading = self.loading.begin();
                self.api
                    .fetch_page(&request.query)
                    .await
                    .map_err(BrowseError::data_fetch)
            };
            match self.complete(request.ticket, result)? {
                Completion::Stale => return Ok(None),
                Completion::Loaded(view) => return Ok(Some(view)),
                Completion::Refetch(next) => request = next,
            }
        }
    }

    /// Applies the outcome of request `ticket`.
    ///
    /// Superseded requests yield [`Completion::Stale`] whatever their outcome,
    /// so a stale failure is never reported.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<FoodPage>) -> Result<Completion> {
        if !self.state.is_current(ticket) {
            debug!(ticket = ticket.get(), "ignoring superseded response");
            return Ok(Completion::Stale);
        }
        let page = result.inspect_err(|err| error!(error = %err, "food data request failed"))?;
        match self.state.apply_page(ticket, &page) {
            Applied::Stale => return Ok(Completion::Stale),
            Applied::PastEnd(request) => return Ok(Completion::Refetch(request)),
            Applied::Current => {}
        }
        info!(
            query = self.state.last_query(),
            page = self.state.current_page(),
            total_pages = self.state.total_pages(),
            rows = page.data.len(),
            "loaded food page"
        );
        Ok(Completion::Loaded(self.view(&page)))
    }

    /// Builds the display for an already applied page.
    pub fn view(&self, page: &FoodPage) -> PageView {
        PageView {
            query: self.state.last_query().to_string(),
            page: self.state.current_page(),
            total_pages: page.total_pages,
            total_items: page.total_items,
            rows: self.presenter.present(&page.data),
            window: compute_window(
                self.state.current_page(),
                page.total_pages,
                self.viewport.max_visible(),
            ),
        }
    }

    /// Forgets the query, paging and catalog, as on a fresh start.
    pub fn reset(&mut self) {
        self.state.reset();
        self.presenter.resolver_mut().set_catalog(None);
    }
}

impl<A> BrowserSession<A>
where
    A: FoodApi + Send + Sync + 'static,
{
    /// Starts `request` on the runtime without waiting for it.
    pub fn spawn(&self, request: PageRequest) -> InFlight {
        let api = Arc::clone(&self.api);
        let loading = self.loading.begin();
        let PageRequest { ticket, query } = request;
        let handle = tokio::spawn(async move {
            api.fetch_page(&query)
                .await
                .map_err(BrowseError::data_fetch)
        });
        InFlight {
            ticket,
            handle,
            _loading: loading,
        }
    }
}

//! Browsing logic for the food database: approval rules, display rows,
//! pagination and the request flow of a browsing session.
//!
//! Nothing in here performs I/O directly; the remote service is reached
//! through the [`FoodApi`] trait.

#![deny(unsafe_code)]

pub mod api;
pub mod classify;
pub mod debounce;
pub mod error;
pub mod pagination;
pub mod present;
pub mod session;
pub mod state;

pub use api::FoodApi;
pub use classify::{ApprovalClassifier, Assessment, CALORIE_LIMIT, ClassifierRules, RESTRICTED_TERMS};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{BrowseError, FETCH_ALERT, Result};
pub use pagination::{PageControl, PageWindow, Viewport, compute_window};
pub use present::{RenderRow, ResultsPresenter};
pub use session::{BrowserSession, Completion, InFlight, LoadingGuard, LoadingTracker, PageView};
pub use state::{Applied, PageRequest, PageState, RequestTicket};

/// Message shown when a page has no results.
pub const EMPTY_RESULTS: &str = "לא נמצאו תוצאות";

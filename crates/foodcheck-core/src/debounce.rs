//! Trailing-edge debouncing of user input.

use std::future;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Quiet interval before typed search text is submitted.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds the latest input until it has been left alone for the quiet interval.
///
/// Every [`push`](Debouncer::push) replaces the pending value and restarts
/// the timer, so a burst of inputs yields exactly one value: the last one.
///
/// ```ignore
/// loop {
///     tokio::select! {
///         line = lines.next_line() => debouncer.push(line?),
///         query = debouncer.settled() => session.search(&query).await?,
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replaces the pending value and restarts the quiet interval.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.quiet));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Waits for the pending value to settle and takes it.
    ///
    /// Never resolves while nothing is pending. Cancel safe: dropping the
    /// future keeps the pending value.
    pub async fn settled(&mut self) -> T {
        let deadline = match &self.pending {
            Some((_, deadline)) => *deadline,
            None => return future::pending().await,
        };
        sleep_until(deadline).await;
        match self.pending.take() {
            Some((value, _)) => value,
            None => future::pending().await,
        }
    }
}

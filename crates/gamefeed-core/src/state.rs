//! Pagination state machine.

/// Derived feed phase, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// Ready for the next trigger.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last page has been consumed; no further fetches.
    Exhausted,
}

/// Pagination state owned by a single feed instance.
///
/// Two flags form the implicit state machine: `is_loading` guards against
/// overlapping fetches, `has_more` ends the feed. Both are host-visible so
/// the host can reflect phase in its UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    /// Next page to request (1-indexed).
    pub current_page: u32,
    /// A fetch is currently in flight.
    pub is_loading: bool,
    /// The server has more pages.
    pub has_more: bool,
}

impl FeedState {
    /// Seed state from host bootstrap data.
    pub fn new(next_page: u32, has_next: bool) -> Self {
        Self {
            current_page: next_page.max(1),
            is_loading: false,
            has_more: has_next,
        }
    }

    /// Reset for a filter change: back to page 1, feed reopened.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.has_more = true;
        self.is_loading = false;
    }

    /// Whether a fetch may be issued right now.
    ///
    /// Invariant: a fetch for page N+1 is never issued while one is in
    /// flight or after the feed is exhausted.
    pub fn can_fetch(&self) -> bool {
        !self.is_loading && self.has_more
    }

    /// Advance past a successfully consumed page.
    ///
    /// The server's `next_page` hint wins when present; otherwise the page
    /// counter increments.
    pub fn advance(&mut self, next_page: Option<u32>) {
        self.current_page = next_page.unwrap_or(self.current_page + 1);
    }

    /// Derived phase.
    pub fn phase(&self) -> FeedPhase {
        if self.is_loading {
            FeedPhase::Loading
        } else if !self.has_more {
            FeedPhase::Exhausted
        } else {
            FeedPhase::Idle
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(1, true)
    }
}

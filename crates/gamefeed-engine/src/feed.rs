//! The `GameFeed` controller.

use std::time::Instant;

use gamefeed_core::{
    Debouncer, FeedBootstrap, FeedFilters, FeedState, ScrollMetrics, SortOrder,
    NEAR_BOTTOM_THRESHOLD,
};
use gamefeed_data::{PageQuery, PageSource};
use gamefeed_render::{render_card, render_exhausted_notice, GameCard};

use crate::HostPage;

/// What a fetch trigger ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Guard rejected the trigger: a fetch was in flight, the feed was
    /// exhausted, or the debounce window had not elapsed.
    Skipped,
    /// This many cards were appended.
    Appended(usize),
    /// The server signaled end of data; nothing was appended.
    Exhausted,
    /// The fetch failed; state is preserved so the next trigger retries.
    Failed,
}

/// Controller for one infinite-scroll game feed.
///
/// Owns all mutable feed state (one instance per feed, no globals) and
/// drives fetches from three triggers: filter application, filter reset,
/// and scroll proximity. The fetch is the only suspension point; at most
/// one is in flight at a time, enforced by `state.is_loading`.
pub struct GameFeed<S, H> {
    /// Pagination state, host-visible for phase display.
    pub state: FeedState,
    filters: FeedFilters,
    debouncer: Debouncer,
    source: S,
    host: H,
}

impl<S, H> GameFeed<S, H> {
    /// Build a feed from host bootstrap data.
    ///
    /// The source is already bound to `bootstrap.load_more_url`; the
    /// controller only tracks page numbers and filters.
    pub fn new(bootstrap: &FeedBootstrap, source: S, host: H) -> Self {
        Self {
            state: FeedState::new(bootstrap.next_page, bootstrap.has_next),
            filters: FeedFilters::default(),
            debouncer: Debouncer::default(),
            source,
            host,
        }
    }

    /// Active filters.
    pub fn filters(&self) -> &FeedFilters {
        &self.filters
    }

    /// The host page, for UI state queries.
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<S: PageSource, H: HostPage> GameFeed<S, H> {
    /// Replace the filters with values read from the host's form
    /// controls, restart the feed from page 1, and close the filter
    /// panel. The Enter key in the search field maps here.
    pub async fn apply_filters(&mut self, search: &str, sort: SortOrder) -> LoadOutcome {
        self.filters = FeedFilters::new(search, sort);
        self.host.clear_cards();
        self.state.reset();

        let outcome = self.load_more().await;
        self.host.close_filter_panel();
        outcome
    }

    /// Clear the host's form controls and restart with default filters.
    pub async fn reset_filters(&mut self) -> LoadOutcome {
        self.host.reset_filter_controls();
        self.apply_filters("", SortOrder::Default).await
    }

    /// The fetch trigger.
    ///
    /// No-op while a fetch is outstanding or after exhaustion. On
    /// success, cards are strictly appended and the page counter
    /// advances; an empty page exhausts the feed regardless of the
    /// server's `has_next`. On failure the error is logged and every
    /// piece of state except `is_loading` is left untouched, so the next
    /// trigger retries the same page. The loading flag and indicator are
    /// always cleared, on success and failure alike.
    pub async fn load_more(&mut self) -> LoadOutcome {
        if !self.state.can_fetch() {
            return LoadOutcome::Skipped;
        }

        self.state.is_loading = true;
        self.host.set_loading_visible(true);

        let query = PageQuery::new(self.state.current_page, self.filters.clone());
        let result = self.source.fetch_page(&query).await;

        let outcome = match result {
            Ok(page) if !page.is_empty() => {
                let appended = page.games.len();
                for game in &page.games {
                    let card = GameCard::from_record(game);
                    self.host.append_card(&render_card(&card));
                }
                self.state.has_more = page.has_next;
                self.state.advance(page.next_page);
                tracing::debug!(
                    appended,
                    next_page = self.state.current_page,
                    has_more = self.state.has_more,
                    "page loaded"
                );
                LoadOutcome::Appended(appended)
            }
            Ok(_) => {
                self.state.has_more = false;
                LoadOutcome::Exhausted
            }
            Err(error) => {
                tracing::warn!(%error, page = query.page, "error loading games");
                LoadOutcome::Failed
            }
        };

        self.state.is_loading = false;
        self.host.set_loading_visible(false);
        if !self.state.has_more {
            self.host.show_exhausted_notice(&render_exhausted_notice());
        }

        outcome
    }

    /// Record a scroll event at `now`; arms the debounce window.
    pub fn on_scroll_event(&mut self, now: Instant) {
        self.debouncer.note(now);
    }

    /// Debounced proximity check, called from the host's timer tick with
    /// the viewport metrics as of `now`. Fires at most once per armed
    /// window, and fetches only within 1000px of the page bottom while
    /// the guard allows it.
    pub async fn poll_scroll(&mut self, metrics: ScrollMetrics, now: Instant) -> LoadOutcome {
        if !self.debouncer.fire(now) {
            return LoadOutcome::Skipped;
        }
        if metrics.near_bottom(NEAR_BOTTOM_THRESHOLD) && self.state.can_fetch() {
            self.load_more().await
        } else {
            LoadOutcome::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use gamefeed_core::FeedPhase;
    use gamefeed_data::{FetchError, GameRecord, PageResponse};

    /// Replays a scripted sequence of responses, recording every query.
    #[derive(Default)]
    struct ScriptedSource {
        script: Mutex<VecDeque<Result<PageResponse, FetchError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn push(self, response: Result<PageResponse, FetchError>) -> Self {
            self.script.lock().unwrap().push_back(response);
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<'a> PageSource for &'a ScriptedSource {
        async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse, FetchError> {
            self.requests.lock().unwrap().push(query.to_query_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(PageResponse::default()))
        }
    }

    /// Records every host mutation.
    #[derive(Default)]
    struct RecordingHost {
        cards: Vec<String>,
        clears: usize,
        loading_log: Vec<bool>,
        notices: Vec<String>,
        panel_closes: usize,
        control_resets: usize,
    }

    impl HostPage for RecordingHost {
        fn append_card(&mut self, html: &str) {
            self.cards.push(html.to_string());
        }

        fn clear_cards(&mut self) {
            self.clears += 1;
            self.cards.clear();
        }

        fn set_loading_visible(&mut self, visible: bool) {
            self.loading_log.push(visible);
        }

        fn show_exhausted_notice(&mut self, html: &str) {
            self.notices.push(html.to_string());
        }

        fn close_filter_panel(&mut self) {
            self.panel_closes += 1;
        }

        fn reset_filter_controls(&mut self) {
            self.control_resets += 1;
        }
    }

    fn page(titles: &[&str], has_next: bool, next_page: Option<u32>) -> PageResponse {
        PageResponse {
            games: titles
                .iter()
                .map(|t| GameRecord::new(*t, format!("https://store/{t}")))
                .collect(),
            has_next,
            next_page,
        }
    }

    fn bootstrap() -> FeedBootstrap {
        FeedBootstrap::from_url("https://example.com/load-more/")
    }

    fn feed(source: &ScriptedSource) -> GameFeed<&ScriptedSource, RecordingHost> {
        GameFeed::new(&bootstrap(), source, RecordingHost::default())
    }

    #[tokio::test]
    async fn test_pages_append_until_exhausted() {
        let source = ScriptedSource::default()
            .push(Ok(page(&["a", "b"], true, Some(2))))
            .push(Ok(page(&["c", "d"], true, None)))
            .push(Ok(page(&["e"], false, None)));
        let mut feed = feed(&source);

        let mut pages_seen = vec![feed.state.current_page];
        let mut card_counts = Vec::new();
        while feed.state.can_fetch() {
            feed.load_more().await;
            pages_seen.push(feed.state.current_page);
            card_counts.push(feed.host().cards.len());
        }

        // Monotonically non-decreasing pages, strictly growing container.
        assert_eq!(pages_seen, vec![1, 2, 3, 4]);
        assert_eq!(card_counts, vec![2, 4, 5]);
        assert_eq!(feed.state.phase(), FeedPhase::Exhausted);
        assert_eq!(feed.host().notices.len(), 1);
        assert_eq!(source.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_no_fetch_while_loading() {
        let source = ScriptedSource::default();
        let mut feed = feed(&source);
        feed.state.is_loading = true;

        let before = feed.state.clone();
        assert_eq!(feed.load_more().await, LoadOutcome::Skipped);
        assert_eq!(feed.state, before);
        assert!(source.requests().is_empty());
        assert!(feed.host().loading_log.is_empty());
    }

    #[tokio::test]
    async fn test_no_fetch_after_exhaustion() {
        let source = ScriptedSource::default();
        let mut feed = feed(&source);
        feed.state.has_more = false;

        assert_eq!(feed.load_more().await, LoadOutcome::Skipped);
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_page_overrides_has_next() {
        let source = ScriptedSource::default().push(Ok(PageResponse {
            games: Vec::new(),
            has_next: true,
            next_page: Some(2),
        }));
        let mut feed = feed(&source);

        assert_eq!(feed.load_more().await, LoadOutcome::Exhausted);
        assert!(!feed.state.has_more);
        assert!(feed.host().cards.is_empty());
        // Page counter stays put; the notice replaces the indicator.
        assert_eq!(feed.state.current_page, 1);
        assert_eq!(feed.host().notices.len(), 1);
    }

    #[tokio::test]
    async fn test_apply_filters_restarts_feed() {
        let source = ScriptedSource::default()
            .push(Ok(page(&["a"], true, Some(4))))
            .push(Ok(page(&["b"], true, Some(2))));
        let mut feed = feed(&source);
        feed.load_more().await;
        assert_eq!(feed.state.current_page, 4);

        let outcome = feed.apply_filters("portal", SortOrder::PriceAsc).await;

        assert_eq!(outcome, LoadOutcome::Appended(1));
        assert_eq!(
            source.requests(),
            vec![
                "page=1&search=&sort=default".to_string(),
                "page=1&search=portal&sort=price_asc".to_string(),
            ]
        );
        assert_eq!(feed.host().clears, 1);
        assert_eq!(feed.host().panel_closes, 1);
        assert_eq!(feed.filters().search, "portal");
        // Only the fresh page's card remains after the clear.
        assert_eq!(feed.host().cards.len(), 1);
        assert_eq!(feed.state.current_page, 2);
    }

    #[tokio::test]
    async fn test_apply_filters_reopens_exhausted_feed() {
        let source = ScriptedSource::default()
            .push(Ok(page(&["a"], false, None)))
            .push(Ok(page(&["b"], true, None)));
        let mut feed = feed(&source);
        feed.load_more().await;
        assert!(!feed.state.can_fetch());

        feed.apply_filters("", SortOrder::DiscountDesc).await;
        assert!(feed.state.has_more);
        assert_eq!(feed.state.current_page, 2);
    }

    #[tokio::test]
    async fn test_reset_filters_clears_controls_and_state() {
        let source = ScriptedSource::default()
            .push(Ok(page(&["a"], true, None)))
            .push(Ok(page(&["b"], true, None)));
        let mut feed = feed(&source);
        feed.apply_filters("portal", SortOrder::PriceAsc).await;

        feed.reset_filters().await;

        assert_eq!(feed.host().control_resets, 1);
        assert_eq!(feed.filters(), &FeedFilters::default());
        assert_eq!(
            source.requests().last().unwrap(),
            "page=1&search=&sort=default"
        );
        assert_eq!(feed.host().panel_closes, 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_preserves_state() {
        let source = ScriptedSource::default()
            .push(Err(FetchError::Connection("connection refused".into())))
            .push(Ok(page(&["a"], true, None)));
        let mut feed = feed(&source);

        assert_eq!(feed.load_more().await, LoadOutcome::Failed);
        assert_eq!(feed.state.current_page, 1);
        assert!(feed.state.has_more);
        assert!(!feed.state.is_loading);
        assert!(feed.host().cards.is_empty());
        assert!(feed.host().notices.is_empty());
        // Indicator was shown, then hidden on the failure path.
        assert_eq!(feed.host().loading_log, vec![true, false]);

        // Next trigger retries the same page.
        assert_eq!(feed.load_more().await, LoadOutcome::Appended(1));
        assert_eq!(
            source.requests(),
            vec![
                "page=1&search=&sort=default".to_string(),
                "page=1&search=&sort=default".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_http_error_is_caught() {
        let source = ScriptedSource::default().push(Err(FetchError::Http {
            status: 500,
            url: "https://example.com/load-more/?page=1".into(),
        }));
        let mut feed = feed(&source);
        assert_eq!(feed.load_more().await, LoadOutcome::Failed);
        assert!(feed.state.can_fetch());
    }

    #[tokio::test]
    async fn test_scroll_near_bottom_loads() {
        let source = ScriptedSource::default().push(Ok(page(&["a"], true, None)));
        let mut feed = feed(&source);

        let start = Instant::now();
        feed.on_scroll_event(start);
        let near = ScrollMetrics::new(2400.0, 800.0, 3500.0);

        // Within the debounce window nothing fires.
        assert_eq!(
            feed.poll_scroll(near, start + Duration::from_millis(50)).await,
            LoadOutcome::Skipped
        );
        assert_eq!(
            feed.poll_scroll(near, start + Duration::from_millis(120)).await,
            LoadOutcome::Appended(1)
        );
    }

    #[tokio::test]
    async fn test_scroll_far_from_bottom_skips() {
        let source = ScriptedSource::default();
        let mut feed = feed(&source);

        let start = Instant::now();
        feed.on_scroll_event(start);
        let far = ScrollMetrics::new(0.0, 800.0, 10_000.0);
        assert_eq!(
            feed.poll_scroll(far, start + Duration::from_millis(120)).await,
            LoadOutcome::Skipped
        );
        assert!(source.requests().is_empty());
    }
}

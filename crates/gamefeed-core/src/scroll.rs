//! Scroll-proximity triggering.

use std::time::{Duration, Instant};

/// How close to the page bottom (in pixels) a scroll position must be
/// before the next page is requested.
pub const NEAR_BOTTOM_THRESHOLD: f64 = 1000.0;

/// Debounce window applied to scroll events.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// A snapshot of the host viewport at scroll time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset.
    pub scroll_y: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
    /// Total document height.
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Whether the viewport bottom is within `threshold` pixels of the
    /// document bottom.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.scroll_y + self.viewport_height >= self.document_height - threshold
    }
}

/// Trailing-edge debouncer over explicit timestamps.
///
/// Each event arms (or pushes back) a deadline one window ahead; the
/// debounced action fires once the deadline passes with no further events.
/// The clock is always passed in, so tests drive time directly.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record an event at `now`, rescheduling the pending fire.
    pub fn note(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Consume an expired deadline. Returns true at most once per armed
    /// deadline, and only after the window has elapsed event-free.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a fire is currently pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE)
    }
}

//! Core abstractions for the gamefeed engine.
//!
//! This crate provides the fundamental types:
//! - `FeedBootstrap` - Initial pagination data handed over by the host page
//! - `FeedFilters` / `SortOrder` - Client-side filter state
//! - `FeedState` - Pagination state machine
//! - `ScrollMetrics` / `Debouncer` - Scroll-proximity triggering

mod bootstrap;
mod filters;
mod scroll;
mod state;

pub use bootstrap::*;
pub use filters::*;
pub use scroll::*;
pub use state::*;

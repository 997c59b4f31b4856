//! Initial feed data handed over by the host page.

use serde::{Deserialize, Serialize};

/// Bootstrap data the host page embeds alongside the first server-rendered
/// batch of cards.
///
/// The host serializes this as a camelCase JSON blob; the engine picks up
/// pagination where the server left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedBootstrap {
    /// Next page the feed should request.
    #[serde(default = "default_next_page")]
    pub next_page: u32,
    /// Whether the server had more pages after the initial render.
    #[serde(default = "default_has_next")]
    pub has_next: bool,
    /// Endpoint URL for paginated fetches.
    pub load_more_url: String,
}

fn default_next_page() -> u32 {
    1
}

fn default_has_next() -> bool {
    true
}

impl FeedBootstrap {
    /// Create bootstrap data for a feed that starts from scratch.
    pub fn from_url(load_more_url: impl Into<String>) -> Self {
        Self {
            next_page: 1,
            has_next: true,
            load_more_url: load_more_url.into(),
        }
    }
}

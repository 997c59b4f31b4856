//! JSON payloads returned by the listing endpoint.

use serde::{Deserialize, Serialize};

/// A single game as the endpoint serves it.
///
/// Treated as an opaque display record: only `title` and `url` are
/// required, everything else degrades to an omitted card section. Prices
/// and review counts arrive as preformatted strings (the endpoint does the
/// locale formatting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    /// Store page URL the card links to.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl GameRecord {
    /// Minimal record with only the required fields.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            image_url: None,
            current_price: None,
            original_price: None,
            discount_percent: None,
            review_rating: None,
            review_count: None,
            short_description: None,
            description: None,
            release_date: None,
        }
    }
}

/// One page of the paginated listing.
///
/// A missing or empty `games` array signals the end of data regardless of
/// what `has_next` claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
}

impl PageResponse {
    /// Whether this page carries any records.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

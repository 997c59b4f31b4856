//! Pure `GameRecord` → `GameCard` transform.

use gamefeed_data::GameRecord;

/// Longest description rendered before truncation kicks in.
pub const DESCRIPTION_LIMIT: usize = 150;

/// Image section of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBlock {
    /// Remote cover image; the renderer attaches the load-error fallback.
    Remote { url: String, alt: String },
    /// "No Image" placeholder block.
    Placeholder,
}

/// Price section. The current price is always rendered (empty when the
/// record has none); the original price survives the transform only when
/// it differs from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBlock {
    pub current: String,
    pub original: Option<String>,
    pub discount_percent: Option<i64>,
}

/// Rating section; the review count never appears without a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingBlock {
    pub rating: String,
    pub count: Option<String>,
}

/// Everything a card renders, one structured field per optional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub title: String,
    pub store_url: String,
    pub image: ImageBlock,
    pub prices: PriceBlock,
    pub rating: Option<RatingBlock>,
    pub description: Option<String>,
    pub release_date: Option<String>,
}

impl GameCard {
    /// Map an endpoint record to its card. Empty strings count as absent,
    /// mirroring how the listing page treats them.
    pub fn from_record(record: &GameRecord) -> Self {
        let image = match present(&record.image_url) {
            Some(url) => ImageBlock::Remote {
                url: url.to_string(),
                alt: record.title.clone(),
            },
            None => ImageBlock::Placeholder,
        };

        let original = present(&record.original_price)
            .filter(|&o| record.current_price.as_deref() != Some(o))
            .map(String::from);
        let prices = PriceBlock {
            current: record.current_price.clone().unwrap_or_default(),
            original,
            discount_percent: record.discount_percent,
        };

        let rating = present(&record.review_rating).map(|rating| RatingBlock {
            rating: rating.to_string(),
            count: present(&record.review_count).map(String::from),
        });

        let description = match present(&record.short_description) {
            Some(short) => Some(short.to_string()),
            None => present(&record.description).map(truncate_description),
        };

        Self {
            title: record.title.clone(),
            store_url: record.url.clone(),
            image,
            prices,
            rating,
            description,
            release_date: present(&record.release_date).map(String::from),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Truncate to `DESCRIPTION_LIMIT` characters with an ellipsis suffix.
/// Counts characters, not bytes, so multibyte text never splits.
fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let mut out: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

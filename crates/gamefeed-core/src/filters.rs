//! Client-side filter state.

use serde::{Deserialize, Serialize};

/// Sort options accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Server-side default ordering.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Biggest discount first.
    DiscountDesc,
    /// Smallest discount first.
    DiscountAsc,
    /// Best rated first.
    RatingDesc,
    /// Worst rated first.
    RatingAsc,
    /// Most popular first.
    Popularity,
}

impl SortOrder {
    /// Parse the wire key used in query strings and the host's sort select.
    /// Unknown keys fall back to the default ordering.
    pub fn from_key(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "discount_desc" => Self::DiscountDesc,
            "discount_asc" => Self::DiscountAsc,
            "rating_desc" => Self::RatingDesc,
            "rating_asc" => Self::RatingAsc,
            "popularity" => Self::Popularity,
            _ => Self::Default,
        }
    }

    /// Wire key sent to the endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::DiscountDesc => "discount_desc",
            Self::DiscountAsc => "discount_asc",
            Self::RatingDesc => "rating_desc",
            Self::RatingAsc => "rating_asc",
            Self::Popularity => "popularity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::DiscountDesc => "Biggest Discount",
            Self::DiscountAsc => "Smallest Discount",
            Self::RatingDesc => "Highest Rated",
            Self::RatingAsc => "Lowest Rated",
            Self::Popularity => "Most Popular",
        }
    }

    /// All options, in the order the host's sort select lists them.
    pub fn all() -> &'static [SortOrder] {
        &[
            Self::Default,
            Self::PriceAsc,
            Self::PriceDesc,
            Self::DiscountDesc,
            Self::DiscountAsc,
            Self::RatingDesc,
            Self::RatingAsc,
            Self::Popularity,
        ]
    }
}

/// Active filter state, mirrored from the host's search input and sort
/// select. Replaced wholesale when filters are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedFilters {
    /// Search text, already trimmed.
    pub search: String,
    /// Selected sort order.
    pub sort: SortOrder,
}

impl FeedFilters {
    /// Build filters from raw form-control values.
    pub fn new(search: &str, sort: SortOrder) -> Self {
        Self {
            search: search.trim().to_string(),
            sort,
        }
    }
}

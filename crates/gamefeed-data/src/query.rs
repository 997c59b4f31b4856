//! Query-string building for paginated fetches.

use gamefeed_core::FeedFilters;

/// Parameters for one page fetch: `?page=<n>&search=<text>&sort=<key>`.
///
/// The search value is always present (empty when no filter), matching
/// what the endpoint expects from the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub filters: FeedFilters,
}

impl PageQuery {
    pub fn new(page: u32, filters: FeedFilters) -> Self {
        Self { page, filters }
    }

    /// Serialize as a query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&search={}&sort={}",
            self.page,
            urlencoding_encode(&self.filters.search),
            self.filters.sort.as_str()
        )
    }

    /// Full request URL for the given endpoint.
    pub fn url_for(&self, base: &str) -> String {
        let sep = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base, sep, self.to_query_string())
    }
}

/// Form-style URL encoding: unreserved characters pass through, space
/// becomes `+`, everything else is percent-encoded per UTF-8 byte.
fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamefeed_core::SortOrder;

    #[test]
    fn test_query_string_with_filters() {
        let query = PageQuery::new(1, FeedFilters::new("portal", SortOrder::PriceAsc));
        assert_eq!(query.to_query_string(), "page=1&search=portal&sort=price_asc");
    }

    #[test]
    fn test_query_string_defaults() {
        let query = PageQuery::new(4, FeedFilters::default());
        assert_eq!(query.to_query_string(), "page=4&search=&sort=default");
    }

    #[test]
    fn test_encoding() {
        let query = PageQuery::new(1, FeedFilters::new("half life 2", SortOrder::Default));
        assert_eq!(
            query.to_query_string(),
            "page=1&search=half+life+2&sort=default"
        );

        let query = PageQuery::new(1, FeedFilters::new("ведьмак", SortOrder::Default));
        assert!(query.to_query_string().contains("search=%D0%B2"));
    }

    #[test]
    fn test_url_for() {
        let query = PageQuery::new(2, FeedFilters::default());
        assert_eq!(
            query.url_for("https://example.com/load-more/"),
            "https://example.com/load-more/?page=2&search=&sort=default"
        );
        // Endpoint that already carries a query keeps it.
        assert_eq!(
            query.url_for("https://example.com/api?v=2"),
            "https://example.com/api?v=2&page=2&search=&sort=default"
        );
    }
}

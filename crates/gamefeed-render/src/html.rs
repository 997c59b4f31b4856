//! HTML fragment rendering.
//!
//! The markup (class names included) is a fixed contract with the host
//! stylesheet; changing it breaks the listing page's styling.

use crate::{GameCard, ImageBlock};

/// Swapped in by the browser when a cover image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/300x200/1a202c/2d3748?text=No+Image";

/// Render one card fragment.
pub fn render_card(card: &GameCard) -> String {
    let image = render_image(&card.image);
    let prices = render_prices(card);
    let rating = render_rating(card);
    let description = render_description(card);
    let release_date = card
        .release_date
        .as_deref()
        .map(|date| {
            format!(
                r#"<span class="release-date text-gray-400 text-xs">{}</span>"#,
                html_escape(date)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="game-card bg-dark-100 rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition-shadow duration-300">
    {image}
    <div class="p-4">
        <h3 class="game-title text-lg font-bold text-white mb-3 line-clamp-2">{title}</h3>
        <div class="game-prices flex items-center gap-2 mb-3">{prices}</div>
        {rating}{description}
        <div class="flex justify-between items-center">
            <a href="{url}" target="_blank" rel="noopener"
               class="steam-btn bg-[#1b2838] hover:bg-[#2a475e] text-white px-4 py-2 rounded font-bold transition-colors duration-200 text-sm">
                Buy on Steam
            </a>
            {release_date}
        </div>
    </div>
</div>"#,
        image = image,
        title = html_escape(&card.title),
        prices = prices,
        rating = rating,
        description = description,
        url = html_escape(&card.store_url),
        release_date = release_date,
    )
}

fn render_image(image: &ImageBlock) -> String {
    match image {
        ImageBlock::Remote { url, alt } => format!(
            r#"<img src="{}" alt="{}"
         class="game-image w-full h-48 object-cover"
         onerror="this.src='{}'">"#,
            html_escape(url),
            html_escape(alt),
            PLACEHOLDER_IMAGE_URL
        ),
        ImageBlock::Placeholder => r#"<div class="w-full h-48 bg-dark-300 flex items-center justify-center">
        <span class="text-gray-400">No Image</span>
    </div>"#
            .to_string(),
    }
}

fn render_prices(card: &GameCard) -> String {
    let mut html = format!(
        r#"<span class="current-price text-green-400 font-bold text-xl">{}</span>"#,
        html_escape(&card.prices.current)
    );

    if let Some(original) = &card.prices.original {
        html.push_str(&format!(
            r#"<span class="original-price text-gray-400 line-through text-sm">{}</span>"#,
            html_escape(original)
        ));
    }
    if let Some(discount) = card.prices.discount_percent {
        html.push_str(&format!(
            r#"<span class="discount bg-red-600 text-white px-2 py-1 rounded text-xs font-bold">-{}%</span>"#,
            discount
        ));
    }

    html
}

fn render_rating(card: &GameCard) -> String {
    let Some(rating) = &card.rating else {
        return String::new();
    };

    let count = rating
        .count
        .as_deref()
        .map(|count| {
            format!(
                r#"<span class="review-count text-gray-400 text-sm">({})</span>"#,
                html_escape(count)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="game-rating flex items-center gap-2 mb-3">
            <span class="text-yellow-400">&#9733;</span>
            <span class="text-white text-sm">{}</span>
            {}
        </div>"#,
        html_escape(&rating.rating),
        count
    )
}

fn render_description(card: &GameCard) -> String {
    card.description
        .as_deref()
        .map(|text| {
            format!(
                r#"<p class="game-description text-gray-300 text-sm mb-4 line-clamp-3">{}</p>"#,
                html_escape(text)
            )
        })
        .unwrap_or_default()
}

/// Terminal notice shown in the loading element once every page is in.
pub fn render_exhausted_notice() -> String {
    r#"<p class="text-gray-400">All games loaded!</p>"#.to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamefeed_data::GameRecord;

    fn card_for(record: &GameRecord) -> GameCard {
        GameCard::from_record(record)
    }

    #[test]
    fn test_card_skeleton() {
        let html = render_card(&card_for(&GameRecord::new("Game A", "https://x")));
        assert!(html.starts_with(r#"<div class="game-card"#));
        assert!(html.contains(r#"<h3 class="game-title"#));
        assert!(html.contains(r#"class="game-prices"#));
        assert!(html.contains(r#"href="https://x" target="_blank""#));
        assert!(html.contains("No Image"));
    }

    #[test]
    fn test_remote_image_carries_fallback() {
        let mut r = GameRecord::new("Game A", "https://x");
        r.image_url = Some("https://cdn/a.jpg".to_string());
        let html = render_card(&card_for(&r));
        assert!(html.contains(r#"src="https://cdn/a.jpg""#));
        assert!(html.contains(PLACEHOLDER_IMAGE_URL));
        assert!(!html.contains("No Image"));
    }

    #[test]
    fn test_equal_prices_render_no_strikethrough() {
        let mut r = GameRecord::new("Game A", "https://x");
        r.current_price = Some("9,99".to_string());
        r.original_price = Some("9,99".to_string());
        let html = render_card(&card_for(&r));
        assert!(html.contains(r#"class="current-price"#));
        assert!(!html.contains("original-price"));
        assert!(!html.contains("line-through"));
    }

    #[test]
    fn test_discount_badge_only_when_present() {
        let mut r = GameRecord::new("Game A", "https://x");
        r.current_price = Some("4,99".to_string());
        r.original_price = Some("19,99".to_string());
        r.discount_percent = Some(75);
        let html = render_card(&card_for(&r));
        assert!(html.contains(r#"class="original-price"#));
        assert!(html.contains("-75%"));

        r.discount_percent = None;
        let html = render_card(&card_for(&r));
        assert!(!html.contains(r#"class="discount"#));
    }

    #[test]
    fn test_rating_block() {
        let mut r = GameRecord::new("Game A", "https://x");
        r.review_rating = Some("Very Positive".to_string());
        r.review_count = Some("1,234".to_string());
        let html = render_card(&card_for(&r));
        assert!(html.contains("game-rating"));
        assert!(html.contains("Very Positive"));
        assert!(html.contains("(1,234)"));

        r.review_count = None;
        let html = render_card(&card_for(&r));
        assert!(!html.contains("review-count"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut r = GameRecord::new(r#"<script>"A" & B</script>"#, "https://x?a=1&b=2");
        r.description = Some("5 > 3".to_string());
        let html = render_card(&card_for(&r));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;A&quot; &amp; B"));
        assert!(html.contains("https://x?a=1&amp;b=2"));
        assert!(html.contains("5 &gt; 3"));
    }

    #[test]
    fn test_exhausted_notice() {
        assert!(render_exhausted_notice().contains("All games loaded!"));
    }
}

//! Interactive feed session.
//!
//! The prompts stand in for the listing page's filter panel: the text
//! input is the search box, the select is the sort dropdown, and each
//! confirmation is a scroll to the bottom of the page.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use gamefeed_core::{FeedBootstrap, FeedPhase, SortOrder};
use gamefeed_data::HttpPageSource;
use gamefeed_engine::{GameFeed, LoadOutcome};

use super::BrowseArgs;
use crate::config::CliConfig;
use crate::host::ExportHost;

/// Run the browse command.
pub async fn run(args: BrowseArgs, config: &CliConfig) -> Result<()> {
    let url = args
        .url
        .or_else(|| config.feed.url.clone())
        .context("No endpoint URL; pass --url or set feed.url in gamefeed.toml")?;

    let theme = ColorfulTheme::default();
    let bootstrap = FeedBootstrap::from_url(&url);
    let source = HttpPageSource::new(&bootstrap.load_more_url);
    let mut feed = GameFeed::new(&bootstrap, source, ExportHost::new());

    loop {
        let search: String = Input::with_theme(&theme)
            .with_prompt("Search")
            .allow_empty(true)
            .interact_text()?;

        let sort_names: Vec<&str> = SortOrder::all().iter().map(|s| s.display_name()).collect();
        let sort_idx = Select::with_theme(&theme)
            .with_prompt("Sort by")
            .items(&sort_names)
            .default(0)
            .interact()?;

        let outcome = feed.apply_filters(&search, SortOrder::all()[sort_idx]).await;
        report(&feed, outcome);

        while feed.state.can_fetch() {
            let more = Confirm::with_theme(&theme)
                .with_prompt("Scroll for more?")
                .default(true)
                .interact()?;
            if !more {
                break;
            }
            let outcome = feed.load_more().await;
            report(&feed, outcome);
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("New search?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    if feed.host().card_count() > 0 {
        let export = Confirm::with_theme(&theme)
            .with_prompt("Export rendered cards to a file?")
            .default(false)
            .interact()?;
        if export {
            let path: String = Input::with_theme(&theme)
                .with_prompt("Output file")
                .default("feed.html".to_string())
                .interact_text()?;
            std::fs::write(&path, feed.host().to_document())
                .with_context(|| format!("Failed to write {}", path))?;
            eprintln!("{} wrote {}", style("✓").green(), path);
        }
    }

    Ok(())
}

fn report<S>(feed: &GameFeed<S, ExportHost>, outcome: LoadOutcome) {
    let phase = match feed.state.phase() {
        FeedPhase::Idle => style("idle").dim(),
        FeedPhase::Loading => style("loading").yellow(),
        FeedPhase::Exhausted => style("exhausted").cyan(),
    };

    match outcome {
        LoadOutcome::Appended(n) => eprintln!(
            "{} +{} cards ({} total, next page {}, {})",
            style("✓").green(),
            n,
            feed.host().card_count(),
            feed.state.current_page,
            phase
        ),
        LoadOutcome::Exhausted => eprintln!(
            "{} all games loaded ({} cards)",
            style("•").cyan(),
            feed.host().card_count()
        ),
        LoadOutcome::Failed => eprintln!(
            "{} fetch failed; the feed will retry on the next trigger",
            style("✗").red()
        ),
        LoadOutcome::Skipped => {}
    }
}

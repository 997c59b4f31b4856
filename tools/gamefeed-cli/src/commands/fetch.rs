//! Page through an endpoint and export the rendered cards.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gamefeed_core::{FeedBootstrap, SortOrder};
use gamefeed_data::HttpPageSource;
use gamefeed_engine::{GameFeed, LoadOutcome};

use super::FetchArgs;
use crate::config::CliConfig;
use crate::host::ExportHost;

/// Run the fetch command.
pub async fn run(args: FetchArgs, config: &CliConfig) -> Result<()> {
    let url = args
        .url
        .or_else(|| config.feed.url.clone())
        .context("No endpoint URL; pass --url or set feed.url in gamefeed.toml")?;

    let sort_key = args
        .sort
        .or_else(|| config.feed.sort.clone())
        .unwrap_or_default();
    let sort = SortOrder::from_key(&sort_key);
    let delay = args
        .delay_ms
        .or(config.feed.delay_ms)
        .map(Duration::from_millis);

    let bootstrap = FeedBootstrap::from_url(&url);
    let source = HttpPageSource::new(&bootstrap.load_more_url);
    let mut feed = GameFeed::new(&bootstrap, source, ExportHost::new());

    let spinner = page_spinner();
    spinner.set_message(format!("fetching {}", url));

    // First request applies the filters, the rest follow the scroll loop.
    let mut fetched = 0u32;
    let mut outcome = feed.apply_filters(&args.search, sort).await;
    loop {
        match outcome {
            LoadOutcome::Appended(n) => {
                fetched += 1;
                spinner.set_message(format!(
                    "page {} loaded ({} cards, +{})",
                    fetched,
                    feed.host().card_count(),
                    n
                ));
            }
            LoadOutcome::Exhausted | LoadOutcome::Skipped => break,
            LoadOutcome::Failed => {
                spinner.finish_and_clear();
                bail!("fetch failed after {} pages; see log output", fetched);
            }
        }
        if args.pages.is_some_and(|limit| fetched >= limit) || !feed.state.can_fetch() {
            break;
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        outcome = feed.load_more().await;
    }
    spinner.finish_and_clear();

    let document = format!(
        "<!-- exported by gamefeed on {} -->\n{}",
        chrono::Local::now().to_rfc3339(),
        feed.host().to_document()
    );

    match &args.out {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path))?;
            eprintln!(
                "{} {} cards from {} pages -> {}",
                style("✓").green(),
                feed.host().card_count(),
                fetched,
                path
            );
        }
        None => print!("{}", document),
    }

    Ok(())
}

fn page_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

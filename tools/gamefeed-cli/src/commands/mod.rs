//! CLI command implementations.

pub mod browse;
pub mod fetch;

use clap::Args;

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// Listing endpoint URL (overrides the config file).
    #[arg(short, long)]
    pub url: Option<String>,

    /// Search filter.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort key (default, price_asc, price_desc, discount_desc, ...).
    #[arg(long)]
    pub sort: Option<String>,

    /// Stop after this many pages (default: run until exhausted).
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Write the rendered fragments to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Pause between page fetches, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Listing endpoint URL (overrides the config file).
    #[arg(short, long)]
    pub url: Option<String>,
}

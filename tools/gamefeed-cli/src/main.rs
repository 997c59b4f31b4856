//! Gamefeed CLI - drive an infinite-scroll game feed from the terminal.
//!
//! Commands:
//! - `gamefeed fetch` - Page through an endpoint and export rendered cards
//! - `gamefeed browse` - Interactive session with filter prompts

mod commands;
mod config;
mod host;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, FetchArgs};

/// Drive an infinite-scroll game feed from the terminal
#[derive(Parser)]
#[command(name = "gamefeed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (default: gamefeed.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Page through the endpoint and export rendered card fragments
    Fetch(FetchArgs),

    /// Browse interactively with filter prompts
    Browse(BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::CliConfig::load_or_default(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &config).await,
        Commands::Browse(args) => commands::browse::run(args, &config).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", console::style("✗").red(), e);
        std::process::exit(1);
    }

    Ok(())
}

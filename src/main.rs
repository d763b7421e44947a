//! product-catalog - Terminal product catalog viewer
//!
//! Fetches the catalog once, then filters, sorts and pages it locally.

use anyhow::Result;
use clap::{Parser, Subcommand};
use product_catalog::catalog::SortMode;
use product_catalog::commands::{BrowseCommand, ListCommand, ListOptions};
use product_catalog::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "product-catalog",
    version,
    about = "Browse a remote product catalog from the terminal",
    long_about = "Fetches a product list from a REST endpoint once, then filters by title, sorts by price, rating or title, and pages through the results locally."
)]
struct Cli {
    /// Catalog endpoint returning a JSON array of products
    #[arg(long, global = true, env = "CATALOG_ENDPOINT")]
    endpoint: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "CATALOG_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the catalog
    #[command(alias = "l")]
    List {
        /// Only show products whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort mode (default, price-asc, price-desc, rating-asc, rating-desc, title)
        #[arg(long)]
        sort: Option<SortMode>,

        /// Page to show (10 products per page)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Browse the catalog interactively
    #[command(alias = "b")]
    Browse {
        /// Go back to page 1 whenever the search or sort changes
        #[arg(long)]
        reset_page: bool,

        /// Initial sort mode
        #[arg(long)]
        sort: Option<SortMode>,
    },

    /// List the available sort modes
    Sorts,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered pages on stdout stay clean
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::List { search, sort, page } => {
            let cmd = ListCommand::new(config);
            let output = cmd.execute(&ListOptions { search, sort, page }).await?;
            println!("{}", output);
        }

        Commands::Browse { reset_page, sort } => {
            if reset_page {
                config.reset_page_on_change = true;
            }
            if let Some(sort) = sort {
                config.sort = sort;
            }

            BrowseCommand::new(config).execute().await?;
        }

        Commands::Sorts => {
            println!("Sort modes:\n");
            println!("{:<12} {:<20}", "Mode", "Label");
            println!("{:-<12} {:-<20}", "", "");

            for mode in SortMode::all() {
                println!("{:<12} {:<20}", mode.id(), mode.label());
            }
        }
    }

    Ok(())
}

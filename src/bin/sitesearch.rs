//! sitesearch CLI - search every content provider from the command line
//!
//! # Examples
//!
//! ```bash
//! # Search blog posts
//! sitesearch search "release notes" --posts ./posts.json
//!
//! # One relevance-ordered list as JSON
//! sitesearch search cat --merged --format json
//!
//! # Which providers will run
//! sitesearch list-providers
//!
//! # Show configuration
//! sitesearch show-config --all
//! ```

use clap::Parser;
use sitesearch::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitesearch=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout carries results
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

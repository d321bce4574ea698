//! CLI adapter for sitesearch
//!
//! Provides a command-line interface over the search aggregator.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (search logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitesearch - site-wide search across content providers
///
/// Searches every registered content provider (blog posts, ...) for a
/// substring and prints normalized results grouped by provider.
#[derive(Parser, Debug)]
#[command(name = "sitesearch")]
#[command(version)]
#[command(about = "Site-wide search aggregator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// JSON file of blog posts (overrides the configured posts file)
    #[arg(long, global = true, env = "SITESEARCH_POSTS_FILE")]
    pub posts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search all providers for a substring
    Search(commands::SearchArgs),

    /// List registered providers and whether they are available
    #[command(name = "list-providers")]
    ListProviders(commands::ProvidersArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sitesearch completions bash > ~/.local/share/bash-completion/completions/sitesearch
    ///   zsh:   sitesearch completions zsh > ~/.zfunc/_sitesearch
    ///   fish:  sitesearch completions fish > ~/.config/fish/completions/sitesearch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    // Load configuration
    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(posts) = cli.posts {
        config.content.posts_file = Some(posts);
    }
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ListProviders(args) => {
            commands::providers::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

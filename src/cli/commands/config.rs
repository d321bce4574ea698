//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also print provider settings and routed pages
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    match format {
        OutputFormat::Human => {
            let xdg = crate::core::xdg::XdgDirs::new();
            println!("Configuration:");
            println!("  config_file: {}", xdg.config_file().display());
            println!("  search:");
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    isolate_failures: {}", config.search.isolate_failures);
            println!("    concurrent: {}", config.search.concurrent);
            println!("  content:");
            println!("    posts_file: {}", config.content.posts_file().display());
            println!("  modules:");
            println!("    installed: {:?}", config.modules.installed);
            if args.all {
                println!("  routing:");
                println!("    base_url: {:?}", config.routing.base_url);
                println!("  pages:");
                for (page, pattern) in &config.pages {
                    println!("    {page}: {pattern}");
                }
                println!("  settings:");
                for (key, value) in &config.settings {
                    println!("    {key}: {value}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config.as_ref())?);
        }
    }

    Ok(())
}

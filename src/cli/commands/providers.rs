//! List-providers command - show registered providers

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-providers command
#[derive(Args, Debug)]
pub struct ProvidersArgs {
    /// Only show providers that will run
    #[arg(long)]
    pub available: bool,
}

/// Execute the list-providers command
pub async fn execute(
    args: ProvidersArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let providers: Vec<_> = services
        .providers()
        .into_iter()
        .filter(|p| p.available || !args.available)
        .collect();

    match format {
        OutputFormat::Human => {
            if providers.is_empty() {
                println!("No providers registered");
            }
            for provider in &providers {
                println!(
                    "{} {} available: {}",
                    colors::provider(&provider.identifier),
                    colors::label(&format!("\"{}\"", provider.display_name)),
                    colors::flag(provider.available)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }
    }

    Ok(())
}

//! Search command - query every provider

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{SearchResponse, SearchResult};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring)
    pub query: String,

    /// Print one list ordered by relevance instead of per-provider groups
    #[arg(long)]
    pub merged: bool,

    /// Also list providers that returned nothing
    #[arg(long)]
    pub show_empty: bool,
}

/// Merged result item
#[derive(Debug, Serialize)]
pub struct MergedItem<'a> {
    pub rank: usize,
    pub provider: &'a str,
    #[serde(flatten)]
    pub result: &'a SearchResult,
}

/// Merged search output
#[derive(Debug, Serialize)]
pub struct MergedOutput<'a> {
    pub query: &'a str,
    pub total_results: usize,
    pub results: Vec<MergedItem<'a>>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services.search(&args.query).await?;

    for failure in &response.failures {
        output::print_warning(&format!(
            "Provider '{}' failed: {}",
            failure.identifier, failure.error
        ));
    }

    if args.merged {
        let merged = merged_output(&response);
        match format {
            OutputFormat::Human => print_merged(&merged),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&merged)?),
        }
    } else {
        match format {
            OutputFormat::Human => print_grouped(&response, args.show_empty),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        }
    }

    Ok(())
}

/// Flatten a response into one relevance-ordered list
pub fn merged_output(response: &SearchResponse) -> MergedOutput<'_> {
    let mut results = Vec::with_capacity(response.total());
    for result in response.merged() {
        let provider = response
            .groups
            .iter()
            .find(|g| g.results.iter().any(|r| std::ptr::eq(r, result)))
            .map(|g| g.display_name.as_str())
            .unwrap_or_default();

        results.push(MergedItem {
            rank: results.len() + 1,
            provider,
            result,
        });
    }

    MergedOutput {
        query: &response.query,
        total_results: results.len(),
        results,
    }
}

fn print_grouped(response: &SearchResponse, show_empty: bool) {
    if response.total() == 0 {
        println!("No results found for '{}'", colors::label(&response.query));
        return;
    }

    println!(
        "Found {} result(s) for '{}':\n",
        colors::number(&response.total().to_string()),
        colors::label(&response.query)
    );

    for group in &response.groups {
        if group.is_empty() && !show_empty {
            continue;
        }

        output::print_header(&format!("{} ({})", group.display_name, group.len()));
        for result in &group.results {
            print_result(result);
        }
        println!();
    }
}

fn print_merged(merged: &MergedOutput<'_>) {
    if merged.results.is_empty() {
        println!("No results found for '{}'", colors::label(merged.query));
        return;
    }

    for item in &merged.results {
        print!(
            "[{}] {} ",
            colors::rank(&item.rank.to_string()),
            colors::provider(item.provider)
        );
        print_result(item.result);
    }
}

fn print_result(result: &SearchResult) {
    println!(
        "  {} {} {}",
        colors::title(&result.title),
        colors::url(&result.url),
        colors::dim(&format!(
            "(relevance: {}, {})",
            result.relevance,
            output::format_relative_time(&result.meta)
        ))
    );
    if !result.text.is_empty() {
        println!("      {}", colors::dim(&output::truncate(&result.text, 100)));
    }
}

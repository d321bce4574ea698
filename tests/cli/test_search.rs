//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Grouped and merged output
//! - Empty results
//! - Invalid queries and storage failures

use crate::common::{create_cli_test_services, test_config, PostsFile};
use sitesearch::cli::commands::search::{execute, merged_output, SearchArgs};
use sitesearch::cli::OutputFormat;

fn args(query: &str, merged: bool) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        merged,
        show_empty: false,
    }
}

/// Test grouped search in human format
#[tokio::test]
async fn test_search_grouped_human() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let result = execute(args("cat", false), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test merged search in JSON format
#[tokio::test]
async fn test_search_merged_json() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let result = execute(args("cat", true), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

/// Test merged output ranks the title match above the body match
#[tokio::test]
async fn test_search_merged_output_ranking() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let response = services.search("cat").await.expect("Search failed");
    let merged = merged_output(&response);

    assert_eq!(merged.query, "cat");
    assert_eq!(merged.total_results, 2);

    let ranks: Vec<usize> = merged.results.iter().map(|item| item.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert!(merged.results.iter().all(|item| item.provider == "Blog"));

    assert_eq!(merged.results[0].result.title, "Cats and Dogs");
    assert_eq!(merged.results[0].result.relevance, 2);
    assert_eq!(merged.results[1].result.title, "Animals");
    assert_eq!(merged.results[1].result.relevance, 1);
}

/// Test merged JSON carries flattened result fields
#[tokio::test]
async fn test_search_merged_json_shape() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let response = services.search("cat").await.expect("Search failed");
    let json = serde_json::to_value(merged_output(&response)).unwrap();

    assert_eq!(json["total_results"], 2);
    assert_eq!(json["results"][0]["rank"], 1);
    assert_eq!(json["results"][0]["provider"], "Blog");
    assert_eq!(json["results"][0]["title"], "Cats and Dogs");
    assert_eq!(json["results"][0]["relevance"], 2);
}

/// Test search with no matches
#[tokio::test]
async fn test_search_empty_results() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let mut search = args("nonexistent_term_xyz", false);
    search.show_empty = true;
    let result = execute(search, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search with no results should succeed");
}

/// Test blank query is rejected
#[tokio::test]
async fn test_search_blank_query() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let result = execute(args("  ", false), &services, OutputFormat::Human).await;
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("empty"),
        "Error should mention 'empty': {}",
        err_msg
    );
}

/// Test storage failure surfaces when isolation is off
#[tokio::test]
async fn test_search_storage_failure() {
    let posts = PostsFile::cats();
    std::fs::remove_file(posts.path()).unwrap();

    let mut config = test_config(posts.path());
    config.search.isolate_failures = false;
    let services = create_cli_test_services(config);

    let result = execute(args("cat", false), &services, OutputFormat::Human).await;
    assert!(result.is_err(), "Missing posts file should fail the search");
}

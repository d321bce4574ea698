// Test helper functions

use sitesearch::core::config::Config;
use sitesearch::core::services::Services;
use sitesearch::SearchResponse;
use std::path::Path;
use std::sync::Arc;

/// Default config reading posts from `posts_file`
#[allow(dead_code)] // Used in integration tests
pub fn test_config(posts_file: &Path) -> Config {
    let mut config = Config::default();
    config.content.posts_file = Some(posts_file.to_path_buf());
    config
}

/// Create test services over a posts file
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(posts_file: &Path) -> Services {
    Services::new(test_config(posts_file))
}

/// Create test services wrapped in Arc (matching CLI execute() signatures)
#[allow(dead_code)] // Used in integration tests
pub fn create_cli_test_services(config: Config) -> Arc<Services> {
    Arc::new(Services::new(config))
}

/// Titles of all hits in merged order
#[allow(dead_code)] // Used in integration tests
pub fn merged_titles(response: &SearchResponse) -> Vec<String> {
    response
        .merged()
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

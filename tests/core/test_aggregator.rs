// Integration tests for search aggregation through Services

use crate::common::{create_test_services, merged_titles, post, test_config, PostsFile};
use sitesearch::core::aggregator::{AggregatorOptions, SearchAggregator};
use sitesearch::core::content::JsonContentStore;
use sitesearch::core::modules::InstalledModules;
use sitesearch::core::routing::PatternRouter;
use sitesearch::core::settings::MapSettings;
use sitesearch::core::services::Services;
use sitesearch::{BlogResultsProvider, ProviderContext, ResultsProvider};
use std::sync::Arc;

#[test]
fn test_services_search_groups_blog_results() {
    let posts = PostsFile::cats();
    let services = create_test_services(posts.path());

    let response = services.aggregator.search("cat").expect("Search failed");

    assert_eq!(response.query, "cat");
    assert_eq!(response.groups.len(), 1);
    assert_eq!(response.groups[0].identifier, "RainLab.Blog");
    assert_eq!(response.groups[0].display_name, "Blog");
    assert_eq!(response.total(), 2);
    assert!(response.failures.is_empty());
}

#[test]
fn test_merged_orders_by_relevance_across_providers() {
    // Second blog source registered under another identifier stands in
    // for a different content type.
    struct Renamed(BlogResultsProvider);

    impl ResultsProvider for Renamed {
        fn search(&mut self) -> sitesearch::Result<&mut dyn ResultsProvider> {
            self.0.search()?;
            Ok(self)
        }
        fn display_name(&self) -> String {
            "Archive".to_string()
        }
        fn identifier(&self) -> &str {
            "Archive.Posts"
        }
        fn results(&self) -> &[sitesearch::SearchResult] {
            self.0.results()
        }
        fn take_results(&mut self) -> Vec<sitesearch::SearchResult> {
            self.0.take_results()
        }
    }

    let blog_posts = PostsFile::with_posts(&[post(1, "Weekly notes", "a cat appeared", 1)]);
    let archive_posts = PostsFile::with_posts(&[post(2, "Cat archive", "", 400)]);

    let context_for = |posts: &PostsFile| ProviderContext {
        settings: Arc::new(MapSettings::new()),
        modules: Arc::new(InstalledModules::new(["RainLab.Blog"])),
        content: Arc::new(JsonContentStore::new(posts.path())),
        router: Arc::new(PatternRouter::default()),
    };
    let blog_ctx = context_for(&blog_posts);
    let archive_ctx = context_for(&archive_posts);

    let mut aggregator = SearchAggregator::new(AggregatorOptions::default());
    aggregator.register(move |q| -> Box<dyn ResultsProvider> {
        Box::new(BlogResultsProvider::new(q, blog_ctx.clone()))
    });
    aggregator.register(move |q| -> Box<dyn ResultsProvider> {
        Box::new(Renamed(BlogResultsProvider::new(q, archive_ctx.clone())))
    });

    let response = aggregator.search("cat").expect("Search failed");
    assert_eq!(aggregator.identifiers(), vec!["RainLab.Blog", "Archive.Posts"]);
    assert_eq!(response.groups[0].results[0].title, "Weekly notes");
    assert_eq!(merged_titles(&response), vec!["Cat archive", "Weekly notes"]);
}

#[test]
fn test_missing_posts_file_isolated() {
    let posts = PostsFile::cats();
    std::fs::remove_file(posts.path()).unwrap();
    let services = create_test_services(posts.path());

    let response = services.aggregator.search("cat").expect("Search failed");
    assert_eq!(response.total(), 0);
    assert_eq!(response.failures.len(), 1);
    assert_eq!(response.failures[0].identifier, "RainLab.Blog");
}

#[test]
fn test_missing_posts_file_fatal_without_isolation() {
    let posts = PostsFile::cats();
    std::fs::remove_file(posts.path()).unwrap();

    let mut config = test_config(posts.path());
    config.search.isolate_failures = false;
    let services = Services::new(config);

    let err = services.aggregator.search("cat").unwrap_err();
    assert!(err.is_storage(), "Unexpected error: {err}");
}

#[test]
fn test_uninstalled_module_returns_empty_group() {
    let posts = PostsFile::cats();
    let mut config = test_config(posts.path());
    config.modules.installed.clear();

    let response = Services::new(config).aggregator.search("cat").unwrap();
    assert_eq!(response.groups.len(), 1);
    assert!(response.groups[0].is_empty());
    assert!(response.failures.is_empty());
}

#[test]
fn test_query_length_limit_from_config() {
    let posts = PostsFile::cats();
    let mut config = test_config(posts.path());
    config.search.max_query_length = 4;
    let services = Services::new(config);

    assert!(services.aggregator.search("cats").is_ok());
    let err = services.aggregator.search("kitten").unwrap_err();
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn test_concurrent_search_matches_sequential() {
    let posts = PostsFile::cats();
    let mut config = test_config(posts.path());
    config.search.concurrent = true;
    let services = Services::new(config);

    let concurrent = services.search("cat").await.expect("Search failed");
    let sequential = services.aggregator.search("cat").expect("Search failed");
    assert_eq!(merged_titles(&concurrent), merged_titles(&sequential));
}

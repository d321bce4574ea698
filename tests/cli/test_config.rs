//! Tests for the show-config CLI command

use crate::common::{create_cli_test_services, test_config, PostsFile};
use sitesearch::cli::commands::config::{execute, ConfigArgs};
use sitesearch::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_all_human() {
    let posts = PostsFile::cats();
    let mut config = test_config(posts.path());
    config
        .pages
        .insert("blog/post".to_string(), "/blog/:slug".to_string());
    config
        .settings
        .insert("rainlab_blog_label".to_string(), toml::Value::from("News"));
    let services = create_cli_test_services(config);

    let result = execute(ConfigArgs { all: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_json() {
    let posts = PostsFile::cats();
    let services = create_cli_test_services(test_config(posts.path()));

    let result = execute(ConfigArgs { all: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

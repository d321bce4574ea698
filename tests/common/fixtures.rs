// Test fixtures for integration testing

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Posts file fixture backed by a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct PostsFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl PostsFile {
    /// Write a JSON array of posts to a fresh temp dir
    #[allow(dead_code)] // Used in integration tests
    pub fn with_posts(posts: &[Value]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("posts.json");
        let json = serde_json::to_string_pretty(posts).expect("Failed to serialize posts");
        std::fs::write(&path, json).expect("Failed to write posts file");
        Self { dir, path }
    }

    /// The three-post "cat" scenario
    #[allow(dead_code)] // Used in integration tests
    pub fn cats() -> Self {
        Self::with_posts(&cat_posts())
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Timestamp `days` days in the past
#[allow(dead_code)] // Used in integration tests
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// JSON for a published post
#[allow(dead_code)] // Used in integration tests
pub fn post(id: u64, title: &str, content: &str, published_days_ago: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": format!("post-{id}"),
        "content": content,
        "published": true,
        "published_at": days_ago(published_days_ago),
        "created_at": days_ago(published_days_ago + 1),
    })
}

/// Posts from the cat scenario: title match, body match, unpublished
#[allow(dead_code)] // Used in integration tests
pub fn cat_posts() -> Vec<Value> {
    let mut draft = post(3, "Other", "none about cats", 1);
    draft["published"] = json!(false);

    vec![
        post(1, "Cats and Dogs", "...", 2),
        post(2, "Animals", "I love my cat", 5),
        draft,
    ]
}

//! Blog post records.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum characters of a summary derived from post content
pub const SUMMARY_LIMIT: usize = 600;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Image attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    /// Public URL of the image
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A blog post as stored by the CMS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Stored summary; derived from excerpt or content when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    /// Ordered; the first image is the post's thumbnail
    #[serde(default)]
    pub featured_images: Vec<FeaturedImage>,

    /// Category slugs, primary category first
    #[serde(default)]
    pub categories: Vec<String>,
}

impl BlogPost {
    /// Published flag set and publication date reached
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published && self.published_at.is_some_and(|at| at <= now)
    }

    /// Summary shown in listings
    pub fn summary(&self) -> String {
        match &self.summary {
            Some(summary) => summary.clone(),
            None => derive_summary(self.excerpt.as_deref(), &self.content),
        }
    }
}

/// Excerpt when non-empty, otherwise the tag-stripped content cut to
/// `SUMMARY_LIMIT` characters
pub fn derive_summary(excerpt: Option<&str>, content: &str) -> String {
    if let Some(excerpt) = excerpt.filter(|e| !e.trim().is_empty()) {
        return excerpt.to_string();
    }

    let stripped = HTML_TAG.replace_all(content, " ");
    let text = WHITESPACE.replace_all(stripped.trim(), " ");

    if text.chars().count() <= SUMMARY_LIMIT {
        return text.into_owned();
    }

    let cut: String = text.chars().take(SUMMARY_LIMIT).collect();
    format!("{}...", cut.trim_end())
}

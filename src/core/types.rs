//! Core data types for the site search aggregator.
//!
//! This module defines the normalized search hit produced by every
//! provider, plus the per-provider and aggregated response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relevance of a match found only in the body of a record
pub const RELEVANCE_BASE: u32 = 1;

/// Relevance of a match found in the title of a record
pub const RELEVANCE_BOOSTED: u32 = 2;

/// A single normalized search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Search term this hit was produced for
    pub query: String,

    /// Rank of the hit (higher = more relevant)
    pub relevance: u32,

    /// Display title
    pub title: String,

    /// Snippet shown under the title
    pub text: String,

    /// Timestamp shown next to the hit
    pub meta: DateTime<Utc>,

    /// Link to the original content
    pub url: String,

    /// Representative image, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl SearchResult {
    /// Create a hit with its relevance fixed; remaining fields start empty
    pub fn new(query: impl Into<String>, relevance: u32, meta: DateTime<Utc>) -> Self {
        Self {
            query: query.into(),
            relevance,
            title: String::new(),
            text: String::new(),
            meta,
            url: String::new(),
            thumb: None,
        }
    }
}

/// Results returned by one provider, namespaced by its identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResults {
    /// Stable identifier of the provider (e.g. "RainLab.Blog")
    pub identifier: String,

    /// Section label for the provider
    pub display_name: String,

    /// Hits in provider order
    pub results: Vec<SearchResult>,
}

impl ProviderResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A provider that failed while failure isolation was enabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub identifier: String,
    pub error: String,
}

/// Aggregated response across all registered providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The original query
    pub query: String,

    /// One group per provider, in registration order
    pub groups: Vec<ProviderResults>,

    /// Providers whose search failed and were skipped
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ProviderFailure>,

    /// Wall time in milliseconds
    pub duration_ms: u64,
}

impl SearchResponse {
    /// Total number of hits across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(ProviderResults::len).sum()
    }

    /// All hits ordered by relevance, highest first
    ///
    /// The sort is stable: provider order and insertion order break ties.
    pub fn merged(&self) -> Vec<&SearchResult> {
        let mut all: Vec<&SearchResult> =
            self.groups.iter().flat_map(|g| g.results.iter()).collect();
        all.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        all
    }
}

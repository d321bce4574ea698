//! In-memory content store.

use super::post::BlogPost;
use super::query::{PostQuery, PostRelation};
use super::ContentStore;
use crate::core::error::Result;
use chrono::{DateTime, Utc};

/// Content store holding its posts in memory
///
/// Publication is checked against the wall clock unless a fixed
/// reference time is set with `at`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    posts: Vec<BlogPost>,
    now: Option<DateTime<Utc>>,
}

impl MemoryContentStore {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts, now: None }
    }

    /// Evaluate publication against a fixed time
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn insert(&mut self, post: BlogPost) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Filter, order and project `posts` for a query
    pub(crate) fn evaluate(
        posts: &[BlogPost],
        query: &PostQuery,
        now: DateTime<Utc>,
    ) -> Vec<BlogPost> {
        let mut matched: Vec<BlogPost> = posts
            .iter()
            .filter(|post| post.is_published(now) && query.matches(post))
            .cloned()
            .collect();

        // sort_by is stable: ties keep storage order
        matched.sort_by(|a, b| query.order_by.compare(a, b));

        if !query.includes(PostRelation::FeaturedImages) {
            for post in &mut matched {
                post.featured_images.clear();
            }
        }

        matched
    }
}

impl ContentStore for MemoryContentStore {
    fn find_published(&self, query: &PostQuery) -> Result<Vec<BlogPost>> {
        let now = self.now.unwrap_or_else(Utc::now);
        let posts = Self::evaluate(&self.posts, query, now);

        tracing::debug!(
            "Memory store matched {} of {} post(s) for '{}'",
            posts.len(),
            self.posts.len(),
            query.needle
        );

        Ok(posts)
    }
}

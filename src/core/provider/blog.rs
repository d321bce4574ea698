//! Blog post results provider.
//!
//! Searches published posts by title, content and excerpt. Title
//! matches rank above body-only matches; results keep the content
//! store's order (newest publication first).
//!
//! # Settings
//!
//! - `rainlab_blog_enabled`: run this provider at all (default true)
//! - `rainlab_blog_label`: section label (default "Blog")
//! - `rainlab_blog_posturl`: base path for post links (default "/blog/post")
//! - `rainlab_blog_page`: named page to route post links through; takes
//!   precedence over `rainlab_blog_posturl` when set

use super::{
    is_installed_and_enabled, relevance_for, setting_key, thumbnail_url, ProviderContext,
    ResultsProvider,
};
use crate::core::content::{BlogPost, PostField, PostOrder, PostQuery, PostRelation};
use crate::core::error::Result;
use crate::core::types::SearchResult;
use std::collections::HashMap;

const IDENTIFIER: &str = "RainLab.Blog";
const DEFAULT_LABEL: &str = "Blog";
const DEFAULT_POST_URL: &str = "/blog/post";

/// Provider for blog posts
pub struct BlogResultsProvider {
    query: String,
    context: ProviderContext,
    results: Vec<SearchResult>,
}

impl BlogResultsProvider {
    pub fn new(query: impl Into<String>, context: ProviderContext) -> Self {
        Self {
            query: query.into(),
            context,
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Published posts with a matching title, content or excerpt
    fn posts(&self) -> Result<Vec<BlogPost>> {
        let query = PostQuery::matching(
            self.query.clone(),
            &[PostField::Title, PostField::Content, PostField::Excerpt],
        )
        .with(PostRelation::FeaturedImages)
        .order_by(PostOrder::PublishedAtDesc);

        self.context.content.find_published(&query)
    }

    fn to_result(&self, post: &BlogPost) -> SearchResult {
        let mut result = SearchResult::new(
            self.query.clone(),
            relevance_for(&post.title, &self.query),
            post.created_at,
        );
        result.title = post.title.clone();
        result.text = post.summary();
        result.url = self.post_url(post);
        result.thumb = thumbnail_url(&post.featured_images);
        result
    }

    /// Link to a post; a configured page route wins over the base path
    fn post_url(&self, post: &BlogPost) -> String {
        match self
            .context
            .settings
            .get_opt_string(&setting_key(IDENTIFIER, "page"))
        {
            Some(page) => self.routed_url(&page, post),
            None => self.joined_url(post),
        }
    }

    fn routed_url(&self, page: &str, post: &BlogPost) -> String {
        let mut params = HashMap::new();
        params.insert("id", post.id.to_string());
        params.insert("slug", post.slug.clone());
        if let Some(category) = post.categories.first() {
            params.insert("category", category.clone());
        }

        self.context
            .router
            .page_url(page, &params)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Page '{}' could not be resolved for post '{}'",
                    page,
                    post.slug
                );
                String::new()
            })
    }

    fn joined_url(&self, post: &BlogPost) -> String {
        let base = self
            .context
            .settings
            .get_string(&setting_key(IDENTIFIER, "posturl"), DEFAULT_POST_URL);

        [base.trim_matches('/'), post.slug.as_str()].join("/")
    }
}

impl ResultsProvider for BlogResultsProvider {
    fn search(&mut self) -> Result<&mut dyn ResultsProvider> {
        if !is_installed_and_enabled(
            self.context.modules.as_ref(),
            self.context.settings.as_ref(),
            IDENTIFIER,
        ) {
            tracing::debug!("{} is not installed or disabled, skipping", IDENTIFIER);
            return Ok(self);
        }

        let posts = self.posts()?;
        for post in &posts {
            let result = self.to_result(post);
            self.results.push(result);
        }

        tracing::debug!(
            "{} found {} post(s) for '{}'",
            IDENTIFIER,
            posts.len(),
            self.query
        );

        Ok(self)
    }

    fn display_name(&self) -> String {
        self.context
            .settings
            .get_string(&setting_key(IDENTIFIER, "label"), DEFAULT_LABEL)
    }

    fn identifier(&self) -> &str {
        IDENTIFIER
    }

    fn results(&self) -> &[SearchResult] {
        &self.results
    }

    fn take_results(&mut self) -> Vec<SearchResult> {
        std::mem::take(&mut self.results)
    }
}

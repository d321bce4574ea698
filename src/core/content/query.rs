//! Query description for content stores.

use super::post::BlogPost;
use crate::core::provider::contains_ignore_case;
use std::cmp::Ordering;

/// Searchable text fields of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Content,
    Excerpt,
}

impl PostField {
    /// Field value of a post; a missing excerpt reads as empty
    pub fn value<'a>(&self, post: &'a BlogPost) -> &'a str {
        match self {
            PostField::Title => &post.title,
            PostField::Content => &post.content,
            PostField::Excerpt => post.excerpt.as_deref().unwrap_or(""),
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    /// Newest publication first; posts without a date sort last
    #[default]
    PublishedAtDesc,
    CreatedAtDesc,
}

impl PostOrder {
    pub fn compare(&self, a: &BlogPost, b: &BlogPost) -> Ordering {
        match self {
            // Option orders None < Some, so reversing puts None last
            PostOrder::PublishedAtDesc => b.published_at.cmp(&a.published_at),
            PostOrder::CreatedAtDesc => b.created_at.cmp(&a.created_at),
        }
    }
}

/// Related collections that can be loaded with each post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRelation {
    FeaturedImages,
}

/// Substring predicate over named fields combined with OR
#[derive(Debug, Clone)]
pub struct PostQuery {
    /// Literal, case-insensitive substring
    pub needle: String,
    pub fields: Vec<PostField>,
    pub order_by: PostOrder,
    pub include: Vec<PostRelation>,
}

impl PostQuery {
    /// Match `needle` in any of `fields`, newest publication first, no relations
    pub fn matching(needle: impl Into<String>, fields: &[PostField]) -> Self {
        Self {
            needle: needle.into(),
            fields: fields.to_vec(),
            order_by: PostOrder::default(),
            include: Vec::new(),
        }
    }

    pub fn order_by(mut self, order: PostOrder) -> Self {
        self.order_by = order;
        self
    }

    pub fn with(mut self, relation: PostRelation) -> Self {
        if !self.include.contains(&relation) {
            self.include.push(relation);
        }
        self
    }

    pub fn includes(&self, relation: PostRelation) -> bool {
        self.include.contains(&relation)
    }

    /// True when any field contains the needle
    pub fn matches(&self, post: &BlogPost) -> bool {
        self.fields
            .iter()
            .any(|field| contains_ignore_case(field.value(post), &self.needle))
    }
}

//! Content store layer for blog posts.
//!
//! The content store is the read-only seam between providers and
//! the CMS that owns the records. Providers describe what they want
//! with a `PostQuery`; stores decide how to evaluate it.
//!
//! # Architecture
//!
//! - **BlogPost**: Post record with featured images and categories
//! - **PostQuery**: Substring predicate, ordering and eager loads
//! - **MemoryContentStore**: Evaluates queries over a vector of posts
//! - **JsonContentStore**: Re-reads a JSON file of posts per query
//!
//! # Posts File Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Hello world",
//!     "slug": "hello-world",
//!     "content": "<p>First post</p>",
//!     "published": true,
//!     "published_at": "2024-01-02T10:00:00Z",
//!     "created_at": "2024-01-01T09:00:00Z",
//!     "featured_images": [{ "url": "/storage/hello.jpg" }],
//!     "categories": ["news"]
//!   }
//! ]
//! ```

mod json;
mod memory;
mod post;
mod query;

use crate::core::error::Result;

pub use json::JsonContentStore;
pub use memory::MemoryContentStore;
pub use post::{derive_summary, BlogPost, FeaturedImage, SUMMARY_LIMIT};
pub use query::{PostField, PostOrder, PostQuery, PostRelation};

/// Read-only access to blog post records
pub trait ContentStore: Send + Sync {
    /// Fetch every published post matching the query, in the query's order
    fn find_published(&self, query: &PostQuery) -> Result<Vec<BlogPost>>;
}

//! sitesearch - Site-wide search aggregation for CMS content
//!
//! Runs a set of interchangeable results providers against one
//! query and returns normalized hits grouped per provider. Each
//! provider knows one content type; the blog provider searches
//! posts by title, content and excerpt and ranks title matches
//! above body-only matches.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Search logic (adapter-agnostic)
//!   - config, error, types, xdg
//!   - settings, modules, routing (CMS collaborators)
//!   - content (blog posts and content stores)
//!   - provider (provider trait, shared helpers, blog provider)
//!   - aggregator (runs providers, groups results)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!   - search, list-providers, show-config, completions
//!
//! # Example
//!
//! ```no_run
//! use sitesearch::core::content::MemoryContentStore;
//! use sitesearch::{Config, Services};
//! use std::sync::Arc;
//!
//! let services = Services::with_content(
//!     Config::default(),
//!     Arc::new(MemoryContentStore::default()),
//! );
//! let response = services.aggregator.search("cat").unwrap();
//! for hit in response.merged() {
//!     println!("{} -> {}", hit.title, hit.url);
//! }
//! ```

// Core search logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SiteSearchError};
pub use core::provider::{BlogResultsProvider, ProviderContext, ResultsProvider};
pub use core::services::Services;
pub use core::types::*;

//! Core domain logic (adapter-agnostic)
//!
//! This module contains all search logic that is independent of
//! how results are presented.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Search results and responses
//! - **xdg**: XDG directory handling
//! - **settings**: Provider settings lookup
//! - **modules**: Installed content modules
//! - **content**: Blog post records and content stores
//! - **routing**: Named page URL resolution
//! - **provider**: Results provider trait, helpers and blog provider
//! - **aggregator**: Runs providers and groups their results
//! - **services**: Unified service container

pub mod aggregator;
pub mod config;
pub mod content;
pub mod error;
pub mod modules;
pub mod provider;
pub mod routing;
pub mod services;
pub mod settings;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiteSearchError};
pub use services::Services;

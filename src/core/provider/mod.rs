//! Results providers.
//!
//! A provider searches one content type and turns its matches into
//! normalized `SearchResult`s. Every provider implements the
//! `ResultsProvider` trait; behavior they share (availability gate,
//! relevance tiers, thumbnails) lives in the free functions below.

mod blog;

pub use blog::BlogResultsProvider;

use crate::core::content::{ContentStore, FeaturedImage};
use crate::core::error::Result;
use crate::core::modules::ModuleRegistry;
use crate::core::routing::PageRouter;
use crate::core::settings::SettingsStore;
use crate::core::types::{SearchResult, RELEVANCE_BASE, RELEVANCE_BOOSTED};
use std::sync::Arc;

/// Collaborators a provider reads from
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ProviderContext {
    pub settings: Arc<dyn SettingsStore>,
    pub modules: Arc<dyn ModuleRegistry>,
    pub content: Arc<dyn ContentStore>,
    pub router: Arc<dyn PageRouter>,
}

/// Trait for per-content-type search providers
///
/// A provider is built for one query and accumulates its results
/// internally. It is not meant to be searched twice concurrently.
pub trait ResultsProvider: Send {
    /// Run the search, appending to the accumulated results
    ///
    /// Returns the provider itself so callers can read the results.
    /// An unavailable backing module yields `Ok` with no results.
    fn search(&mut self) -> Result<&mut dyn ResultsProvider>;

    /// Section label for this provider's results
    fn display_name(&self) -> String;

    /// Stable identifier of the backing content module
    fn identifier(&self) -> &str;

    /// Results accumulated so far
    fn results(&self) -> &[SearchResult];

    /// Move the accumulated results out, leaving the provider empty
    fn take_results(&mut self) -> Vec<SearchResult>;
}

/// Settings key prefix for a module identifier ("RainLab.Blog" -> "rainlab_blog")
pub fn settings_prefix(identifier: &str) -> String {
    identifier.to_lowercase().replace('.', "_")
}

/// Settings key for a module option ("RainLab.Blog", "label" -> "rainlab_blog_label")
pub fn setting_key(identifier: &str, option: &str) -> String {
    format!("{}_{}", settings_prefix(identifier), option)
}

/// Module installed and not switched off with `<prefix>_enabled`
pub fn is_installed_and_enabled(
    modules: &dyn ModuleRegistry,
    settings: &dyn SettingsStore,
    identifier: &str,
) -> bool {
    modules.is_module_available(identifier)
        && settings.get_bool(&setting_key(identifier, "enabled"), true)
}

/// Unicode case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Boosted tier when the title contains the query, base tier otherwise
pub fn relevance_for(title: &str, query: &str) -> u32 {
    if contains_ignore_case(title, query) {
        RELEVANCE_BOOSTED
    } else {
        RELEVANCE_BASE
    }
}

/// URL of the first image, if any
pub fn thumbnail_url(images: &[FeaturedImage]) -> Option<String> {
    images.first().map(|image| image.url.clone())
}

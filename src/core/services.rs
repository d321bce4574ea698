//! Unified service container for sitesearch
//!
//! Wires configuration into the settings store, module registry,
//! content store and page router, and registers providers with the
//! aggregator.

use crate::core::aggregator::{AggregatorOptions, SearchAggregator};
use crate::core::config::Config;
use crate::core::content::{ContentStore, JsonContentStore};
use crate::core::error::Result;
use crate::core::modules::{InstalledModules, ModuleRegistry};
use crate::core::provider::{
    is_installed_and_enabled, BlogResultsProvider, ProviderContext, ResultsProvider,
};
use crate::core::routing::PatternRouter;
use crate::core::settings::MapSettings;
use crate::core::types::SearchResponse;
use serde::Serialize;
use std::sync::Arc;

/// Registration details for a provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub identifier: String,
    pub display_name: String,
    pub available: bool,
}

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Collaborators shared by every provider
    pub context: ProviderContext,

    /// Aggregator with all providers registered
    pub aggregator: Arc<SearchAggregator>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, reading posts from the configured file
    pub fn new(config: Config) -> Self {
        let content = Arc::new(JsonContentStore::new(config.content.posts_file()));
        Self::with_content(config, content)
    }

    /// Create services over an explicit content store
    pub fn with_content(config: Config, content: Arc<dyn ContentStore>) -> Self {
        let context = ProviderContext {
            settings: Arc::new(MapSettings::from(config.settings.clone())),
            modules: Arc::new(InstalledModules::new(&config.modules.installed)),
            content,
            router: Arc::new(PatternRouter::new(
                config.routing.base_url.clone(),
                config.pages.clone(),
            )),
        };

        let mut aggregator = SearchAggregator::new(AggregatorOptions {
            max_query_length: config.search.max_query_length,
            isolate_failures: config.search.isolate_failures,
        });

        let blog_context = context.clone();
        aggregator.register(move |query| -> Box<dyn ResultsProvider> {
            Box::new(BlogResultsProvider::new(query, blog_context.clone()))
        });

        Self {
            context,
            aggregator: Arc::new(aggregator),
            config: Arc::new(config),
        }
    }

    /// Run a search using the configured execution mode
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        if self.config.search.concurrent {
            self.aggregator.search_concurrent(query).await
        } else {
            self.aggregator.search(query)
        }
    }

    /// Identifier, label and availability of every registered provider
    pub fn providers(&self) -> Vec<ProviderInfo> {
        self.aggregator
            .identifiers()
            .into_iter()
            .filter_map(|id| self.aggregator.provider(id, ""))
            .map(|provider| ProviderInfo {
                identifier: provider.identifier().to_string(),
                display_name: provider.display_name(),
                available: is_installed_and_enabled(
                    self.context.modules.as_ref(),
                    self.context.settings.as_ref(),
                    provider.identifier(),
                ),
            })
            .collect()
    }

    /// Module registry used by providers
    pub fn modules(&self) -> &dyn ModuleRegistry {
        self.context.modules.as_ref()
    }
}

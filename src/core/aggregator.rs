//! Search aggregation across registered providers.
//!
//! The aggregator owns one factory per provider. For each query it
//! builds fresh provider instances, runs them and groups their
//! results by provider identifier.

use crate::core::error::{Result, SiteSearchError};
use crate::core::provider::ResultsProvider;
use crate::core::types::{ProviderFailure, ProviderResults, SearchResponse};
use std::sync::Arc;
use std::time::Instant;

/// Builds a provider for a query
pub type ProviderFactory = Arc<dyn Fn(&str) -> Box<dyn ResultsProvider> + Send + Sync>;

/// Aggregator options
#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    /// Maximum query length in characters
    pub max_query_length: usize,

    /// Keep other providers' results when one fails
    pub isolate_failures: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            max_query_length: 500,
            isolate_failures: true,
        }
    }
}

/// Runs every registered provider for a query
#[derive(Clone, Default)]
pub struct SearchAggregator {
    factories: Vec<(String, ProviderFactory)>,
    options: AggregatorOptions,
}

impl SearchAggregator {
    pub fn new(options: AggregatorOptions) -> Self {
        Self {
            factories: Vec::new(),
            options,
        }
    }

    /// Register a provider factory
    ///
    /// The factory is called once with an empty query to learn the
    /// provider's identifier. Registering the same identifier again
    /// replaces the earlier factory in place.
    pub fn register<F>(&mut self, factory: F)
    where
        F: Fn(&str) -> Box<dyn ResultsProvider> + Send + Sync + 'static,
    {
        let identifier = factory("").identifier().to_string();
        let factory: ProviderFactory = Arc::new(factory);

        match self.factories.iter().position(|(id, _)| *id == identifier) {
            Some(index) => self.factories[index].1 = factory,
            None => self.factories.push((identifier, factory)),
        }
    }

    /// Identifiers of registered providers, in registration order
    pub fn identifiers(&self) -> Vec<&str> {
        self.factories.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    /// Build a provider instance by identifier
    pub fn provider(&self, identifier: &str, query: &str) -> Option<Box<dyn ResultsProvider>> {
        self.factories
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, factory)| factory(query))
    }

    /// Reject empty and overlong queries
    pub fn validate_query(&self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(SiteSearchError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let len = query.chars().count();
        if len > self.options.max_query_length {
            return Err(SiteSearchError::InvalidQuery(format!(
                "Query is {len} characters, maximum is {}",
                self.options.max_query_length
            )));
        }

        Ok(())
    }

    /// Run all providers one after another
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        self.validate_query(query)?;
        let start = Instant::now();

        let outcomes = self
            .factories
            .iter()
            .map(|(id, factory)| (id.clone(), run_provider(factory(query))))
            .collect();

        self.collect(query, outcomes, start)
    }

    /// Run all providers concurrently on the blocking thread pool
    ///
    /// Groups keep registration order regardless of completion order.
    pub async fn search_concurrent(&self, query: &str) -> Result<SearchResponse> {
        self.validate_query(query)?;
        let start = Instant::now();

        let handles: Vec<_> = self
            .factories
            .iter()
            .map(|(id, factory)| {
                let factory = Arc::clone(factory);
                let query = query.to_string();
                let handle = tokio::task::spawn_blocking(move || run_provider(factory(&query)));
                (id.clone(), handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            let outcome = handle.await.unwrap_or_else(|e| {
                Err(SiteSearchError::ProviderFailed {
                    provider: id.clone(),
                    message: format!("task failed: {e}"),
                })
            });
            outcomes.push((id, outcome));
        }

        self.collect(query, outcomes, start)
    }

    fn collect(
        &self,
        query: &str,
        outcomes: Vec<(String, Result<ProviderResults>)>,
        start: Instant,
    ) -> Result<SearchResponse> {
        let mut groups = Vec::new();
        let mut failures = Vec::new();

        for (identifier, outcome) in outcomes {
            match outcome {
                Ok(group) => groups.push(group),
                Err(e) if self.options.isolate_failures => {
                    tracing::warn!("Provider '{}' failed, skipping: {}", identifier, e);
                    failures.push(ProviderFailure {
                        identifier,
                        error: e.message(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let response = SearchResponse {
            query: query.to_string(),
            groups,
            failures,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Search '{}' returned {} result(s) from {} provider(s) in {}ms",
            query,
            response.total(),
            response.groups.len(),
            response.duration_ms
        );

        Ok(response)
    }
}

fn run_provider(mut provider: Box<dyn ResultsProvider>) -> Result<ProviderResults> {
    provider.search()?;
    Ok(ProviderResults {
        identifier: provider.identifier().to_string(),
        display_name: provider.display_name(),
        results: provider.take_results(),
    })
}

//! Page routing for content URLs.
//!
//! Mirrors the host CMS's named-page routing: a page name maps to a
//! URL pattern whose `:param` segments are filled from the record
//! being linked.
//!
//! # Pattern Syntax
//!
//! ```text
//! /blog/:slug            required parameter
//! /blog/:category?/:slug optional parameter (segment dropped if unset)
//! /blog/:id|^[0-9]+$     parameter with a constraint (constraint ignored)
//! ```

use std::collections::{BTreeMap, HashMap};

/// Resolves a named page plus parameters to a URL
pub trait PageRouter: Send + Sync {
    /// `None` when the page is unknown or a required parameter is missing
    fn page_url(&self, page: &str, params: &HashMap<&str, String>) -> Option<String>;
}

/// Router backed by a page-name to URL-pattern table
#[derive(Debug, Clone, Default)]
pub struct PatternRouter {
    base_url: String,
    pages: BTreeMap<String, String>,
}

impl PatternRouter {
    pub fn new(base_url: impl Into<String>, pages: BTreeMap<String, String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            pages,
        }
    }

    pub fn with_page(mut self, page: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.pages.insert(page.into(), pattern.into());
        self
    }

    pub fn pattern(&self, page: &str) -> Option<&str> {
        self.pages.get(page).map(String::as_str)
    }
}

impl PageRouter for PatternRouter {
    fn page_url(&self, page: &str, params: &HashMap<&str, String>) -> Option<String> {
        let pattern = self.pages.get(page)?;
        let path = fill_pattern(pattern, params)?;
        Some(format!("{}{}", self.base_url, path))
    }
}

/// Substitute `:param` segments of a pattern
fn fill_pattern(pattern: &str, params: &HashMap<&str, String>) -> Option<String> {
    let mut segments = Vec::new();

    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        let Some(token) = segment.strip_prefix(':') else {
            segments.push(segment.to_string());
            continue;
        };

        // Drop any constraint after '|'
        let token = token.split('|').next().unwrap_or_default();
        let (name, optional) = match token.strip_suffix('?') {
            Some(name) => (name, true),
            None => (token, false),
        };

        match params.get(name).filter(|v| !v.is_empty()) {
            Some(value) => segments.push(value.clone()),
            None if optional => {}
            None => {
                tracing::debug!("Page pattern '{}' is missing parameter '{}'", pattern, name);
                return None;
            }
        }
    }

    Some(format!("/{}", segments.join("/")))
}

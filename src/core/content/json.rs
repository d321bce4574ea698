//! File-backed content store.

use super::memory::MemoryContentStore;
use super::post::BlogPost;
use super::query::PostQuery;
use super::ContentStore;
use crate::core::error::{Result, SiteSearchError};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Content store reading a JSON array of posts
///
/// The file is read on every query, so edits are picked up without a
/// restart and read failures surface from `find_published`.
#[derive(Debug, Clone)]
pub struct JsonContentStore {
    path: PathBuf,
}

impl JsonContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse all posts from the backing file
    pub fn load(&self) -> Result<Vec<BlogPost>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SiteSearchError::StorageError(format!(
                "Failed to read posts file {:?}: {e}",
                self.path
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            SiteSearchError::StorageError(format!(
                "Failed to parse posts file {:?}: {e}",
                self.path
            ))
        })
    }
}

impl ContentStore for JsonContentStore {
    fn find_published(&self, query: &PostQuery) -> Result<Vec<BlogPost>> {
        let posts = self.load()?;
        let matched = MemoryContentStore::evaluate(&posts, query, Utc::now());

        tracing::debug!(
            "JSON store {:?} matched {} of {} post(s)",
            self.path,
            matched.len(),
            posts.len()
        );

        Ok(matched)
    }
}

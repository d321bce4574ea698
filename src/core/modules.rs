//! Availability of backing content modules.

use std::collections::BTreeSet;

/// Answers whether a content module (e.g. "RainLab.Blog") is installed
pub trait ModuleRegistry: Send + Sync {
    fn is_module_available(&self, identifier: &str) -> bool;
}

/// Fixed set of installed module identifiers
///
/// Identifiers are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct InstalledModules {
    installed: BTreeSet<String>,
}

impl InstalledModules {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            installed: identifiers
                .into_iter()
                .map(|id| id.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn install(&mut self, identifier: &str) {
        self.installed.insert(identifier.to_lowercase());
    }

    pub fn uninstall(&mut self, identifier: &str) -> bool {
        self.installed.remove(&identifier.to_lowercase())
    }
}

impl ModuleRegistry for InstalledModules {
    fn is_module_available(&self, identifier: &str) -> bool {
        self.installed.contains(&identifier.to_lowercase())
    }
}

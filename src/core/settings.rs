//! Key/value settings lookup for providers.
//!
//! Providers never read process-wide state; they receive a
//! `SettingsStore` at construction. Values are TOML values so the
//! `[settings]` table of the config file maps onto the store directly.

use std::collections::BTreeMap;
use toml::Value;

/// Read-only settings lookup with typed, defaulted accessors
pub trait SettingsStore: Send + Sync {
    /// Raw value for a key, if set
    fn get(&self, key: &str) -> Option<&Value>;

    /// Boolean setting, falling back to `default` when unset or unparseable
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Boolean(b)) => *b,
            Some(Value::Integer(i)) => *i != 0,
            Some(Value::String(s)) => parse_bool(s).unwrap_or(default),
            _ => default,
        }
    }

    /// String setting, falling back to `default` when unset
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get_opt_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// String setting; `None` only when the key is absent
    ///
    /// Any other value is rendered with its TOML representation, so
    /// `page = 1` yields `"1"` and arrays or tables still count as set.
    fn get_opt_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Settings backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: BTreeMap<String, Value>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and programmatic setup
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all keys and values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl From<BTreeMap<String, Value>> for MapSettings {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }
}

impl SettingsStore for MapSettings {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

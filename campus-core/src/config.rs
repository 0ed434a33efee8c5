//! # Configuration
//!
//! A string key/value store, in the spirit of `app.set()` / `app.get()`.
//! Typed reads go through a [`PortalConfigSnapshot`], which is what the
//! latency model, stores, and route gate are built from.
//!
//! ```rust
//! use campus_core::PortalConfig;
//!
//! let mut config = PortalConfig::new();
//! config.set("latency.enabled", "false");
//! assert_eq!(config.snapshot().get_bool("latency.enabled"), Some(false));
//! ```
//!
//! ## Environment overrides
//!
//! `CAMPUS__LATENCY__LIGHT_MS=50` becomes `latency.light_ms = "50"` when
//! loaded with [`PortalConfig::load_env`] and the `CAMPUS__` prefix.

use std::collections::HashMap;

pub const ENV_PREFIX: &str = "CAMPUS__";

#[derive(Debug, Default, Clone)]
pub struct PortalConfig {
    values: HashMap<String, String>,
}

impl PortalConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Config pre-populated from `CAMPUS__*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.load_env(ENV_PREFIX);
        config
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style `set`.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Import every variable starting with `prefix`.
    /// `PREFIX__A__B_C` is stored as `a.b_c`.
    pub fn load_env(&mut self, prefix: &str) {
        self.load_pairs(prefix, std::env::vars());
    }

    pub(crate) fn load_pairs<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                if !normalized.is_empty() {
                    self.set(normalized, value);
                }
            }
        }
    }

    pub fn snapshot(&self) -> PortalConfigSnapshot {
        PortalConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortalConfigSnapshot {
    map: HashMap<String, String>,
}

impl PortalConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse::<u64>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

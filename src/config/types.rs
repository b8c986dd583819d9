//! Core configuration types
//!
//! This module defines the data structures that represent a config.json file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Directory written into a freshly synthesized config file
pub const DEFAULT_DIRECTORY: &str = "/path/to/your/default/directory";

/// Base URL written into a freshly synthesized config file
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Change frequency written into a freshly synthesized config file
pub const DEFAULT_CHANGEFREQ: &str = "monthly";

/// The persisted configuration record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Directory to scan for HTML files; sitemap.xml is written here too
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Absolute URL every page path is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-path priority values
    #[serde(default)]
    pub priorities: PriorityMap,

    /// Change frequency applied to every URL
    #[serde(default = "default_changefreq")]
    pub changefreq: String,

    /// Priority overrides for individually named pages
    #[serde(default)]
    pub specific_pages: PriorityMap,

    /// Fields written by other tools, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_directory() -> String {
    DEFAULT_DIRECTORY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_changefreq() -> String {
    DEFAULT_CHANGEFREQ.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            directory: default_directory(),
            base_url: default_base_url(),
            priorities: PriorityMap::default(),
            changefreq: default_changefreq(),
            specific_pages: PriorityMap::default(),
            extra: Map::new(),
        }
    }
}

/// Outcome of [`PriorityMap::upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated { previous: String },
}

/// Path to priority mapping that keeps keys in insertion order
///
/// Values are stored as opaque JSON values. Strings are what the CLI writes,
/// but hand-edited files may hold numbers, which are shown as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PriorityMap(Map<String, Value>);

impl PriorityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the priority for `path`
    pub fn upsert(&mut self, path: &str, priority: &str) -> Upsert {
        match self
            .0
            .insert(path.to_string(), Value::String(priority.to_string()))
        {
            Some(previous) => Upsert::Updated {
                previous: value_text(&previous),
            },
            None => Upsert::Inserted,
        }
    }

    /// Priority for `path`, as text
    pub fn get(&self, path: &str) -> Option<String> {
        self.0.get(path).map(value_text)
    }

    /// Remove the entry at `index` in insertion order, keeping the order of
    /// the remaining entries
    pub fn remove_at(&mut self, index: usize) -> Option<(String, String)> {
        let key = self.0.keys().nth(index)?.clone();
        let value = self.0.shift_remove(&key)?;
        Some((key, value_text(&value)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PriorityMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PriorityMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

impl fmt::Display for PriorityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (path, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", Value::String(path.clone()), value)?;
        }
        f.write_str("}")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

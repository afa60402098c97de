use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied display configuration forwarded to the visualization runtime.
///
/// `IndexMap` keeps insertion order so generated scripts are stable across runs.
pub type Options = IndexMap<String, Value>;

/// Builds an [`Options`] bag from a JSON object.
///
/// Anything other than an object yields an empty bag.
#[must_use]
pub fn options_from_json(value: Value) -> Options {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => Options::new(),
    }
}

/// Identifier of the DOM container a generated script draws into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random v4 UUID, hyphenated.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Uses `id` when present, otherwise generates a fresh identifier.
    #[must_use]
    pub fn or_generate(id: Option<&str>) -> Self {
        id.map_or_else(Self::generate, Self::new)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier with every `-` replaced by `_`, usable inside JS symbol names.
    #[must_use]
    pub fn js_suffix(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

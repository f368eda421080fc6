use crate::core::{FieldPath, Record, render_value};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Key reserved for the free-text search.
pub const SEARCH_KEY: &str = "search";

/// Fields the free-text search looks at.
pub const SEARCH_FIELDS: [&str; 5] = ["name", "country", "code", "continent", "province"];

/// Free-text search plus per-column substring filters.
///
/// A column filter is active when its value is non-empty; `"0"` is a real
/// filter. Setting a column to `""` is the same as clearing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub search: String,
    #[serde(flatten)]
    pub columns: BTreeMap<String, String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_column(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a filter by key. The `search` key sets the free-text term.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == SEARCH_KEY {
            self.search = value;
        } else {
            self.columns.insert(key, value);
        }
    }

    pub fn clear(&mut self, key: &str) {
        if key == SEARCH_KEY {
            self.search.clear();
        } else {
            self.columns.remove(key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        if key == SEARCH_KEY {
            return Some(self.search.as_str()).filter(|term| !term.is_empty());
        }
        self.columns
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Column filters with a non-empty value.
    pub fn active_columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.active_columns().next().is_none()
    }

    /// Compile into a matcher with lower-cased needles and parsed paths.
    pub fn compile(&self) -> CompiledFilter {
        let search = if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        };

        let columns = self
            .active_columns()
            .map(|(key, value)| (FieldPath::parse(key), value.to_lowercase()))
            .collect();

        CompiledFilter {
            search,
            search_fields: SEARCH_FIELDS.iter().map(|f| FieldPath::parse(f)).collect(),
            columns,
        }
    }
}

/// A [`FilterSpec`] ready to test records.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    search: Option<String>,
    search_fields: Vec<FieldPath>,
    columns: Vec<(FieldPath, String)>,
}

impl CompiledFilter {
    /// Search first, then every column filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record) && self.matches_columns(record)
    }

    pub fn matches_search(&self, record: &Record) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        self.search_fields
            .iter()
            .any(|field| contains_lowercase(record.resolve(field), term))
    }

    pub fn matches_columns(&self, record: &Record) -> bool {
        self.columns
            .iter()
            .all(|(path, needle)| contains_lowercase(record.resolve(path), needle))
    }

    pub fn is_noop(&self) -> bool {
        self.search.is_none() && self.columns.is_empty()
    }
}

/// Absent values never match.
fn contains_lowercase(value: Option<&JsonValue>, needle: &str) -> bool {
    match value {
        Some(JsonValue::String(text)) => text.to_lowercase().contains(needle),
        Some(other) => render_value(other).to_lowercase().contains(needle),
        None => false,
    }
}

//! Dotted field paths such as `coordinates.latitude`.
//!
//! Resolution is null-propagating: a missing key, a `null`, or a scalar in
//! the middle of the path all resolve to `None` instead of failing.

use super::record::Fields;
use serde_json::Value as JsonValue;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        let raw = path.trim().to_string();
        let segments = raw.split('.').map(str::to_string).collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Walk the path through objects (by key) and arrays (by numeric index).
    ///
    /// An explicit `null` at the end of the path is reported as absent.
    pub fn resolve<'a>(&self, root: &'a Fields) -> Option<&'a JsonValue> {
        let mut segments = self.segments.iter();
        let first = segments.next()?;
        let mut current = root.get(first.as_str())?;

        for segment in segments {
            current = step(current, segment)?;
        }

        if current.is_null() { None } else { Some(current) }
    }
}

fn step<'a>(value: &'a JsonValue, segment: &str) -> Option<&'a JsonValue> {
    match value {
        JsonValue::Object(map) => map.get(segment),
        JsonValue::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

//! Seed sources for the record store.
//!
//! The store is populated from exactly one document: a JSON object keyed by
//! port code. A [`PortSource`] fetches that document and decodes it into
//! records; the store decides when (and how often) to call it.

mod file;
mod http;
mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::StaticSource;

use crate::core::{Fields, PortError, Record, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::warn;

#[async_trait]
pub trait PortSource: Send + Sync {
    /// Fetch and decode the full dataset.
    async fn fetch(&self) -> Result<Vec<Record>>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

/// Decode the keyed ports document.
///
/// Each entry becomes `{id: key, code: key, ...entry}`. An entry's own
/// `code` is kept, the identifier is always the key. Entries that are not
/// objects are skipped.
pub fn decode_ports_document(document: JsonValue) -> Result<Vec<Record>> {
    let JsonValue::Object(entries) = document else {
        return Err(PortError::fetch(
            "malformed ports document: expected an object keyed by port code",
        ));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (code, entry) in entries {
        let JsonValue::Object(entry) = entry else {
            warn!(code = %code, "skipping ports entry that is not an object");
            continue;
        };

        let mut fields = Fields::new();
        fields.insert("code".to_string(), JsonValue::String(code.clone()));
        fields.extend(entry);
        normalize_coordinates(&mut fields);

        records.push(Record::new(code, fields));
    }

    Ok(records)
}

/// The public dataset stores coordinates as `[longitude, latitude]`.
/// Rewrite that pair as `{latitude, longitude}` so nested paths resolve.
fn normalize_coordinates(fields: &mut Fields) {
    let Some(JsonValue::Array(pair)) = fields.get("coordinates") else {
        return;
    };
    let [longitude, latitude] = pair.as_slice() else {
        return;
    };
    if !(longitude.is_number() && latitude.is_number()) {
        return;
    }

    let mut coordinates = Fields::new();
    coordinates.insert("latitude".to_string(), latitude.clone());
    coordinates.insert("longitude".to_string(), longitude.clone());
    fields.insert("coordinates".to_string(), JsonValue::Object(coordinates));
}

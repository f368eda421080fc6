use super::{PortSource, decode_ports_document};
use crate::core::{Record, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves a document held in memory. Counts how often it was fetched.
#[derive(Debug)]
pub struct StaticSource {
    document: JsonValue,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(document: JsonValue) -> Self {
        Self {
            document,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        decode_ports_document(self.document.clone())
    }

    fn describe(&self) -> String {
        "static document".to_string()
    }
}

use super::IdGenerator;
use crate::core::{Fields, PortError, Record, Result};
use crate::source::{PortSource, StaticSource};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info, warn};

/// Authoritative in-memory collection of ports.
///
/// Populated lazily from a [`PortSource`] the first time [`initialize`]
/// succeeds and never refreshed afterwards. Insertion order is preserved,
/// it is the tie order for stable sorts.
///
/// [`initialize`]: RecordStore::initialize
pub struct RecordStore {
    source: Arc<dyn PortSource>,
    records: RwLock<Vec<Record>>,
    loaded: OnceCell<()>,
    ids: IdGenerator,
}

impl RecordStore {
    pub fn new(source: Arc<dyn PortSource>) -> Self {
        Self {
            source,
            records: RwLock::new(Vec::new()),
            loaded: OnceCell::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Store that is already populated and will never fetch.
    pub fn seeded(records: Vec<Record>) -> Self {
        Self {
            source: Arc::new(StaticSource::new(JsonValue::Object(Fields::new()))),
            records: RwLock::new(dedupe(records)),
            loaded: OnceCell::new_with(Some(())),
            ids: IdGenerator::default(),
        }
    }

    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Fetch the dataset once.
    ///
    /// Concurrent callers wait on the same fetch. A failed fetch leaves the
    /// store empty and unloaded, so the next call starts over.
    pub async fn initialize(&self) -> Result<()> {
        self.loaded
            .get_or_try_init(|| async {
                let origin = self.source.describe();
                let fetched = self.source.fetch().await.inspect_err(|err| {
                    warn!(source = %origin, error = %err, "failed to initialize ports cache");
                })?;

                let records = dedupe(fetched);
                let count = records.len();
                *self.records.write().await = records;

                info!(source = %origin, records = count, "ports cache populated");
                Ok::<(), PortError>(())
            })
            .await?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.loaded.initialized()
    }

    pub async fn get(&self, id: &str) -> Result<Record> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| PortError::not_found(id))
    }

    /// Append a new record under a freshly generated identifier.
    pub async fn insert(&self, fields: Fields) -> Result<Record> {
        let mut records = self.records.write().await;

        let mut id = self.ids.next_id();
        while records.iter().any(|record| record.id() == id) {
            id = self.ids.next_id();
        }

        let record = Record::new(id, fields);
        records.push(record.clone());
        debug!(id = %record.id(), "port inserted");
        Ok(record)
    }

    /// Shallow-merge `patch` into the record with `id`.
    pub async fn update(&self, id: &str, patch: Fields) -> Result<Record> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| PortError::not_found(id))?;

        record.merge(patch);
        debug!(id = %id, "port updated");
        Ok(record.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<Record> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| PortError::not_found(id))?;

        let removed = records.remove(index);
        debug!(id = %id, "port deleted");
        Ok(removed)
    }

    /// Run `f` against the current collection under the read lock.
    pub async fn read<R>(&self, f: impl FnOnce(&[Record]) -> R) -> R {
        let records = self.records.read().await;
        f(&records)
    }

    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn dedupe(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id().to_string());
            if !fresh {
                warn!(id = %record.id(), "dropping duplicate port id");
            }
            fresh
        })
        .collect()
}

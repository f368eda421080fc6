//! Asynchronous request/response facade over the record store.
//!
//! Every operation makes sure the store is populated, waits out the
//! configured latency, then delegates to the store or the query evaluator.
//! Failures are logged and handed back to the caller unchanged.

use crate::config::{LatencyProfile, ServiceConfig};
use crate::core::{FieldPath, Fields, NewPort, PortError, PortPatch, Record, Result};
use crate::query::{self, FilterSpec, PageRequest, PageResult, Pagination, SortKey};
use crate::storage::RecordStore;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Operation weight classes, used to pick the simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Count,
    Get,
    List,
    Options,
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Get => write!(f, "get"),
            Self::List => write!(f, "list"),
            Self::Options => write!(f, "options"),
            Self::Write => write!(f, "write"),
        }
    }
}

impl LatencyProfile {
    pub fn delay_for(&self, operation: Operation) -> Duration {
        match operation {
            Operation::Count => self.count,
            Operation::Get => self.get,
            Operation::List => self.list,
            Operation::Options => self.options,
            Operation::Write => self.write,
        }
    }
}

/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct PortService {
    store: Arc<RecordStore>,
    latency: LatencyProfile,
}

impl PortService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            latency: LatencyProfile::default(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        let store = Arc::new(RecordStore::new(config.source.build()));
        Self::new(store).with_latency(config.latency)
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    async fn prepare(&self, operation: Operation) -> Result<()> {
        self.store.initialize().await?;

        let delay = self.latency.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }

    /// One page of the filtered and sorted table.
    pub async fn list_page(
        &self,
        pagination: Pagination,
        sort: Option<&SortKey>,
        filters: &FilterSpec,
    ) -> Result<Vec<Record>> {
        let result = async {
            self.prepare(Operation::List).await?;
            let page = self
                .store
                .read(|records| {
                    let matched = query::evaluate(records, filters, sort);
                    pagination
                        .slice(&matched)
                        .iter()
                        .map(|record| (*record).clone())
                        .collect::<Vec<_>>()
                })
                .await;
            debug!(
                page_index = pagination.page_index,
                page_size = pagination.page_size,
                rows = page.len(),
                "listed ports page"
            );
            Ok::<_, PortError>(page)
        }
        .await;

        result.inspect_err(|err| warn!(error = %err, "failed to list ports"))
    }

    /// Number of records matching `filters`.
    pub async fn count(&self, filters: &FilterSpec) -> Result<usize> {
        let result = async {
            self.prepare(Operation::Count).await?;
            Ok::<_, PortError>(self
                .store
                .read(|records| query::count_matches(records, filters))
                .await)
        }
        .await;

        result.inspect_err(|err| warn!(error = %err, "failed to count ports"))
    }

    /// Page and total count from a single evaluation.
    pub async fn query(&self, request: &PageRequest) -> Result<PageResult> {
        let result = async {
            self.prepare(Operation::List).await?;
            Ok::<_, PortError>(self
                .store
                .read(|records| query::execute(records, request))
                .await)
        }
        .await;

        result.inspect_err(|err| warn!(error = %err, "failed to query ports"))
    }

    pub async fn get_one(&self, id: &str) -> Result<Record> {
        let result = async {
            self.prepare(Operation::Get).await?;
            self.store.get(id).await
        }
        .await;

        result.inspect_err(|err| warn!(id = %id, error = %err, "failed to fetch port"))
    }

    /// Store `data` under a newly generated identifier.
    pub async fn create(&self, data: Fields) -> Result<Record> {
        let result = async {
            self.prepare(Operation::Write).await?;
            self.store.insert(data).await
        }
        .await;

        result.inspect_err(|err| warn!(error = %err, "failed to create port"))
    }

    pub async fn create_port(&self, port: NewPort) -> Result<Record> {
        self.create(port.into_fields()?).await
    }

    /// Shallow-merge `patch` into an existing record.
    pub async fn update(&self, id: &str, patch: Fields) -> Result<Record> {
        let result = async {
            self.prepare(Operation::Write).await?;
            self.store.update(id, patch).await
        }
        .await;

        result.inspect_err(|err| warn!(id = %id, error = %err, "failed to update port"))
    }

    pub async fn update_port(&self, id: &str, patch: PortPatch) -> Result<Record> {
        self.update(id, patch.into_fields()?).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let result = async {
            self.prepare(Operation::Write).await?;
            self.store.delete(id).await.map(|_| ())
        }
        .await;

        result.inspect_err(|err| warn!(id = %id, error = %err, "failed to delete port"))
    }

    /// Sorted distinct values at `field`, recomputed on every call.
    pub async fn list_distinct_values(&self, field: &str) -> Result<Vec<String>> {
        let path = FieldPath::parse(field);
        let result = async {
            self.prepare(Operation::Options).await?;
            Ok::<_, PortError>(self
                .store
                .read(|records| query::distinct_values(records, &path))
                .await)
        }
        .await;

        result.inspect_err(|err| warn!(field = %field, error = %err, "failed to list filter options"))
    }
}

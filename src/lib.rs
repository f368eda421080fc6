// ============================================================================
// Sea Ports Library
// ============================================================================

//! Client-side CRUD store for sea port records.
//!
//! The dataset is fetched once from a [`PortSource`], kept in memory and
//! served through [`PortService`] with search, column filters, a single
//! sort key and pagination.
//!
//! ```no_run
//! use seaports::{FilterSpec, PortService, ServiceConfig};
//!
//! # async fn run() -> seaports::Result<()> {
//! let service = PortService::from_config(&ServiceConfig::new().without_latency());
//! let dutch = service
//!     .count(&FilterSpec::new().with_column("country", "Netherlands"))
//!     .await?;
//! println!("{dutch} Dutch ports");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod facade;
pub mod query;
pub mod source;
pub mod storage;
pub mod table;

// Re-export main types for convenience
pub use config::{LatencyProfile, ServiceConfig, SourceConfig};
pub use core::{
    Coordinates, FieldPath, Fields, NewPort, Port, PortError, PortPatch, Record, Result,
};
pub use facade::{Operation, PortService};
pub use query::{
    FilterSpec, PageLink, PageRequest, PageResult, Pagination, SortDirection, SortKey,
};
pub use source::{FileSource, HttpSource, PortSource, StaticSource};
pub use storage::RecordStore;
pub use table::{Column, TableState};

//! Table state independent of any renderer: column catalog, visibility,
//! the sort toggle, filters and paging. A front end drives a
//! [`TableState`] and hands its [`PageRequest`](crate::query::PageRequest)
//! to the service.

pub mod columns;
pub mod state;

pub use columns::{Column, default_columns};
pub use state::TableState;

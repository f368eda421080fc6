pub mod service;

pub use service::{Operation, PortService};

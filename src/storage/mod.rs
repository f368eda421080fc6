pub mod id;
pub mod memory;

pub use id::IdGenerator;
pub use memory::RecordStore;

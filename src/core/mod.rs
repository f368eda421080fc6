pub mod error;
pub mod path;
pub mod record;
pub mod value;

pub use error::{PortError, Result};
pub use path::FieldPath;
pub use record::{Coordinates, Fields, NewPort, Port, PortPatch, Record, fields_from_json};
pub use value::{compare_values, render_value};

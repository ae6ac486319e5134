//! BigQuery table schema intermediate representation.

mod format;
mod types;

pub use format::format_fields;
pub use types::{Field, FieldType, Mode};

//! Output-independent core types for rendering BigQuery query results.
//!
//! This crate provides the schema intermediate representation ([`Field`]),
//! the [`Flat`] projector that turns a nested schema into display columns,
//! and the page metadata ([`EdgeInfo`]) exchanged with result viewers.

mod edge;
mod error;
mod flat;
mod info;
mod schema;
pub mod serialize;
mod value;

pub use edge::{EdgeInfo, SerializableEdgeInfo};
pub use error::SchemaError;
pub use flat::{Cell, Column, Flat, NumberedRows};
pub use info::{JobInfo, TableInfo};
pub use schema::{Field, FieldType, Mode, format_fields};
pub use value::{Struct, Value, cell_text};

/// Separator placed between parent and child names in flattened column ids.
pub const DEFAULT_SEPARATOR: char = '.';

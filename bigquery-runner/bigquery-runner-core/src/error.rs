//! Error types for schema projection.

/// Error returned by [`Flat::new`](crate::Flat::new) for a malformed field list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A field at `path` has an empty name.
    #[error("field name must not be empty (under '{path}')")]
    EmptyName { path: String },

    /// A RECORD/STRUCT field declares no child fields.
    #[error("record field '{column}' has no child fields")]
    EmptyRecord { column: String },

    /// Two leaf columns flatten to the same display id.
    #[error("flattening column name collision: '{column}'")]
    DuplicateColumn { column: String },
}

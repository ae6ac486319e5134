//! Row values as returned by the query engine.

use std::borrow::Cow;

pub use serde_json::Value;

/// One result row: a mapping from field name to value.
///
/// Nested RECORD values are objects, REPEATED values are arrays. INT64 values
/// keep their exact 64-bit representation.
pub type Struct = serde_json::Map<String, Value>;

/// Text shown for a single cell by text formatters.
///
/// Strings are returned verbatim, booleans and numbers in their JSON
/// notation, absent values and `null` as empty text. Anything else (e.g. a
/// JSON column holding an object) is rendered as compact JSON.
pub fn cell_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(true)) => Cow::Borrowed("true"),
        Some(Value::Bool(false)) => Cow::Borrowed("false"),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

//! Serde helpers for values that must cross a transport without precision loss.

/// (De)serialize a `u64` as a decimal string.
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page {
///     #[serde(with = "bigquery_runner_core::serialize::decimal_string")]
///     row_number: u64,
/// }
///
/// let json = serde_json::to_string(&Page { row_number: u64::MAX }).unwrap();
/// assert_eq!(json, r#"{"row_number":"18446744073709551615"}"#);
/// ```
pub mod decimal_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

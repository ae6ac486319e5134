//! JSON renderers. Both write the original nested structs, not the
//! flattened cells; integers keep their exact value.

use async_trait::async_trait;
use bigquery_runner_core::{Flat, Struct};

use crate::{FormatError, Formatter, pace};

/// Renders the whole result as one JSON array, one struct per line.
///
/// The array is opened by the header and closed by the footer. A separator
/// goes before every struct except the one numbered `0`, so pages must be
/// numbered from zero and in order for the output to be a valid document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Formatter for JsonFormatter {
    fn header(&self, _flat: &Flat) -> Result<String, FormatError> {
        Ok("[".to_owned())
    }

    async fn rows(
        &self,
        structs: &[Struct],
        row_number: u64,
        _flat: &Flat,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        for (i, row) in structs.iter().enumerate() {
            let separator = if row_number.saturating_add(i as u64) == 0 {
                "\n"
            } else {
                ",\n"
            };
            out.push_str(separator);
            out.push_str(&serde_json::to_string(row)?);
            pace(i + 1).await;
        }
        Ok(out)
    }

    fn footer(&self) -> String {
        "\n]\n".to_owned()
    }
}

/// Renders one compact JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesFormatter;

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Formatter for JsonLinesFormatter {
    fn header(&self, _flat: &Flat) -> Result<String, FormatError> {
        Ok(String::new())
    }

    async fn rows(
        &self,
        structs: &[Struct],
        _row_number: u64,
        _flat: &Flat,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        for (i, row) in structs.iter().enumerate() {
            out.push_str(&serde_json::to_string(row)?);
            out.push('\n');
            pace(i + 1).await;
        }
        Ok(out)
    }

    fn footer(&self) -> String {
        String::new()
    }
}

//! Delimiter-separated values.

use std::borrow::Cow;

use async_trait::async_trait;
use bigquery_runner_core::{Flat, Struct, cell_text};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::{FormatError, Formatter, pace};

/// Options of [`CsvFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Emit a header record with the column ids.
    pub header: bool,
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            header: false,
            delimiter: ',',
        }
    }
}

/// Renders one record per sub-row. Fields are quoted only when they contain
/// the delimiter, a quote or a line break; booleans and numbers are bare.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    options: CsvOptions,
    delimiter: u8,
}

impl CsvFormatter {
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDelimiter`] unless the delimiter is a
    /// single-byte ASCII character other than `"`, `\r` or `\n`.
    pub fn new(options: CsvOptions) -> Result<Self, FormatError> {
        let delimiter = u8::try_from(options.delimiter)
            .ok()
            .filter(|&b| b.is_ascii() && !matches!(b, b'"' | b'\r' | b'\n'))
            .ok_or(FormatError::InvalidDelimiter(options.delimiter))?;
        Ok(Self { options, delimiter })
    }

    fn writer(&self) -> Writer<Vec<u8>> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new())
    }
}

#[async_trait]
impl Formatter for CsvFormatter {
    fn header(&self, flat: &Flat) -> Result<String, FormatError> {
        if !self.options.header {
            return Ok(String::new());
        }
        let mut writer = self.writer();
        writer.write_record(flat.head_ids())?;
        finish(writer)
    }

    async fn rows(
        &self,
        structs: &[Struct],
        row_number: u64,
        flat: &Flat,
    ) -> Result<String, FormatError> {
        let mut writer = self.writer();
        let mut rendered = 0;
        for numbered in flat.to_rows(structs, row_number) {
            for row in &numbered.rows {
                let texts: Vec<Cow<'_, str>> =
                    row.iter().map(|cell| cell_text(cell.value)).collect();
                writer.write_record(texts.iter().map(|text| text.as_bytes()))?;
                rendered += 1;
                pace(rendered).await;
            }
        }
        finish(writer)
    }

    fn footer(&self) -> String {
        String::new()
    }
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, FormatError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| FormatError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

//! Plain-text table with aligned columns.

use std::borrow::Cow;

use async_trait::async_trait;
use bigquery_runner_core::{Flat, Struct, cell_text};
use unicode_width::UnicodeWidthStr;

use crate::{FormatError, Formatter};

const COLUMN_GAP: &str = "  ";

/// Renders every batch as a self-contained table:
///
/// ```text
/// foo   bar
/// ----  -----
/// FOO   true
/// FOO2  false
/// ```
///
/// Column widths are computed from the batch passed to [`Formatter::rows`],
/// so pages of a streamed result are aligned independently of each other.
/// Cells are left-aligned and padded with spaces up to the column width,
/// including the last column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Formatter for TableFormatter {
    fn header(&self, _flat: &Flat) -> Result<String, FormatError> {
        Ok(String::new())
    }

    async fn rows(
        &self,
        structs: &[Struct],
        row_number: u64,
        flat: &Flat,
    ) -> Result<String, FormatError> {
        let body: Vec<Vec<Cow<'_, str>>> = flat
            .to_rows(structs, row_number)
            .iter()
            .flat_map(|numbered| numbered.rows.iter())
            .map(|row| row.iter().map(|cell| cell_text(cell.value)).collect())
            .collect();
        if body.is_empty() {
            return Ok(String::new());
        }

        let mut widths: Vec<usize> = flat.head_ids().map(UnicodeWidthStr::width).collect();
        for row in &body {
            for (width, text) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.width());
            }
        }

        let mut out = String::new();
        push_line(&mut out, flat.head_ids(), &widths);
        push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
        for row in &body {
            push_line(&mut out, row, &widths);
        }
        Ok(out)
    }

    fn footer(&self) -> String {
        String::new()
    }
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: impl IntoIterator<Item = S>, widths: &[usize]) {
    for (i, (cell, width)) in cells.into_iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str(COLUMN_GAP);
        }
        let cell = cell.as_ref();
        out.push_str(cell);
        out.extend(std::iter::repeat_n(' ', width.saturating_sub(cell.width())));
    }
    out.push('\n');
}

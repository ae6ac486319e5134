//! GitHub-flavored Markdown pipe table.

use async_trait::async_trait;
use bigquery_runner_core::{Flat, Struct, cell_text};

use crate::{FormatError, Formatter};

/// Renders a pipe table, one line per sub-row.
///
/// Cell text is written as-is: a `|` inside a value is not escaped and will
/// split the cell when the table is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Formatter for MarkdownFormatter {
    fn header(&self, flat: &Flat) -> Result<String, FormatError> {
        let mut out = String::new();
        push_line(&mut out, flat.head_ids());
        push_line(&mut out, flat.heads().iter().map(|_| "---"));
        Ok(out)
    }

    async fn rows(
        &self,
        structs: &[Struct],
        row_number: u64,
        flat: &Flat,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        for numbered in flat.to_rows(structs, row_number) {
            for row in &numbered.rows {
                push_line(&mut out, row.iter().map(|cell| cell_text(cell.value)));
            }
        }
        Ok(out)
    }

    fn footer(&self) -> String {
        String::new()
    }
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: impl IntoIterator<Item = S>) {
    out.push('|');
    for cell in cells {
        out.push_str(cell.as_ref());
        out.push('|');
    }
    out.push('\n');
}

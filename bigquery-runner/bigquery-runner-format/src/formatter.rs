use async_trait::async_trait;
use bigquery_runner_core::{Flat, Struct};

use crate::FormatError;

/// Renders result pages in one notation.
///
/// A full result is rendered as `header`, then `rows` once per page in order,
/// then `footer`. Implementations must not keep state between calls; anything
/// that depends on the position in the result comes in through `row_number`.
#[async_trait]
pub trait Formatter: Send + Sync {
    /// Column header, or an empty string when the notation has none.
    fn header(&self, flat: &Flat) -> Result<String, FormatError>;

    /// Render one page of `structs`. `row_number` is the number of the first
    /// struct of the page within the whole result.
    async fn rows(
        &self,
        structs: &[Struct],
        row_number: u64,
        flat: &Flat,
    ) -> Result<String, FormatError>;

    /// Closing syntax, or an empty string.
    fn footer(&self) -> String;
}

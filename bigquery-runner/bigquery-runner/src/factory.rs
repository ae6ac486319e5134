use std::{path::Path, sync::Arc};

use bigquery_runner_format::{
    CsvFormatter, CsvOptions, Formatter, JsonFormatter, JsonLinesFormatter, MarkdownFormatter,
    TableFormatter,
};
use bigquery_runner_output::{FileOutput, FileSettings};
use tokio::fs;
use tracing::debug;

use crate::{ConfigError, FormatConfig, FormatType};

/// Build the formatter selected by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDelimiter`] when the CSV format is selected
/// and its delimiter is not exactly one character.
pub fn create_formatter(config: &FormatConfig) -> Result<Arc<dyn Formatter>, ConfigError> {
    Ok(match config.format_type {
        FormatType::Table => Arc::new(TableFormatter::new()),
        FormatType::Markdown => Arc::new(MarkdownFormatter::new()),
        FormatType::Json => Arc::new(JsonFormatter::new()),
        FormatType::JsonLines => Arc::new(JsonLinesFormatter::new()),
        FormatType::Csv => {
            let mut chars = config.csv.delimiter.chars();
            let delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ConfigError::InvalidDelimiter {
                        delimiter: config.csv.delimiter.clone(),
                    });
                }
            };
            Arc::new(CsvFormatter::new(CsvOptions {
                header: config.csv.header,
                delimiter,
            })?)
        }
    })
}

/// Create (or truncate) the file at `path`, creating missing parent
/// directories, and wrap it in a [`FileOutput`].
pub async fn create_file_output(
    path: impl AsRef<Path>,
    formatter: Arc<dyn Formatter>,
) -> Result<FileOutput<fs::File>, ConfigError> {
    let path = path.as_ref();
    let create_error = |source| ConfigError::CreateFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(create_error)?;
    }
    let stream = fs::File::create(path).await.map_err(create_error)?;
    debug!(path = %path.display(), "created output file");

    Ok(FileOutput::new(FileSettings { formatter, stream }))
}

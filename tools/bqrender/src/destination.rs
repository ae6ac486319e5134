use std::{path::Path, sync::Arc};

use anyhow::Result;
use bigquery_runner::{
    create_file_output,
    format::Formatter,
    output::{FileOutput, FileSettings, Output},
};

/// Output for rendered text: the file at `path`, or stdout when absent.
pub async fn open(path: Option<&Path>, formatter: Arc<dyn Formatter>) -> Result<Box<dyn Output>> {
    let output: Box<dyn Output> = match path {
        Some(path) => Box::new(create_file_output(path, formatter).await?),
        None => Box::new(FileOutput::new(FileSettings {
            formatter,
            stream: tokio::io::stdout(),
        })),
    };
    Ok(output)
}

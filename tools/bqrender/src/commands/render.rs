use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bigquery_runner::{
    Config, OutputType, create_formatter,
    core::{EdgeInfo, Flat, JobInfo, Struct, TableInfo},
    output::{Output, RowsPage},
};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{destination, format::OutputFormat, schema::read_fields};

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the newline-delimited JSON rows
    input: PathBuf,

    /// Path to the schema JSON
    #[arg(short, long)]
    schema: PathBuf,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write a header line in CSV output
    #[arg(long)]
    csv_header: bool,

    /// CSV field delimiter
    #[arg(long)]
    csv_delimiter: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file with `format` and `output` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows handed to the output at once
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,
}

impl RenderArgs {
    pub async fn run(self) -> Result<()> {
        let config = self.config().await?;
        let formatter = create_formatter(&config.format)?;
        let flat = Flat::new(read_fields(&self.schema).await?)?;
        let target = self.target(&config);

        let total = count_rows(&self.input).await?;
        let pb = if target.is_some() {
            progress_bar(total)?
        } else {
            ProgressBar::hidden()
        };
        info!(rows = total, destination = ?target, "rendering");

        let mut output = destination::open(target.as_deref(), formatter).await?;
        let result = self.render(&mut *output, &flat, total, &pb).await;
        if result.is_err() {
            output.dispose();
        }
        result?;

        pb.finish_with_message("done");
        if let Some(path) = target {
            eprintln!("Written to {}", path.display());
        }
        Ok(())
    }

    async fn render(
        &self,
        output: &mut dyn Output,
        flat: &Flat,
        total: u64,
        pb: &ProgressBar,
    ) -> Result<()> {
        let file = tokio::fs::File::open(&self.input)
            .await
            .with_context(|| format!("failed to open {}", self.input.display()))?;
        let mut lines = BufReader::new(file).lines();
        let job_info = JobInfo::default();
        let table_info = TableInfo::default();

        output.open().await?;
        output.write_heads(flat).await?;

        let page_size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let mut page: Vec<Struct> = Vec::with_capacity(page_size.min(4096));
        let mut start = 0u64;
        let mut line_number = 0usize;
        loop {
            let line = lines.next_line().await?;
            if let Some(line) = &line {
                line_number += 1;
                if line.trim().is_empty() {
                    continue;
                }
                let row: Struct = serde_json::from_str(line).with_context(|| {
                    format!("{}:{line_number}: not a JSON object", self.input.display())
                })?;
                page.push(row);
                if page.len() < page_size {
                    continue;
                }
            }
            if !page.is_empty() {
                let len = page.len() as u64;
                let edge_info = EdgeInfo {
                    has_prev: start > 0,
                    has_next: start + len < total,
                    row_number_start: start,
                    row_number_end: start + len - 1,
                };
                debug!(start, len, "writing page");
                output
                    .write_rows(RowsPage {
                        structs: &page,
                        flat,
                        job_info: &job_info,
                        table_info: &table_info,
                        edge_info: &edge_info,
                    })
                    .await?;
                pb.inc(len);
                start += len;
                page.clear();
            }
            if line.is_none() {
                break;
            }
        }

        if start != total {
            bail!(
                "{} changed while rendering ({start} rows read, {total} expected)",
                self.input.display()
            );
        }
        output.close().await?;
        Ok(())
    }

    /// Settings file merged with command line flags; flags win.
    async fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read settings {}", path.display()))?;
                Config::from_json_str(&text)?
            }
            None => Config::default(),
        };

        if let Some(format) = self.format {
            config.format.format_type = format.into();
        }
        if self.csv_header {
            config.format.csv.header = true;
        }
        if let Some(delimiter) = &self.csv_delimiter {
            config.format.csv.delimiter = delimiter.clone();
        }
        Ok(config)
    }

    fn target(&self, config: &Config) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }
        match config.output.output_type {
            OutputType::Output => None,
            OutputType::File => {
                let stem = self
                    .input
                    .file_stem()
                    .map(|s| s.to_string_lossy())
                    .unwrap_or_default();
                Some(config.output.file.result_path(&stem, config.format.format_type))
            }
        }
    }
}

async fn count_rows(path: &Path) -> Result<u64> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut count = 0;
    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}

fn progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
        )?
        .progress_chars("=>-"),
    );
    Ok(pb)
}

use std::{fmt::Write as _, path::PathBuf};

use anyhow::Result;
use bigquery_runner::core::{Flat, format_fields};
use clap::Args;

use crate::schema::read_fields;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the schema JSON
    #[arg(short, long)]
    schema: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub async fn run(self) -> Result<()> {
        let flat = Flat::new(read_fields(&self.schema).await?)?;
        let mut text = format_fields(flat.fields())?;

        text.push_str("\ncolumns:\n");
        for head in flat.heads() {
            writeln!(
                text,
                "    {} ({}, {})",
                head.id,
                head.field_type.type_name(),
                head.mode.mode_name()
            )?;
        }

        match self.output {
            Some(path) => tokio::fs::write(path, text).await?,
            None => print!("{text}"),
        }
        Ok(())
    }
}

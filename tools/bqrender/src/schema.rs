use std::path::Path;

use anyhow::{Context, Result};
use bigquery_runner::core::Field;
use serde::Deserialize;

/// Either a bare field list or a table schema object, as printed by
/// `bq show --schema` and `bq show --format=json` respectively.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Fields(Vec<Field>),
    Table { fields: Vec<Field> },
    Resource { schema: TableSchema },
}

#[derive(Deserialize)]
struct TableSchema {
    fields: Vec<Field>,
}

pub async fn read_fields(path: &Path) -> Result<Vec<Field>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let file: SchemaFile = serde_json::from_str(&text)
        .with_context(|| format!("invalid schema {}", path.display()))?;

    Ok(match file {
        SchemaFile::Fields(fields) | SchemaFile::Table { fields } => fields,
        SchemaFile::Resource { schema } => schema.fields,
    })
}

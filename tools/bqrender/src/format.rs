use bigquery_runner::FormatType;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
    JsonLines,
    Csv,
}

impl From<OutputFormat> for FormatType {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => FormatType::Table,
            OutputFormat::Markdown => FormatType::Markdown,
            OutputFormat::Json => FormatType::Json,
            OutputFormat::JsonLines => FormatType::JsonLines,
            OutputFormat::Csv => FormatType::Csv,
        }
    }
}

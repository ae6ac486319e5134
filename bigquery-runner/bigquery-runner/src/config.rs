//! Rendering settings, as found under the extension's configuration keys:
//!
//! ```json
//! {
//!   "format": { "type": "csv", "csv": { "header": true, "delimiter": ";" } },
//!   "output": { "type": "file", "file": { "path": "results" } }
//! }
//! ```
//!
//! Every key is optional.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub format: FormatConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Parse a settings document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    #[serde(rename = "type")]
    pub format_type: FormatType,
    pub csv: CsvConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatType {
    #[default]
    Table,
    Markdown,
    Json,
    JsonLines,
    Csv,
}

impl FormatType {
    /// File extension for results rendered in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Table => "txt",
            FormatType::Markdown => "md",
            FormatType::Json => "json",
            FormatType::JsonLines => "jsonl",
            FormatType::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CsvConfig {
    pub header: bool,
    /// Kept as a string, as in the settings file; checked by
    /// [`create_formatter`](crate::create_formatter).
    pub delimiter: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            header: false,
            delimiter: ",".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(rename = "type")]
    pub output_type: OutputType,
    pub file: FileConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// The editor's output panel.
    #[default]
    Output,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    /// Directory the result files are written into.
    pub path: PathBuf,
}

impl FileConfig {
    /// Path of the result file `stem` rendered as `format`.
    pub fn result_path(&self, stem: &str, format: FormatType) -> PathBuf {
        self.path.join(format!("{stem}.{}", format.extension()))
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

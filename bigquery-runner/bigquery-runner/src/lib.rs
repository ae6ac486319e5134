mod config;
mod error;
mod factory;

pub use bigquery_runner_core as core;
pub use bigquery_runner_format as format;
pub use bigquery_runner_output as output;
pub use config::{Config, CsvConfig, FileConfig, FormatConfig, FormatType, OutputConfig, OutputType};
pub use error::ConfigError;
pub use factory::{create_file_output, create_formatter};

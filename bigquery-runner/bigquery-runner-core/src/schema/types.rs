use serde::{Deserialize, Serialize};

/// Column type as reported in a BigQuery table schema.
///
/// Legacy and standard SQL spellings are both kept (`INTEGER`/`INT64`,
/// `BOOLEAN`/`BOOL`, `RECORD`/`STRUCT`, ...) because the query engine reports
/// whichever one the table was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    String,
    Bytes,
    Integer,
    Int64,
    Float,
    Float64,
    Numeric,
    #[serde(rename = "BIGNUMERIC")]
    BigNumeric,
    Boolean,
    Bool,
    Timestamp,
    Date,
    Time,
    Datetime,
    Interval,
    Geography,
    Json,
    Range,
    Record,
    Struct,
}

impl FieldType {
    /// Whether the type holds child fields instead of a scalar value.
    pub fn is_record(&self) -> bool {
        matches!(self, FieldType::Record | FieldType::Struct)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Bytes => "BYTES",
            FieldType::Integer => "INTEGER",
            FieldType::Int64 => "INT64",
            FieldType::Float => "FLOAT",
            FieldType::Float64 => "FLOAT64",
            FieldType::Numeric => "NUMERIC",
            FieldType::BigNumeric => "BIGNUMERIC",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Bool => "BOOL",
            FieldType::Timestamp => "TIMESTAMP",
            FieldType::Date => "DATE",
            FieldType::Time => "TIME",
            FieldType::Datetime => "DATETIME",
            FieldType::Interval => "INTERVAL",
            FieldType::Geography => "GEOGRAPHY",
            FieldType::Json => "JSON",
            FieldType::Range => "RANGE",
            FieldType::Record => "RECORD",
            FieldType::Struct => "STRUCT",
        }
    }
}

/// Column mode. Absent in the schema JSON means [`Mode::Nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Required,
    #[default]
    Nullable,
    Repeated,
}

impl Mode {
    pub fn mode_name(&self) -> &'static str {
        match self {
            Mode::Required => "REQUIRED",
            Mode::Nullable => "NULLABLE",
            Mode::Repeated => "REPEATED",
        }
    }
}

/// One entry of a BigQuery table schema.
///
/// Deserializes from the REST representation
/// (`{ "name": "...", "type": "...", "mode": "...", "fields": [...] }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, mode: Mode) -> Self {
        Self {
            name: name.into(),
            field_type,
            mode,
            fields: Vec::new(),
        }
    }

    /// A RECORD field holding `fields`.
    pub fn record(name: impl Into<String>, mode: Mode, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Record,
            mode,
            fields,
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.mode == Mode::Repeated
    }

    /// Number of leaf columns this field occupies once flattened.
    pub fn width(&self) -> usize {
        if self.field_type.is_record() {
            self.fields.iter().map(Field::width).sum()
        } else {
            1
        }
    }
}

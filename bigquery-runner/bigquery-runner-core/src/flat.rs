//! Projection of a nested schema onto flat display columns.
//!
//! Every leaf field becomes one [`Column`] whose id is the path of names from
//! the root joined by a separator (`address.city`). Rows are materialized with
//! [`Flat::to_rows`]; each struct becomes a block of one or more sub-rows so
//! that REPEATED values can be laid out without changing the column count:
//!
//! - a REPEATED scalar places its element `k` in sub-row `k`;
//! - a REPEATED RECORD stacks the sub-row blocks of its elements;
//! - every other value sits in the first sub-row of its block.
//!
//! The block height is the tallest of its fields. Positions without a value
//! are left absent.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    DEFAULT_SEPARATOR,
    error::SchemaError,
    schema::{Field, FieldType, Mode},
    value::{Struct, Value},
};

/// A display column produced by flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub mode: Mode,
}

/// A single value positioned under a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a Value>,
}

/// All sub-rows materialized from one struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberedRows<'a> {
    #[serde(serialize_with = "crate::serialize::decimal_string::serialize")]
    pub row_number: u64,
    pub rows: Vec<Vec<Cell<'a>>>,
}

/// Flattened view of a field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Flat {
    fields: Vec<Field>,
    heads: Vec<Column>,
}

impl Flat {
    /// Flatten `fields` using [`DEFAULT_SEPARATOR`] between path segments.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if a field has no name, a record has no child
    /// fields, or two leaves flatten to the same column id.
    pub fn new(fields: impl Into<Vec<Field>>) -> Result<Self, SchemaError> {
        Self::with_separator(fields, DEFAULT_SEPARATOR)
    }

    /// Flatten `fields`, joining path segments with `separator`.
    pub fn with_separator(
        fields: impl Into<Vec<Field>>,
        separator: char,
    ) -> Result<Self, SchemaError> {
        let fields = fields.into();
        let mut heads = Vec::new();
        collect_heads(&fields, None, separator, &mut heads)?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(heads.len());
        for head in &heads {
            if !seen.insert(head.id.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    column: head.id.clone(),
                });
            }
        }

        Ok(Self { fields, heads })
    }

    pub fn heads(&self) -> &[Column] {
        &self.heads
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn head_ids(&self) -> impl Iterator<Item = &str> {
        self.heads.iter().map(|head| head.id.as_str())
    }

    /// Materialize `structs`, numbering them from `row_number` upwards.
    ///
    /// Every produced sub-row has exactly `heads().len()` cells. Numbers stop
    /// at `u64::MAX` instead of wrapping.
    pub fn to_rows<'a>(&'a self, structs: &'a [Struct], row_number: u64) -> Vec<NumberedRows<'a>> {
        structs
            .iter()
            .enumerate()
            .map(|(i, row)| NumberedRows {
                row_number: row_number.saturating_add(i as u64),
                rows: self.expand(row),
            })
            .collect()
    }

    fn expand<'a>(&'a self, row: &'a Struct) -> Vec<Vec<Cell<'a>>> {
        let mut grid = Grid::new(self.heads.len());
        let height = fill(&self.fields, Some(row), 0, 0, &mut grid);
        grid.into_rows(height, &self.heads)
    }
}

fn collect_heads(
    fields: &[Field],
    parent: Option<&str>,
    separator: char,
    out: &mut Vec<Column>,
) -> Result<(), SchemaError> {
    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyName {
                path: parent.unwrap_or_default().to_owned(),
            });
        }
        let id = match parent {
            Some(parent) => format!("{parent}{separator}{}", field.name),
            None => field.name.clone(),
        };

        if field.field_type.is_record() {
            if field.fields.is_empty() {
                return Err(SchemaError::EmptyRecord { column: id });
            }
            collect_heads(&field.fields, Some(&id), separator, out)?;
        } else {
            out.push(Column {
                id,
                field_type: field.field_type,
                mode: field.mode,
            });
        }
    }
    Ok(())
}

/// Place the values of `object` into `grid`, starting at sub-row `base` and
/// column `first_col`. Returns the number of sub-rows the block occupies.
fn fill<'a>(
    fields: &'a [Field],
    object: Option<&'a Struct>,
    base: usize,
    first_col: usize,
    grid: &mut Grid<'a>,
) -> usize {
    let mut col = first_col;
    let mut height = 1;

    for field in fields {
        let value = object.and_then(|o| o.get(&field.name));
        let field_height = match (field.field_type.is_record(), field.is_repeated()) {
            (false, false) => {
                grid.set(base, col, value);
                1
            }
            (false, true) => {
                let items = elements(value);
                for (i, item) in items.iter().enumerate() {
                    grid.set(base + i, col, Some(item));
                }
                items.len()
            }
            (true, false) => fill(&field.fields, value.and_then(Value::as_object), base, col, grid),
            (true, true) => elements(value).iter().fold(0, |offset, item| {
                offset + fill(&field.fields, item.as_object(), base + offset, col, grid)
            }),
        };
        height = height.max(field_height);
        col += field.width();
    }

    height
}

/// Elements of a REPEATED value. A scalar counts as a single element.
fn elements(value: Option<&Value>) -> &[Value] {
    match value {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(other) => std::slice::from_ref(other),
    }
}

struct Grid<'a> {
    width: usize,
    rows: Vec<Vec<Option<&'a Value>>>,
}

impl<'a> Grid<'a> {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    fn ensure(&mut self, height: usize) {
        let width = self.width;
        if self.rows.len() < height {
            self.rows.resize_with(height, || vec![None; width]);
        }
    }

    fn set(&mut self, row: usize, col: usize, value: Option<&'a Value>) {
        self.ensure(row + 1);
        self.rows[row][col] = value;
    }

    fn into_rows(mut self, height: usize, heads: &'a [Column]) -> Vec<Vec<Cell<'a>>> {
        self.ensure(height);
        self.rows
            .into_iter()
            .map(|row| {
                heads
                    .iter()
                    .zip(row)
                    .map(|(head, value)| Cell {
                        id: head.id.as_str(),
                        value,
                    })
                    .collect()
            })
            .collect()
    }
}

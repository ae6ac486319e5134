use std::fmt::{Error, Result, Write as _};

use super::Field;

/// Format a field list in a readable style:
/// scalar fields are rendered in one line, records are pretty-printed with
/// their children indented below them.
pub fn format_fields(fields: impl AsRef<[Field]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &Field, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let type_name = field.field_type.type_name();
    let mode_name = field.mode.mode_name();

    if !field.field_type.is_record() {
        return writeln!(
            out,
            "{pad}{}: {{ type: {type_name}, mode: {mode_name} }}",
            field.name
        );
    }

    writeln!(out, "{pad}{}:", field.name)?;
    let pad = " ".repeat(indent + 4);
    writeln!(out, "{pad}type: {type_name}")?;
    writeln!(out, "{pad}mode: {mode_name}")?;
    writeln!(out, "{pad}fields:")?;
    for child in &field.fields {
        format_field(child, indent + 8, out)?;
    }

    Ok(())
}

use bigquery_runner_core::{Field, FieldType, Mode, format_fields};
use pretty_assertions::assert_eq;

#[test]
fn scalar_fields_render_on_one_line() -> Result<(), std::fmt::Error> {
    let fields = vec![
        Field::new("foo", FieldType::String, Mode::Required),
        Field::new("bar", FieldType::Bool, Mode::Nullable),
    ];

    let text = format_fields(&fields)?;
    let expected = "\
foo: { type: STRING, mode: REQUIRED }
bar: { type: BOOL, mode: NULLABLE }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn nested_record_keeps_type_line_and_indentation() -> Result<(), std::fmt::Error> {
    let fields = vec![Field::record(
        "order",
        Mode::Repeated,
        vec![
            Field::new("id", FieldType::Int64, Mode::Required),
            Field::record(
                "customer",
                Mode::Nullable,
                vec![Field::new("name", FieldType::String, Mode::Nullable)],
            ),
        ],
    )];

    let text = format_fields(&fields)?;
    let expected = "\
order:
    type: RECORD
    mode: REPEATED
    fields:
        id: { type: INT64, mode: REQUIRED }
        customer:
            type: RECORD
            mode: NULLABLE
            fields:
                name: { type: STRING, mode: NULLABLE }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn empty_field_list_renders_nothing() -> Result<(), std::fmt::Error> {
    assert_eq!(format_fields(Vec::<Field>::new())?, "");
    Ok(())
}

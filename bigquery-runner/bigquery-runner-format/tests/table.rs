use bigquery_runner_core::{Field, FieldType, Flat, Mode, Struct, Value};
use bigquery_runner_format::{Formatter, TableFormatter};
use pretty_assertions::assert_eq;
use serde_json::json;

fn structs(value: Value) -> Vec<Struct> {
    serde_json::from_value(value).unwrap()
}

fn foo_bar() -> Flat {
    Flat::new(vec![
        Field::new("foo", FieldType::String, Mode::Required),
        Field::new("bar", FieldType::Bool, Mode::Required),
    ])
    .unwrap()
}

#[tokio::test]
async fn renders_aligned_table_with_rule() {
    let flat = foo_bar();
    let formatter = TableFormatter::new();
    let rows = structs(json!([
        { "foo": "FOO", "bar": true },
        { "foo": "FOO2", "bar": false }
    ]));

    let text = formatter.rows(&rows, 0, &flat).await.unwrap();

    assert_eq!(
        text,
        "\
foo   bar  
----  -----
FOO   true 
FOO2  false
"
    );
    assert_eq!(formatter.header(&flat).unwrap(), "");
    assert_eq!(formatter.footer(), "");
}

#[tokio::test]
async fn widths_are_computed_per_batch() {
    let flat = foo_bar();
    let formatter = TableFormatter::new();

    let first = formatter
        .rows(&structs(json!([{ "foo": "A", "bar": true }])), 0, &flat)
        .await
        .unwrap();
    let second = formatter
        .rows(&structs(json!([{ "foo": "LONGER", "bar": true }])), 1, &flat)
        .await
        .unwrap();

    assert_eq!(first, "foo  bar \n---  ----\nA    true\n");
    assert_eq!(second, "foo     bar \n------  ----\nLONGER  true\n");
}

#[tokio::test]
async fn empty_batch_renders_nothing() {
    let flat = foo_bar();
    let text = TableFormatter::new().rows(&[], 0, &flat).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn absent_cells_are_padded_blanks() {
    let flat = Flat::new(vec![
        Field::new("name", FieldType::String, Mode::Nullable),
        Field::new("tags", FieldType::String, Mode::Repeated),
    ])
    .unwrap();
    let rows = structs(json!([{ "name": "ab", "tags": ["x", "y"] }, { "name": null }]));

    let text = TableFormatter::new().rows(&rows, 0, &flat).await.unwrap();

    assert_eq!(
        text,
        "\
name  tags
----  ----
ab    x   
      y   
          
"
    );
}

#[tokio::test]
async fn width_uses_display_columns() {
    let flat = Flat::new(vec![Field::new("c", FieldType::String, Mode::Nullable)]).unwrap();
    let rows = structs(json!([{ "c": "日本" }, { "c": "a" }]));

    let text = TableFormatter::new().rows(&rows, 0, &flat).await.unwrap();

    assert_eq!(text, "c   \n----\n日本\na   \n");
}

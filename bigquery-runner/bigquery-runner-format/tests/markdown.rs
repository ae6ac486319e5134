use bigquery_runner_core::{Field, FieldType, Flat, Mode, Struct, Value};
use bigquery_runner_format::{Formatter, MarkdownFormatter};
use pretty_assertions::assert_eq;
use serde_json::json;

fn structs(value: Value) -> Vec<Struct> {
    serde_json::from_value(value).unwrap()
}

async fn render(formatter: &dyn Formatter, flat: &Flat, rows: &[Struct]) -> String {
    let mut out = formatter.header(flat).unwrap();
    out.push_str(&formatter.rows(rows, 0, flat).await.unwrap());
    out.push_str(&formatter.footer());
    out
}

#[tokio::test]
async fn single_boolean_column() {
    let flat = Flat::new(vec![Field::new("foo", FieldType::Boolean, Mode::Required)]).unwrap();
    let rows = structs(json!([{ "foo": true }]));

    let text = render(&MarkdownFormatter::new(), &flat, &rows).await;

    assert_eq!(text, "|foo|\n|---|\n|true|\n");
}

#[tokio::test]
async fn one_line_per_struct() {
    let flat = Flat::new(vec![
        Field::new("foo", FieldType::String, Mode::Required),
        Field::new("bar", FieldType::Bool, Mode::Required),
    ])
    .unwrap();
    let rows = structs(json!([
        { "foo": "FOO", "bar": true },
        { "foo": "FOO2", "bar": false }
    ]));

    let text = render(&MarkdownFormatter::new(), &flat, &rows).await;

    assert_eq!(text, "|foo|bar|\n|---|---|\n|FOO|true|\n|FOO2|false|\n");
}

#[tokio::test]
async fn repeated_values_get_their_own_lines() {
    let flat = Flat::new(vec![
        Field::new("id", FieldType::Integer, Mode::Required),
        Field::new("tags", FieldType::String, Mode::Repeated),
    ])
    .unwrap();
    let rows = structs(json!([{ "id": 1, "tags": ["a", "b"] }]));

    let text = MarkdownFormatter::new().rows(&rows, 0, &flat).await.unwrap();

    assert_eq!(text, "|1|a|\n||b|\n");
}

#[tokio::test]
async fn pipe_in_value_is_not_escaped() {
    let flat = Flat::new(vec![Field::new("expr", FieldType::String, Mode::Nullable)]).unwrap();
    let rows = structs(json!([{ "expr": "a|b" }]));

    let text = MarkdownFormatter::new().rows(&rows, 0, &flat).await.unwrap();

    assert_eq!(text, "|a|b|\n");
}

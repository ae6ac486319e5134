use std::{
    io,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use bigquery_runner_core::{EdgeInfo, Field, FieldType, Flat, JobInfo, Mode, Struct, TableInfo, Value};
use bigquery_runner_format::{
    CsvFormatter, CsvOptions, Formatter, JsonFormatter, JsonLinesFormatter, TableFormatter,
};
use bigquery_runner_output::{FileOutput, FileSettings, Output, OutputError, OutputState, RowsPage};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWrite, DuplexStream, duplex};

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

fn two_rows() -> Vec<Struct> {
    structs(json!([
        { "foo": "FOO", "bar": true },
        { "foo": "FOO2", "bar": false }
    ]))
}

fn page<'a>(structs: &'a [Struct], flat: &'a Flat, edge_info: &'a EdgeInfo) -> RowsPage<'a> {
    static JOB: JobInfo = JobInfo(Value::Null);
    static TABLE: TableInfo = TableInfo(Value::Null);
    RowsPage {
        structs,
        flat,
        job_info: &JOB,
        table_info: &TABLE,
        edge_info,
    }
}

fn file_output(formatter: impl Formatter + 'static) -> (FileOutput<DuplexStream>, DuplexStream) {
    let (writer, reader) = duplex(64 * 1024);
    let output = FileOutput::new(FileSettings {
        formatter: Arc::new(formatter),
        stream: writer,
    });
    (output, reader)
}

async fn read_all(mut reader: DuplexStream) -> String {
    let mut text = String::new();
    reader.read_to_string(&mut text).await.unwrap();
    text
}

async fn render(output: &mut FileOutput<DuplexStream>, pages: &[Vec<Struct>]) {
    let flat = foo_bar();
    let edge_info = EdgeInfo::default();
    output.open().await.unwrap();
    output.write_heads(&flat).await.unwrap();
    for rows in pages {
        output.write_rows(page(rows, &flat, &edge_info)).await.unwrap();
    }
    output.close().await.unwrap();
}

#[tokio::test]
async fn writes_table_and_finishes_stream() {
    let (mut output, reader) = file_output(TableFormatter::new());

    render(&mut output, &[two_rows()]).await;

    assert_eq!(
        read_all(reader).await,
        "\
foo   bar  
----  -----
FOO   true 
FOO2  false
"
    );
    assert_eq!(output.state(), OutputState::Closed);
}

#[tokio::test]
async fn writes_csv_with_header() {
    let formatter = CsvFormatter::new(CsvOptions {
        header: true,
        delimiter: ',',
    })
    .unwrap();
    let (mut output, reader) = file_output(formatter);

    render(&mut output, &[two_rows()]).await;

    assert_eq!(read_all(reader).await, "foo,bar\nFOO,true\nFOO2,false\n");
}

#[tokio::test]
async fn json_pages_form_one_array() {
    let (mut output, reader) = file_output(JsonFormatter::new());
    let pages = [
        structs(json!([{ "foo": "a", "bar": true }])),
        structs(json!([{ "foo": "b", "bar": false }, { "foo": "c", "bar": true }])),
    ];

    render(&mut output, &pages).await;

    let text = read_all(reader).await;
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!([
            { "foo": "a", "bar": true },
            { "foo": "b", "bar": false },
            { "foo": "c", "bar": true }
        ])
    );
}

#[tokio::test]
async fn json_lines_without_header_or_footer() {
    let (mut output, reader) = file_output(JsonLinesFormatter::new());

    render(&mut output, &[two_rows()]).await;

    assert_eq!(
        read_all(reader).await,
        "{\"foo\":\"FOO\",\"bar\":true}\n{\"foo\":\"FOO2\",\"bar\":false}\n"
    );
}

#[tokio::test]
async fn dispose_ends_stream_without_footer() {
    let (mut output, reader) = file_output(JsonFormatter::new());
    let flat = foo_bar();

    output.open().await.unwrap();
    output.write_heads(&flat).await.unwrap();
    output.dispose();
    output.dispose();
    output.close().await.unwrap();

    assert_eq!(read_all(reader).await, "[");
    assert_eq!(output.state(), OutputState::Disposed);
}

#[tokio::test]
async fn write_after_close_fails() {
    let (mut output, _reader) = file_output(TableFormatter::new());
    let flat = foo_bar();
    let rows = two_rows();
    let edge_info = EdgeInfo::default();

    output.close().await.unwrap();

    assert!(matches!(
        output.write_rows(page(&rows, &flat, &edge_info)).await,
        Err(OutputError::Closed)
    ));
}

/// Accepts writes, fails to finish.
struct BrokenShutdown;

impl AsyncWrite for BrokenShutdown {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::other("disk full")))
    }
}

#[tokio::test]
async fn failing_finish_is_a_stream_error() {
    let mut output = FileOutput::new(FileSettings {
        formatter: Arc::new(TableFormatter::new()),
        stream: BrokenShutdown,
    });

    output.open().await.unwrap();
    let err = output.close().await.unwrap_err();

    assert!(matches!(err, OutputError::Stream(_)));
    assert_eq!(err.to_string(), "stream error: disk full");
    assert_eq!(output.state(), OutputState::Closed);

    output.dispose();
    assert_eq!(output.state(), OutputState::Disposed);
}

#[tokio::test]
async fn dispose_right_after_open_ends_stream() {
    let (mut output, reader) = file_output(TableFormatter::new());

    output.open().await.unwrap();
    output.dispose();

    assert_eq!(read_all(reader).await, "");
}

#[tokio::test]
async fn table_widths_follow_each_page() {
    let (mut output, reader) = file_output(TableFormatter::new());
    let pages = [
        structs(json!([{ "foo": "a", "bar": true }])),
        structs(json!([{ "foo": "longer", "bar": false }])),
    ];

    render(&mut output, &pages).await;

    assert_eq!(
        read_all(reader).await,
        "\
foo  bar 
---  ----
a    true
foo     bar  
------  -----
longer  false
"
    );
}

#[tokio::test]
async fn writes_before_open_are_performed() {
    let (mut output, reader) = file_output(CsvFormatter::new(CsvOptions::default()).unwrap());
    let flat = foo_bar();
    let rows = two_rows();
    let edge_info = EdgeInfo::default();

    output.write_heads(&flat).await.unwrap();
    output.write_rows(page(&rows, &flat, &edge_info)).await.unwrap();
    output.close().await.unwrap();

    assert_eq!(read_all(reader).await, "FOO,true\nFOO2,false\n");
    assert_eq!(output.state(), OutputState::Closed);
}

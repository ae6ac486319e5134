use bigquery_runner_core::{EdgeInfo, JobInfo, SerializableEdgeInfo, TableInfo};
use serde_json::json;

#[test]
fn serializable_edge_info_carries_row_numbers_as_strings() {
    let edge = EdgeInfo {
        has_prev: false,
        has_next: true,
        row_number_start: 1,
        row_number_end: u64::MAX,
    };

    let value = serde_json::to_value(edge.to_serializable()).unwrap();

    assert_eq!(
        value,
        json!({
            "hasPrev": false,
            "hasNext": true,
            "rowNumberStart": "1",
            "rowNumberEnd": "18446744073709551615"
        })
    );
}

#[test]
fn serializable_edge_info_converts_back_without_loss() {
    let edge = EdgeInfo {
        has_prev: true,
        has_next: false,
        row_number_start: 9_007_199_254_740_993,
        row_number_end: 9_007_199_254_741_092,
    };

    let restored = EdgeInfo::try_from(&SerializableEdgeInfo::from(edge)).unwrap();

    assert_eq!(restored, edge);
}

#[test]
fn malformed_row_number_is_an_error() {
    let raw = SerializableEdgeInfo {
        has_prev: false,
        has_next: false,
        row_number_start: "-1".to_owned(),
        row_number_end: "1".to_owned(),
    };

    assert!(EdgeInfo::try_from(&raw).is_err());
}

#[test]
fn job_and_table_info_pass_through_unchanged() {
    let raw = json!({ "jobReference": { "jobId": "job_1" }, "numDmlAffectedRows": "3" });

    let job: JobInfo = serde_json::from_value(raw.clone()).unwrap();
    let table = TableInfo(json!({ "numRows": "9007199254740993" }));

    assert_eq!(serde_json::to_value(&job).unwrap(), raw);
    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!({ "numRows": "9007199254740993" })
    );
}

use std::fs;
use std::path::Path;

use telemview::config::PlotDescriptor;
use telemview::error::ViewerError;
use telemview::series::{load_series, TAIL_ROWS};
use telemview::table::Table;

fn descriptor(data: &str) -> PlotDescriptor {
    serde_json::from_str(&format!(
        r#"{{ "data": "{data}", "title": "Test title" }}"#
    ))
    .unwrap()
}

/// CSV with a `time,value` header and `rows` sequential data rows.
fn csv_with_rows(rows: usize) -> String {
    let mut s = String::from("time,value\n");
    for i in 0..rows {
        s.push_str(&format!("{},{}\n", i, i * 10));
    }
    s
}

fn write_csv(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn long_table_uses_exactly_the_last_20_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", &csv_with_rows(25));

    let series = load_series(dir.path(), "p", &descriptor("data.csv")).unwrap();
    assert_eq!(series.points.len(), TAIL_ROWS);
    // 25 rows, tail of 20 starts at row index 5
    assert_eq!(series.points[0], [5.0, 50.0]);
    assert_eq!(series.points[19], [24.0, 240.0]);
}

#[test]
fn short_table_uses_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", &csv_with_rows(5));

    let series = load_series(dir.path(), "p", &descriptor("data.csv")).unwrap();
    assert_eq!(series.points.len(), 5);
    assert_eq!(series.points[0], [0.0, 0.0]);
}

#[test]
fn labels_come_from_headers_and_title_from_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", "timestamp_s,rpm\n1,800\n2,950\n");

    let series = load_series(dir.path(), "engine", &descriptor("data.csv")).unwrap();
    assert_eq!(series.name, "engine");
    assert_eq!(series.title, "Test title");
    assert_eq!(series.x_label, "timestamp_s");
    assert_eq!(series.y_label, "rpm");
}

#[test]
fn single_column_fails_with_insufficient_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", "only\n1\n2\n");

    let err = load_series(dir.path(), "p", &descriptor("data.csv")).unwrap_err();
    match err {
        ViewerError::InsufficientColumns { found, .. } => assert_eq!(found, 1),
        other => panic!("expected InsufficientColumns, got {other:?}"),
    }
}

#[test]
fn missing_file_fails_with_data_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_series(dir.path(), "p", &descriptor("nope.csv")).unwrap_err();
    assert!(matches!(err, ViewerError::DataUnreadable { .. }));
}

#[test]
fn non_numeric_cell_fails_with_data_malformed() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", "t,v\n1,2\nboom,3\n");
    let err = load_series(dir.path(), "p", &descriptor("data.csv")).unwrap_err();
    assert!(matches!(err, ViewerError::DataMalformed { .. }));
}

#[test]
fn ragged_row_fails_with_data_malformed() {
    let p = Path::new("data.csv");
    let err = Table::parse(p, "a,b,c\n1,2,3\n4,5\n").unwrap_err();
    assert!(matches!(err, ViewerError::DataMalformed { .. }));
}

#[test]
fn empty_file_fails_with_data_malformed() {
    let p = Path::new("data.csv");
    let err = Table::parse(p, "").unwrap_err();
    assert!(matches!(err, ViewerError::DataMalformed { .. }));
}

#[test]
fn columns_beyond_the_second_need_not_be_numeric() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "data.csv", "t,v,note\n1,2,ok\n3,4,warmup phase\n");
    let series = load_series(dir.path(), "p", &descriptor("data.csv")).unwrap();
    assert_eq!(series.points, vec![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn blank_trailing_lines_are_ignored() {
    let p = Path::new("data.csv");
    let table = Table::parse(p, "t,v\n1,2\n\n\n").unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.tail(20).len(), 1);
}

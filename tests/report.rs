//! File-backed integration tests for the full report pipeline.

use regsort_rs::{ReportError, execute_report, read_lines_from_path};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper: write `content` to a temp file and read it back as lines.
fn lines_from(content: &str) -> Vec<String> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    read_lines_from_path(file.path()).unwrap()
}

#[test]
fn test_file_round_trip() {
    let input = "id keyword\n\
                 A-15-2020-keyword-x\n\
                 B-03-2021-keyword-y\n\
                 C-03-2019-keyword-z\n\
                 D-99-2020-nomatch\n";

    let lines = lines_from(input);
    let records = execute_report(&lines).unwrap();

    // Write the result the way the binary does and re-read it.
    let out_file = NamedTempFile::new().unwrap();
    let mut content = String::new();
    for record in &records {
        content.push_str(record);
        content.push('\n');
    }
    fs::write(out_file.path(), &content).unwrap();

    let written = fs::read_to_string(out_file.path()).unwrap();
    assert_eq!(
        written,
        "B-03-2021-keyword-y\nC-03-2019-keyword-z\nA-15-2020-keyword-x\n"
    );
}

#[test]
fn test_empty_file_is_rejected() {
    let lines = lines_from("");
    assert_eq!(execute_report(&lines).unwrap_err(), ReportError::EmptyInput);
}

#[test]
fn test_header_only_file_has_no_matches() {
    let lines = lines_from("id keyword\n");
    assert_eq!(
        execute_report(&lines).unwrap_err(),
        ReportError::NoMatch {
            keyword: "keyword".to_string()
        }
    );
}

#[test]
fn test_one_field_header_file_is_rejected() {
    let lines = lines_from("header\nA-01-header\n");
    assert!(matches!(
        execute_report(&lines).unwrap_err(),
        ReportError::MalformedHeader { .. }
    ));
}

#[test]
fn test_matching_record_without_date_is_rejected() {
    let lines = lines_from("id sales\nsales record with no date\n");
    assert!(matches!(
        execute_report(&lines).unwrap_err(),
        ReportError::MalformedRecord { .. }
    ));
}

#[test]
fn test_rerunning_on_own_output_is_a_fixed_point() {
    let lines = lines_from(
        "id keyword\n\
         A-15-2020-keyword-x\n\
         B-03-2021-keyword-y\n\
         C-03-2019-keyword-z\n",
    );
    let first = execute_report(&lines).unwrap();

    let mut rerun_input = String::from("id keyword\n");
    for record in &first {
        rerun_input.push_str(record);
        rerun_input.push('\n');
    }
    let second = execute_report(&lines_from(&rerun_input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_input_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");
    assert!(read_lines_from_path(&missing).is_err());
}

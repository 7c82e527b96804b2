//! Export tests
//!
//! The xlsx writer is verified by reading the workbook back with calamine;
//! csv and json are checked as text.

use alumni_finder_rust::export::{csv as csv_export, excel, json, OUTPUT_HEADERS};
use alumni_finder_rust::finder::RunReport;
use alumni_finder_rust::matcher::types::{GroupStatus, MatchGroup, MatchResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use tempfile::tempdir;

fn result(link: &str, name: &str, score: u32) -> MatchResult {
    MatchResult {
        link: link.into(),
        display_name: name.into(),
        accuracy_score: score,
        job_adopted: false,
        latest_title: "Software Engineer".into(),
        latest_company: "Acme".into(),
        latest_location: "Buffalo, New York".into(),
    }
}

fn sample_report() -> RunReport {
    RunReport {
        groups: vec![
            MatchGroup {
                row_number: 2,
                first_name: "Jane".into(),
                last_name: "Jones".into(),
                status: GroupStatus::Scored,
                results: vec![result("profile-jane", "Jane Jones", 6)],
                failures: Vec::new(),
            },
            MatchGroup {
                row_number: 3,
                first_name: "Bob".into(),
                last_name: "Smith".into(),
                status: GroupStatus::Scored,
                results: vec![result("profile-bob", "Bob Smith", 1)],
                failures: Vec::new(),
            },
        ],
        records_processed: 2,
        structural_failures: 0,
    }
}

#[test]
fn test_xlsx_layout_and_group_separators() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("matches.xlsx");

    excel::write_xlsx(&sample_report(), &path).expect("write xlsx");
    assert!(path.exists());

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
    let range = workbook.worksheet_range("Matches").expect("sheet");
    let rows: Vec<&[Data]> = range.rows().collect();

    // header + group 1 row + separator + group 2 row
    assert_eq!(rows.len(), 4);
    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        assert_eq!(rows[0][col], Data::String(header.to_string()));
    }

    assert_eq!(rows[1][0], Data::String("Jane".into()));
    assert_eq!(rows[1][2], Data::Float(2.0));
    assert_eq!(rows[1][4], Data::String("profile-jane".into()));
    assert_eq!(rows[1][8], Data::Float(6.0));

    // the separator row between groups is entirely empty
    assert!(rows[2].iter().all(|cell| *cell == Data::Empty));

    assert_eq!(rows[3][0], Data::String("Bob".into()));
    assert_eq!(rows[3][8], Data::Float(1.0));
}

#[test]
fn test_xlsx_empty_group_emits_no_rows() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("empty.xlsx");

    let report = RunReport {
        groups: vec![MatchGroup {
            row_number: 2,
            first_name: "Jane".into(),
            last_name: "Jones".into(),
            status: GroupStatus::NoCoarseSurvivors,
            results: Vec::new(),
            failures: Vec::new(),
        }],
        records_processed: 1,
        structural_failures: 0,
    };
    excel::write_xlsx(&report, &path).expect("write xlsx");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
    let range = workbook.worksheet_range("Matches").expect("sheet");
    // only the header carries data; the group contributed nothing
    assert_eq!(range.rows().count(), 1);
}

#[test]
fn test_csv_layout() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("matches.csv");

    csv_export::write_csv(&sample_report(), &path).expect("write csv");

    let content = std::fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], OUTPUT_HEADERS.join(","));
    assert!(lines[1].starts_with("Jane,Jones,2,Jane Jones,profile-jane,"));
    assert!(lines[1].ends_with(",6"));
    // blank separator record after each group
    assert_eq!(lines[2], ",,,,,,,,");
    assert!(lines[3].starts_with("Bob,Smith,3,"));
    assert_eq!(lines[4], ",,,,,,,,");
}

#[test]
fn test_json_keeps_statuses_and_flags() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("matches.json");

    let mut report = sample_report();
    report.groups[1].status = GroupStatus::Failed("search page broke".into());
    report.groups[1].results.clear();
    json::write_json(&report, &path).expect("write json");

    let content = std::fs::read_to_string(&path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("parse json");

    let groups = value["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["status"], "scored");
    assert_eq!(groups[0]["results"][0]["accuracyScore"], 6);
    assert_eq!(groups[0]["results"][0]["jobAdopted"], false);
    assert_eq!(groups[1]["status"]["failed"], "search page broke");
    assert_eq!(value["recordsProcessed"], 2);
}

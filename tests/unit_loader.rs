// Unit tests for CSV ingestion: row filtering, column pruning, and
// directory concatenation, using throwaway fixture files.

use std::fs;
use std::path::Path;

use poolscan::loader::{companies, missions};

fn write_fixture(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

// ============================================================
// Company roster loading
// ============================================================

#[test]
fn roster_rows_without_company_id_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "companies.csv",
        "company_id,name,country\n\
         c1,Acme,FR\n\
         ,Ghost Corp,DE\n\
         c2,Globex,ES\n",
    );

    let roster = companies::load_companies(&path).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].company_id, "c1");
    assert_eq!(roster[1].company_id, "c2");
}

#[test]
fn roster_extra_columns_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "companies.csv",
        "company_id,name,country,segment,headcount\n\
         c1,Acme,FR,tech,250\n",
    );

    let roster = companies::load_companies(&path).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name.as_deref(), Some("Acme"));
}

#[test]
fn roster_without_a_name_column_loads_with_absent_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "companies.csv", "company_id\nc1\nc2\n");

    let roster = companies::load_companies(&path).unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.iter().all(|c| c.name.is_none()));
}

#[test]
fn roster_blank_name_becomes_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "companies.csv",
        "company_id,name\nc1,\nc2,   \nc3,Initech\n",
    );

    let roster = companies::load_companies(&path).unwrap();
    assert_eq!(roster[0].name, None);
    assert_eq!(roster[1].name, None);
    assert_eq!(roster[2].name.as_deref(), Some("Initech"));
}

#[test]
fn missing_roster_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = companies::load_companies(&dir.path().join("nope.csv")).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

// ============================================================
// Mission loading
// ============================================================

#[test]
fn mission_rows_missing_either_identifier_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "missions.csv",
        "company_id,freelance_id,start_date,end_date\n\
         c1,f1,2023-01-01,2023-02-01\n\
         ,f2,2023-01-01,2023-02-01\n\
         c2,,2023-01-01,2023-02-01\n\
         c2,f3,2023-03-01,2023-04-01\n",
    );

    let rows = missions::load_missions(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].company_id, "c1");
    assert_eq!(rows[0].freelance_id, "f1");
    assert_eq!(rows[1].company_id, "c2");
    assert_eq!(rows[1].freelance_id, "f3");
}

// ============================================================
// Mission directory concatenation
// ============================================================

#[test]
fn mission_files_concatenate_in_sorted_filename_order() {
    let dir = tempfile::tempdir().unwrap();
    // Written out of order on purpose
    write_fixture(
        dir.path(),
        "2023_q2.csv",
        "company_id,freelance_id\nc2,f2\n",
    );
    write_fixture(
        dir.path(),
        "2023_q1.csv",
        "company_id,freelance_id\nc1,f1\n",
    );

    let rows = missions::load_missions_dir(dir.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].company_id, "c1");
    assert_eq!(rows[1].company_id, "c2");
}

#[test]
fn non_csv_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "missions.csv",
        "company_id,freelance_id\nc1,f1\n",
    );
    write_fixture(dir.path(), "README.md", "not a csv\n");
    write_fixture(dir.path(), "notes.txt", "also not a csv\n");

    let rows = missions::load_missions_dir(dir.path()).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn csv_extension_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "MISSIONS.CSV",
        "company_id,freelance_id\nc1,f1\n",
    );

    let rows = missions::load_missions_dir(dir.path()).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn empty_directory_yields_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let rows = missions::load_missions_dir(dir.path()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = missions::load_missions_dir(&dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("absent"));
}

use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    write_report(&path, "content\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "content\n");
}

#[test]
fn creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join("report.txt");

    write_report(&path, "nested").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
}

#[test]
fn existing_directory_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out").join("report.txt");

    write_report(&path, "first").unwrap();
    write_report(&path, "second").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn leaves_no_temp_files_behind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    write_report(&path, "content").unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), "report.txt");
}

#[test]
fn parent_that_is_a_file_fails_with_report_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("report.txt");

    let err = write_report(&path, "content").unwrap_err();

    match err {
        SceneGuardError::ReportWrite { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ReportWrite, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn destination_that_is_a_directory_keeps_it_intact() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep.txt"), "kept").unwrap();

    assert!(write_report(&path, "content").is_err());

    assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "kept");
    let entries = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

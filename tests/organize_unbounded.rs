mod common;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;

use common::write_photo;
use photo_tool::{Outcome, RunSummary, ScanRequest, organize};

#[test]
fn moves_matching_photos_and_leaves_hidden_ones() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    let dst = td.child("out");
    src.create_dir_all().unwrap();
    dst.create_dir_all().unwrap();
    write_photo(&src.path().join("a.jpg"), "2021:03:05 10:20:30");
    write_photo(&src.path().join(".hidden.jpg"), "2021:03:05 10:20:30");

    let req = ScanRequest::new(src.path(), dst.path(), &["JPG"], 0, false);
    let summary = organize::run(&req).unwrap();

    assert!(dst.child("2021-03-05/a.jpg").path().exists());
    assert!(!src.child("a.jpg").path().exists());
    assert!(src.child(".hidden.jpg").path().exists());
    assert_eq!(summary.moved, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
}

#[test]
fn unlisted_extension_is_never_visited() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    let dst = td.child("out");
    write_photo(&src.path().join("b.png"), "2020:01:01 00:00:00");
    dst.create_dir_all().unwrap();

    let req = ScanRequest::new(src.path(), dst.path(), &["JPG", "JPEG"], 0, false);
    let summary = organize::run(&req).unwrap();

    assert!(src.child("b.png").path().exists());
    assert!(!dst.child("2020-01-01").path().exists());
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn extension_match_ignores_case_and_walks_nested_dirs() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    let dst = td.child("out");
    write_photo(&src.path().join("x/y/z/deep.JpEg"), "2019:07:04 12:00:00");
    dst.create_dir_all().unwrap();

    let req = ScanRequest::new(src.path(), dst.path(), &["jpeg"], 0, false);
    organize::run(&req).unwrap();

    assert!(dst.child("2019-07-04/deep.JpEg").path().exists());
    // Emptied source directories stay behind.
    assert!(src.child("x/y/z").path().is_dir());
}

#[test]
fn undecodable_file_stays_in_place() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    let dst = td.child("out");
    src.child("broken.jpg").write_str("not a jpeg").unwrap();
    dst.create_dir_all().unwrap();

    let req = ScanRequest::new(src.path(), dst.path(), &["JPG"], 0, false);
    let summary = organize::run(&req).unwrap();

    src.child("broken.jpg").assert("not a jpeg");
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn destination_collision_keeps_source_and_existing_file() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    let dst = td.child("out");
    write_photo(&src.path().join("a.jpg"), "2021:03:05 10:20:30");
    dst.child("2021-03-05/a.jpg").write_str("already here").unwrap();

    let req = ScanRequest::new(src.path(), dst.path(), &["JPG"], 0, false);
    let candidate = photo_tool::FileCandidate::from_path(src.path().join("a.jpg"));
    let outcome = photo_tool::process_candidate(&req, &candidate);

    assert!(matches!(outcome, Outcome::Failed { .. }), "{outcome:?}");
    assert!(src.child("a.jpg").path().exists());
    dst.child("2021-03-05/a.jpg").assert("already here");
}

#[test]
fn destination_inside_source_is_not_revisited() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    write_photo(&src.path().join("a.jpg"), "2021:03:05 10:20:30");
    src.child("sorted").create_dir_all().unwrap();

    let req = ScanRequest::new(src.path(), src.path().join("sorted"), &["JPG"], 0, false);
    let first = organize::run(&req).unwrap();
    assert_eq!(first.moved, 1);
    assert_eq!(first.failed, 0);
    assert!(src.child("sorted/2021-03-05/a.jpg").path().exists());

    // A second run finds the photo already sorted and leaves it alone.
    let second = organize::run(&req).unwrap();
    assert_eq!(second.moved, 0);
    assert_eq!(second.failed, 0);
    assert_eq!(second.skipped, 1);
    assert!(src.child("sorted/2021-03-05/a.jpg").path().exists());
}

#[test]
fn binary_with_target_inside_source_reports_no_failure() {
    let td = TempDir::new().unwrap();
    let src = td.child("in");
    write_photo(&src.path().join("a.jpg"), "2021:03:05 10:20:30");
    src.child("sorted").create_dir_all().unwrap();

    let out = common::photo_tool(td.path())
        .arg("-p")
        .arg(src.path())
        .arg("-t")
        .arg(src.path().join("sorted"))
        .args(["-d", "0"])
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("could not move"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 moved, 0 previewed, 1 skipped, 0 failed"), "stdout: {stdout}");
}

use std::fs;
use std::io::ErrorKind;

use asset_path_rewriter::{RewriteError, rewrite_file};
use tempfile::tempdir;

const MIGRATION_PAGE: &str = concat!(
    "<html><head>",
    r#"<link href="/static/css/app.css">"#,
    "</head><body>",
    r#"<script src="/static/js/app.js"></script>"#,
    "</body></html>",
);

#[test]
fn rewrites_both_references_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, MIGRATION_PAGE).unwrap();

    let summary = rewrite_file(&path).unwrap();
    assert_eq!(summary.script_src.as_deref(), Some("/assets/static/js/app.js"));
    assert_eq!(
        summary.stylesheet_href.as_deref(),
        Some("/assets/static/css/app.css")
    );

    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains(r#"src="/assets/static/js/app.js""#));
    assert!(updated.contains(r#"href="/assets/static/css/app.css""#));
    assert!(!updated.contains(r#"src="/static/js/app.js""#));
    assert!(!updated.contains(r#"href="/static/css/app.css""#));
}

#[test]
fn second_run_leaves_the_file_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, MIGRATION_PAGE).unwrap();

    rewrite_file(&path).unwrap();
    let first_pass = fs::read_to_string(&path).unwrap();

    let summary = rewrite_file(&path).unwrap();
    let second_pass = fs::read_to_string(&path).unwrap();

    assert!(summary.is_unchanged());
    assert_eq!(first_pass, second_pass);
}

#[test]
fn pages_without_matching_references_pass_through() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(
        &path,
        concat!(
            "<html><head>",
            r#"<link href="/other/css/app.css">"#,
            "</head><body>",
            r#"<script src="/other/js/app.js"></script>"#,
            "</body></html>",
        ),
    )
    .unwrap();

    let summary = rewrite_file(&path).unwrap();
    assert!(summary.is_unchanged());

    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains(r#"href="/other/css/app.css""#));
    assert!(updated.contains(r#"src="/other/js/app.js""#));
}

#[test]
fn malformed_markup_is_still_rewritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(
        &path,
        concat!(
            "<html><head>",
            r#"<link href="/static/css/app.css">"#,
            "<body><div>",
            r#"<script src="/static/js/app.js"></script>"#,
        ),
    )
    .unwrap();

    let summary = rewrite_file(&path).unwrap();
    assert_eq!(summary.updated_count(), 2);

    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains(r#"src="/assets/static/js/app.js""#));
    assert!(updated.contains(r#"href="/assets/static/css/app.css""#));
}

#[test]
fn missing_files_surface_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.html");

    let error = rewrite_file(&path).unwrap_err();
    match error {
        RewriteError::Read { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("expected a read error, got: {other}"),
    }
}

#[test]
fn non_utf8_content_surfaces_an_encoding_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.html");
    fs::write(&path, b"<html><body>caf\xE9</body></html>").unwrap();

    let error = rewrite_file(&path).unwrap_err();
    match error {
        RewriteError::Encoding { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected an encoding error, got: {other}"),
    }

    let untouched = fs::read(&path).unwrap();
    assert_eq!(untouched, b"<html><body>caf\xE9</body></html>");
}

//! Exit status of the `classbind` binary

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::*;
use tempfile::tempdir;

fn classbind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classbind"))
        .args(args)
        .output()
        .expect("run classbind")
}

fn generate(input: &Path) -> Output {
    classbind(&["generate", input.to_str().expect("utf-8 path")])
}

#[test]
fn test_valid_document_exits_zero() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "Foo.json", &fixture_foo_document());

    let output = generate(&input);

    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(dir.path().join("Foo.nim")).unwrap();
    assert_has_line(&written, "jclass p.Foo* of JVMObject:");
}

#[test]
fn test_empty_document_exits_one() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "Empty.json", "[]");

    assert_eq!(generate(&input).status.code(), Some(1));
    assert!(!dir.path().join("Empty.nim").exists());
}

#[test]
fn test_malformed_document_exits_two() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "Bad.json", &fixture_malformed_document());

    let output = generate(&input);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed document"));
}

#[test]
fn test_missing_input_exits_one() {
    let dir = tempdir().unwrap();
    assert_eq!(generate(&dir.path().join("absent.json")).status.code(), Some(1));
}

#[test]
fn test_config_error_exits_two() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "Foo.json", &fixture_foo_document());
    let config = write_fixture(dir.path(), "classbind.yaml", "version: 2\n");

    let output = classbind(&[
        "generate",
        input.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_directory_without_classes_exits_one() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "a/Empty.json", "[]");
    write_fixture(dir.path(), "b/Bad.json", &fixture_malformed_document());

    assert_eq!(generate(dir.path()).status.code(), Some(1));
}

#[test]
fn test_directory_with_one_good_document_exits_zero() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "a/Foo.json", &fixture_foo_document());
    write_fixture(dir.path(), "b/Bad.json", &fixture_malformed_document());

    assert_eq!(generate(dir.path()).status.code(), Some(0));
}

#[test]
fn test_extract_single_file_prints_document() {
    let dir = tempdir().unwrap();
    let source = write_fixture(dir.path(), "Widget.java", &fixture_java_widget());

    let output = classbind(&["extract", source.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"full_name\": \"Widget$Style\""));
}

//! Integration tests for the qualify command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::helptree_cmd;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_qualify_index_line_in_nested_document() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "api/Widget.txt", "*Widget* *Widget.create*\n");

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("mylib-")
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget.txt"))
        .stdout(predicate::str::contains("Qualified 2 tag(s) in 1 of 1 file(s)."));

    let content = fs::read_to_string(temp.path().join("api/Widget.txt")).unwrap();
    assert_eq!(
        content,
        "*mylib-Widget@api\\/Widget* *mylib-Widget.create@api\\/Widget*\n"
    );
}

#[test]
fn test_qualify_inline_tag_and_skip_bold() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "guide.txt",
        "See the *Widget* class for details.\n**bold** not a tag\n",
    );

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("mylib-")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("guide.txt")).unwrap();
    assert_eq!(
        content,
        "See the *mylib-Widget@guide* class for details.\n**bold** not a tag\n"
    );
}

#[test]
fn test_qualify_leaves_documents_without_candidates_untouched() {
    let temp = TempDir::new().unwrap();
    let original = "Plain text\r\n* bullet\r\nemphasis *here*";
    write(temp.path(), "plain.txt", original);
    let before = fs::metadata(temp.path().join("plain.txt"))
        .unwrap()
        .modified()
        .unwrap();

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("p-")
        .assert()
        .success()
        .stdout(predicate::str::contains("Qualified 0 tag(s) in 0 of 1 file(s)."));

    let after = fs::metadata(temp.path().join("plain.txt"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(fs::read(temp.path().join("plain.txt")).unwrap(), original.as_bytes());
    assert_eq!(before, after);
}

#[test]
fn test_qualify_twice_wraps_tags_twice() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "api/Widget.txt", "*Widget*\n");

    for _ in 0..2 {
        helptree_cmd()
            .arg("qualify")
            .arg(temp.path())
            .arg("mylib-")
            .assert()
            .success();
    }

    let content = fs::read_to_string(temp.path().join("api/Widget.txt")).unwrap();
    assert_eq!(content, "*mylib-mylib-Widget@api\\/Widget@api\\/Widget*\n");
}

#[test]
fn test_qualify_is_deterministic_across_trees() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for root in [first.path(), second.path()] {
        write(root, "a/b/c.txt", "*one* *two*\ntext *three* text\n");
        write(root, "top.cnx", "*top*\n");
    }

    for root in [first.path(), second.path()] {
        helptree_cmd()
            .arg("qualify")
            .arg(root)
            .arg("x-")
            .assert()
            .success();
    }

    for rel in ["a/b/c.txt", "top.cnx"] {
        assert_eq!(
            fs::read(first.path().join(rel)).unwrap(),
            fs::read(second.path().join(rel)).unwrap()
        );
    }
    assert_eq!(
        fs::read_to_string(first.path().join("top.cnx")).unwrap(),
        "*x-top@top*\n"
    );
}

#[test]
fn test_qualify_processes_latin1_document_and_continues() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.cnx"), b"caf\xe9 *cafe* au lait\nna\xefve\n").unwrap();
    write(temp.path(), "b.txt", "*intro*\n");

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("p-")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.cnx"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("Qualified 2 tag(s) in 2 of 2 file(s)."));

    assert_eq!(
        fs::read(temp.path().join("a.cnx")).unwrap(),
        b"caf\xe9 *p-cafe@a* au lait\nna\xefve\n".to_vec()
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("b.txt")).unwrap(),
        "*p-intro@b*\n"
    );
}

#[test]
fn test_qualify_dry_run_does_not_write_files() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "intro.txt", "*intro*\n");

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("p-")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dry run: 1 of 1 file(s) would be updated with 1 tag(s).",
        ));

    assert_eq!(
        fs::read_to_string(temp.path().join("intro.txt")).unwrap(),
        "*intro*\n"
    );
}

#[test]
fn test_qualify_uses_configured_separator_escape() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/api/Widget.txt", "*Widget*\n");
    let config = temp.path().join("helptree.toml");
    fs::write(&config, "separator_escape = \"::\"\n").unwrap();

    helptree_cmd()
        .arg("--config")
        .arg(&config)
        .arg("qualify")
        .arg(temp.path().join("docs"))
        .arg("p-")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("docs/api/Widget.txt")).unwrap();
    assert_eq!(content, "*p-Widget@api::Widget*\n");
}

#[test]
fn test_qualify_invalid_prefix_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "intro.txt", "*intro*\n");

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path())
        .arg("bad prefix")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid prefix"));

    assert_eq!(
        fs::read_to_string(temp.path().join("intro.txt")).unwrap(),
        "*intro*\n"
    );
}

#[test]
fn test_qualify_missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    helptree_cmd()
        .arg("qualify")
        .arg(temp.path().join("missing"))
        .arg("p-")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_qualify_wrong_argument_count_shows_usage() {
    helptree_cmd()
        .arg("qualify")
        .arg("only-one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

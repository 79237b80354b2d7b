// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for basic property store operations.
//!
//! These tests verify that the store works correctly end-to-end against real
//! files and handles common use cases.

use dotprops::domain::{NodeKind, PropsError};
use dotprops::service::{PropertyStore, SaveOptions};
use std::fs;
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_load_basic_document() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.properties");
    fs::write(&path, "#hello\na.b=12\na.c=test\nd=321").unwrap();

    let mut store = PropertyStore::new();
    assert!(store.load(&path).unwrap());

    assert_eq!(store.value("a.b"), Some("12"));
    assert_eq!(store.value("a.c"), Some("test"));
    assert_eq!(store.value("d"), Some("321"));

    let a = store.get("a").unwrap().as_namespace().unwrap();
    let b = a.child("b").unwrap().as_leaf().unwrap();
    assert_eq!(b.comments(), ["hello"]);
    let c = a.child("c").unwrap().as_leaf().unwrap();
    assert!(c.comments().is_empty());
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();

    let mut store = PropertyStore::new();
    let loaded = store.load(dir.path().join("nope.properties")).unwrap();

    assert!(!loaded);
    assert!(store.root().is_empty());
    assert!(!store.contains("anything"));
}

#[test]
fn test_load_conflicting_document_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.properties");
    fs::write(&path, "a=1\na.b=2").unwrap();

    let mut store = PropertyStore::new();
    let err = store.load(&path).unwrap_err();

    match err {
        PropsError::Conflict {
            path,
            existing,
            requested,
        } => {
            assert_eq!(path, "a");
            assert_eq!(existing, NodeKind::Leaf);
            assert_eq!(requested, NodeKind::Namespace);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("messy.properties");
    fs::write(&path, "garbage line\n\nx\na.b=12\n=\nd=321").unwrap();

    let mut store = PropertyStore::new();
    assert!(store.load(&path).unwrap());

    assert_eq!(store.value("a.b"), Some("12"));
    assert_eq!(store.value("d"), Some("321"));
    assert_eq!(store.root().len(), 2);
}

#[test]
fn test_membership_and_top_level_assignment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.properties");
    fs::write(&path, "a.b=12\nd=321").unwrap();

    let mut store = PropertyStore::new();
    store.load(&path).unwrap();

    assert!(store.contains("a"));
    assert!(store.contains("d"));
    assert!(!store.contains("e"));

    store.set("d", "999").unwrap();
    assert_eq!(store.value("d"), Some("999"));

    store.set("e", "new").unwrap();
    assert!(store.contains("e"));
}

#[test]
fn test_save_then_reload_with_comments() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in.properties");
    let target = dir.path().join("out.properties");
    fs::write(&source, "#hello\na.b=12\na.c=test\nd=321").unwrap();

    let mut store = PropertyStore::new();
    store.load(&source).unwrap();
    let options = SaveOptions {
        include_timestamp: false,
        include_comments: true,
    };
    store.save(&target, &options).unwrap();

    // the hello comment line must immediately precede a.b=12
    let content = fs::read_to_string(&target).unwrap();
    let lines: Vec<_> = content.lines().collect();
    let property_index = lines.iter().position(|l| *l == "a.b=12").unwrap();
    assert_eq!(lines[property_index - 1], "#hello");

    let mut reloaded = PropertyStore::new();
    reloaded.load(&target).unwrap();
    assert_eq!(reloaded.value("a.b"), Some("12"));
    let a = reloaded.get("a").unwrap().as_namespace().unwrap();
    assert_eq!(a.child("b").unwrap().as_leaf().unwrap().comments(), ["hello"]);
}

#[test]
fn test_save_with_timestamp_keeps_first_property_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.properties");

    let mut store = PropertyStore::new();
    store.set("first.key", "value").unwrap();
    let options = SaveOptions {
        include_timestamp: true,
        include_comments: false,
    };
    store.save(&path, &options).unwrap();

    let mut reloaded = PropertyStore::new();
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.value("first.key"), Some("value"));
}

#[test]
fn test_reload_replaces_tree_completely() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.properties");
    let second = dir.path().join("second.properties");
    fs::write(&first, "only.in.first=1").unwrap();
    fs::write(&second, "only.in.second=2").unwrap();

    let mut store = PropertyStore::new();
    store.load(&first).unwrap();
    assert_eq!(store.value("only.in.first"), Some("1"));

    store.load(&second).unwrap();
    assert_eq!(store.value("only.in.first"), None);
    assert_eq!(store.value("only.in.second"), Some("2"));
}

#[test]
fn test_last_write_wins_on_duplicate_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dup.properties");
    fs::write(&path, "#first comment\nk=1\nk=2").unwrap();

    let mut store = PropertyStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.value("k"), Some("2"));
    // the original comment survives the overwrite
    let leaf = store.get("k").unwrap().as_leaf().unwrap();
    assert_eq!(leaf.comments(), ["first comment"]);
}

#[test]
fn test_custom_marker_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.properties");
    fs::write(&path, "! note\nk=v\n# not.a.comment=here").unwrap();

    let mut store = PropertyStore::with_marker("!");
    store.load(&path).unwrap();

    let leaf = store.get("k").unwrap().as_leaf().unwrap();
    assert_eq!(leaf.comments(), ["note"]);
    // the '#' line parses as an ordinary property under this marker
    assert_eq!(store.value("# not.a.comment"), Some("here"));
}

#[test]
fn test_deeply_nested_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep.properties");
    let key: String = (0..64).map(|i| format!("s{i}")).collect::<Vec<_>>().join(".");
    fs::write(&path, format!("{key}=bottom")).unwrap();

    let mut store = PropertyStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.value(&key), Some("bottom"));
}

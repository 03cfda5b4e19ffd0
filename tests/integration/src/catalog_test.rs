//! End-to-end integration tests for the catalog generator
//!
//! These tests exercise the complete flow: locate -> extract -> write, both
//! through the library entry point and through the `extcat` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use catalog_core::{generate_catalog, CatalogConfig};
use filetime::{set_file_mtime, FileTime};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_definition(root: &Path, dir: &str, file: &str, body: &str, mtime_secs: i64) {
    let dir_path = root.join(dir);
    fs::create_dir_all(&dir_path).unwrap();
    let path = dir_path.join(file);
    fs::write(&path, body).unwrap();
    set_file_mtime(&path, FileTime::from_unix_time(mtime_secs, 0)).unwrap();
}

/// Set up a small extension folder: two extensions, one stale duplicate in a
/// second directory, one node_modules decoy, and one stray root-level file.
fn setup_extension_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_definition(
        root,
        "deck-status",
        "deck_status.sef",
        "[extension_name]\nDeck Status\n[extension_info]\nShows deck status\n[extension_version]\n2.0\n",
        2_000_000,
    );
    // Older copy in the same directory, must lose newest-file selection.
    write_definition(
        root,
        "deck-status",
        "deck_status_old.sef",
        "[extension_name]\nDeck Status\n[extension_info]\nOld copy\n[extension_version]\n9.9\n",
        1_000_000,
    );
    // Same extension in another directory with a lower version, must lose dedup.
    write_definition(
        root,
        "deck-status-backup",
        "deck_status.sef",
        "[extension_name]\nDeck Status\n[extension_info]\nBackup copy\n[extension_version]\n1.5\n",
        1_500_000,
    );
    write_definition(
        root,
        "timers",
        "timers.sef",
        "[extension_name]\nTimers\n[extension_info]\n\n",
        1_000_000,
    );
    write_definition(
        root,
        "pkg/node_modules/sub",
        "decoy.sef",
        "[extension_name]\nDecoy\n",
        1_000_000,
    );
    fs::write(root.join("stray.sef"), "[extension_name]\nStray\n").unwrap();

    temp
}

#[test]
fn test_generate_catalog_over_fixture_tree() {
    let temp = setup_extension_tree();
    let config = CatalogConfig::new(temp.path());

    let catalog = generate_catalog(&config).unwrap();

    // Decoy and Stray never appear; Deck Status is deduplicated.
    assert_eq!(catalog.len(), 2);

    let deck = catalog.get("Deck Status").unwrap();
    assert_eq!(deck.details.description, "Shows deck status");
    assert_eq!(deck.details.latest_version, "2.0");

    let timers = catalog.get("Timers").unwrap();
    assert_eq!(timers.details.description, "");
    assert_eq!(timers.details.latest_version, "1.0");
}

#[test]
fn test_numeric_version_wins_across_directories() {
    let temp = TempDir::new().unwrap();
    write_definition(
        temp.path(),
        "a",
        "a.sef",
        "[extension_name]\nFoo\n[extension_version]\n9.0\n",
        1_000_000,
    );
    write_definition(
        temp.path(),
        "b",
        "b.sef",
        "[extension_name]\nFoo\n[extension_version]\n10.0\n",
        1_000_000,
    );

    let catalog = generate_catalog(&CatalogConfig::new(temp.path())).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("Foo").unwrap().details.latest_version, "10.0");
}

#[test]
fn test_binary_writes_catalog_with_exact_schema() {
    let temp = setup_extension_tree();
    let out = temp.path().join("out").join("extensions.json");
    fs::create_dir(temp.path().join("out")).unwrap();

    Command::cargo_bin("extcat")
        .unwrap()
        .arg(temp.path())
        .args(["--author", "Christina"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 extension(s)"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let extensions = value["extensions"].as_array().unwrap();
    assert_eq!(extensions.len(), 2);
    for record in extensions {
        let obj = record.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj["extension_name"].is_string());
        let details = obj["details"].as_object().unwrap();
        assert_eq!(details.len(), 4);
        assert_eq!(details["author"], "Christina");
        assert!(details["description"].is_string());
        assert!(details["latest_version"].is_string());
        assert_eq!(details["download_link"], "");
    }
}

#[test]
fn test_binary_overwrites_existing_output() {
    let temp = setup_extension_tree();
    let out = temp.path().join("extensions.json");
    fs::write(&out, "{\"extensions\": \"stale\"}").unwrap();

    Command::cargo_bin("extcat")
        .unwrap()
        .arg(temp.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(value["extensions"].is_array());
}

#[test]
fn test_binary_custom_exclude_list() {
    let temp = TempDir::new().unwrap();
    write_definition(
        temp.path(),
        "keep",
        "keep.sef",
        "[extension_name]\nKeep\n",
        1_000_000,
    );
    write_definition(
        temp.path(),
        "skipme/ext",
        "skip.sef",
        "[extension_name]\nSkip\n",
        1_000_000,
    );
    let out = temp.path().join("extensions.json");

    Command::cargo_bin("extcat")
        .unwrap()
        .arg(temp.path())
        .args(["--exclude", "skipme"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 extension(s)"));
}

#[test]
fn test_trailing_marker_fails_without_partial_output() {
    let temp = TempDir::new().unwrap();
    write_definition(
        temp.path(),
        "good",
        "good.sef",
        "[extension_name]\nGood\n",
        1_000_000,
    );
    // Marker on the last line of the file: no value line follows.
    write_definition(
        temp.path(),
        "bad",
        "bad.sef",
        "[extension_name]\nBad\n[extension_version]",
        1_000_000,
    );
    let out = temp.path().join("extensions.json");

    Command::cargo_bin("extcat")
        .unwrap()
        .arg(temp.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("[extension_version]"));

    assert!(!out.exists(), "no output may be written on failure");
}

#[test]
fn test_nonexistent_root_fails() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("extcat")
        .unwrap()
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

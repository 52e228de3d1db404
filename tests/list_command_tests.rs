//! List command tests
//!
//! The list command is a pure manifest read; these tests exercise it
//! against hand-written manifest files, never the network.

mod common;

use predicates::prelude::*;

use common::{mcpack_cmd, TestRoot};

const TWO_MODS: &str = r#"{
  "mods": [
    {
      "name": "Sodium",
      "project_id": "AANobbMI",
      "file_name": "sodium-0.5.jar",
      "version_id": "v-sodium-5"
    },
    {
      "name": "Lithium",
      "project_id": "gvQqBUqZ",
      "file_name": "lithium-0.11.jar",
      "version_id": "v-lithium-11"
    }
  ]
}"#;

#[test]
fn test_list_absent_manifest_is_empty_not_an_error() {
    let root = TestRoot::new();
    mcpack_cmd(&root)
        .args(["list", "--type", "mod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods installed."));
}

#[test]
fn test_list_shows_entries_in_install_order() {
    let root = TestRoot::new();
    root.write_manifest(TWO_MODS);

    let output = mcpack_cmd(&root)
        .args(["list", "--type", "mod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sodium"))
        .stdout(predicate::str::contains("Lithium"))
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let sodium = stdout.find("Sodium").expect("Sodium listed");
    let lithium = stdout.find("Lithium").expect("Lithium listed");
    assert!(sodium < lithium, "insertion order must be preserved");
}

#[test]
fn test_list_only_shows_requested_type() {
    let root = TestRoot::new();
    root.write_manifest(
        r#"{
  "mods": [
    {"name": "Sodium", "project_id": "a", "file_name": "sodium.jar", "version_id": "v1"}
  ],
  "shaderpacks": [
    {"name": "BSL", "project_id": "b", "file_name": "bsl.zip", "version_id": "v1"}
  ]
}"#,
    );

    mcpack_cmd(&root)
        .args(["list", "--type", "shader"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BSL"))
        .stdout(predicate::str::contains("Sodium").not());
}

#[test]
fn test_list_verify_flags_missing_files() {
    let root = TestRoot::new();
    root.write_manifest(TWO_MODS);
    // Only Sodium's file is on disk
    root.write_file("mods/sodium-0.5.jar", "jar");

    mcpack_cmd(&root)
        .args(["list", "--type", "mod", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orphaned"));
}

#[test]
fn test_list_verify_quiet_when_files_present() {
    let root = TestRoot::new();
    root.write_manifest(TWO_MODS);
    root.write_file("mods/sodium-0.5.jar", "jar");
    root.write_file("mods/lithium-0.11.jar", "jar");

    mcpack_cmd(&root)
        .args(["list", "--type", "mod", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orphaned").not());
}

//! End-to-end tests running the site-mapper binary

mod common;

use assert_cmd::Command;
use common::{create_test_site, local_noon, read_config, write_page};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn site_mapper(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("site-mapper").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_no_args_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("generate"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("set-specific-priority"));
}

#[test]
fn test_invalid_command() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid command 'bogus'"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_flag_value_is_handled() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["generate", "-d"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--directory"))
        .stderr(predicate::str::is_empty());

    // Nothing ran, so no config file was created
    assert!(!temp_dir.path().join("config.json").exists());
}

#[test]
fn test_set_priority_wrong_arity() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["set-priority", "/blog"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("<PRIORITY>"));
}

#[test]
fn test_view_config_creates_defaults() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .arg("view-config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""directory": "/path/to/your/default/directory""#,
        ))
        .stdout(predicate::str::contains(r#""changefreq": "monthly""#));

    let config = read_config(temp_dir.path());
    assert_eq!(config["base_url"], "https://example.com");
}

#[test]
fn test_set_priority_twice_updates() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["set-priority", "/blog", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists").not());

    site_mapper(temp_dir.path())
        .args(["set-priority", "/blog", "0.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Priority for path '/blog' already exists. Updating priority to 0.8.",
        ));

    let config = read_config(temp_dir.path());
    assert_eq!(config["priorities"], serde_json::json!({"/blog": "0.8"}));
}

#[test]
fn test_delete_priority_reads_index_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    for (path, priority) in [("/a", "0.1"), ("/b", "0.2")] {
        site_mapper(temp_dir.path())
            .args(["set-priority", path, priority])
            .assert()
            .success();
    }

    site_mapper(temp_dir.path())
        .arg("delete-priority")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: /a\n1: /b\n"))
        .stdout(predicate::str::contains("Deleted priority for path '/a'."));

    let config = read_config(temp_dir.path());
    assert_eq!(config["priorities"], serde_json::json!({"/b": "0.2"}));
}

#[test]
fn test_delete_priority_invalid_index() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["set-priority", "/a", "0.1"])
        .assert()
        .success();

    site_mapper(temp_dir.path())
        .arg("delete-priority")
        .write_stdin("3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid path index '3'"));

    let config = read_config(temp_dir.path());
    assert_eq!(config["priorities"], serde_json::json!({"/a": "0.1"}));
}

#[test]
fn test_delete_specific_priority_empty() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .arg("delete-specific-priority")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No specific page priorities to delete.",
        ));
}

#[test]
fn test_list_settings() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["set-changefreq", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set changefreq to weekly."));

    site_mapper(temp_dir.path())
        .args(["set-specific-priority", "/index.html", "1.0"])
        .assert()
        .success();

    site_mapper(temp_dir.path())
        .arg("list-settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Priorities: {}"))
        .stdout(predicate::str::contains("Change Frequency: weekly"))
        .stdout(predicate::str::contains(
            r#"Specific Page Priorities: {"/index.html": "1.0"}"#,
        ));
}

#[test]
fn test_malformed_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{ broken").unwrap();

    site_mapper(temp_dir.path())
        .arg("list-settings")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to parse config file"))
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("config.json")).unwrap(),
        "{ broken"
    );
}

#[test]
fn test_generate_end_to_end() {
    let (temp_dir, site_dir) = create_test_site("https://ex.com/");
    write_page(&site_dir.join("index.html"), local_noon(2024, 1, 2));

    site_mapper(temp_dir.path())
        .args(["generate", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added https://ex.com/index.html"))
        .stdout(predicate::str::contains("Sitemap generated successfully at"));

    let xml = fs::read_to_string(site_dir.join("sitemap.xml")).unwrap();
    assert_eq!(xml.matches("<url>").count(), 1);
    assert!(xml.contains("<loc>https://ex.com/index.html</loc>"));
    assert!(xml.contains("<lastmod>2024-01-02</lastmod>"));
}

#[test]
fn test_generate_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    site_mapper(temp_dir.path())
        .args(["generate", "-d", "nowhere", "-u", "https://ex.com/"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not exist"));

    assert!(!temp_dir.path().join("sitemap.xml").exists());
}

//! Common test utilities

#![allow(dead_code)]

use chrono::{Local, TimeZone};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Noon local time on the given day, so the formatted date is unambiguous
pub fn local_noon(year: i32, month: u32, day: u32) -> SystemTime {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .into()
}

/// Create a file (and its parent directories) with a fixed modification time
pub fn write_page(path: &Path, modified: SystemTime) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "<html></html>").unwrap();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
}

/// Create a temporary working directory containing an empty `site/` folder
/// and a config.json pointing at it
pub fn create_test_site(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let site_dir = temp_dir.path().join("site");
    fs::create_dir(&site_dir).unwrap();

    let config = serde_json::json!({
        "directory": site_dir.to_string_lossy(),
        "base_url": base_url,
        "priorities": {},
        "changefreq": "monthly",
        "specific_pages": {}
    });
    fs::write(
        temp_dir.path().join("config.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    (temp_dir, site_dir)
}

/// Read config.json from a working directory as loose JSON
pub fn read_config(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join("config.json")).unwrap()).unwrap()
}

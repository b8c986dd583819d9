//! Filesystem scanning for HTML pages
//!
//! Walks a site directory and yields one [`SitemapEntry`] per `.html` or
//! `.htm` file, lazily, in walk order.

use crate::error::{ScanError, ScanResult};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use walkdir::{DirEntry, WalkDir};

/// File name suffixes treated as pages (case-sensitive)
pub const PAGE_SUFFIXES: &[&str] = &[".html", ".htm"];

/// One page discovered on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute page URL
    pub loc: String,
    /// Last modification date, `YYYY-MM-DD` in local time
    pub lastmod: String,
}

/// Lazy walk over the HTML files below a root directory
pub struct Scanner {
    root: PathBuf,
    base_url: Url,
    walker: walkdir::IntoIter,
}

impl Scanner {
    /// Prepare a scan of `root`, resolving page paths against `base_url`
    ///
    /// Fails before touching any file if `root` is not a directory or
    /// `base_url` is not an absolute URL.
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> ScanResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ScanError::NotFound(root));
        }

        let base_url = Url::parse(base_url).map_err(|e| ScanError::InvalidBaseUrl {
            url: base_url.to_string(),
            error: e.to_string(),
        })?;

        let walker = WalkDir::new(&root).sort_by_file_name().into_iter();

        Ok(Scanner {
            root,
            base_url,
            walker,
        })
    }

    fn entry_for(&self, dir_entry: &DirEntry) -> ScanResult<SitemapEntry> {
        let path = dir_entry.path();
        let rel_path = relative_url_path(&self.root, path);

        let loc = self
            .base_url
            .join(&rel_path)
            .map_err(|e| ScanError::UrlJoin {
                path: rel_path.clone(),
                error: e.to_string(),
            })?;

        // fs::metadata follows symlinks, so linked pages get their target's mtime
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| ScanError::Metadata {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(SitemapEntry {
            loc: loc.to_string(),
            lastmod: format_lastmod(modified.into()),
        })
    }
}

impl Iterator for Scanner {
    type Item = ScanResult<SitemapEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir_entry = match self.walker.next()? {
                Ok(entry) => entry,
                // Unreadable subtrees are skipped; only the root is fatal
                Err(e) if e.depth() > 0 => continue,
                Err(e) => return Some(Err(e.into())),
            };

            if !is_file_like(&dir_entry) || !is_page(&dir_entry) {
                continue;
            }

            return Some(self.entry_for(&dir_entry));
        }
    }
}

/// Scan `root` for pages, resolving their URLs against `base_url`
pub fn scan(root: impl Into<PathBuf>, base_url: &str) -> ScanResult<Scanner> {
    Scanner::new(root, base_url)
}

/// Whether the entry is a file, or a symlink that does not resolve to a directory
///
/// Symlinked directories are neither descended into nor listed as pages.
/// A dangling link is kept so its metadata error surfaces from `entry_for`.
fn is_file_like(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        !entry.path().is_dir()
    } else {
        !entry.file_type().is_dir()
    }
}

/// Whether the entry's file name ends in one of [`PAGE_SUFFIXES`]
fn is_page(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    PAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Path of `path` below `root`, with `/` separators
fn relative_url_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn format_lastmod(modified: DateTime<Local>) -> String {
    modified.format("%Y-%m-%d").to_string()
}

//! Sitemap generation
//!
//! This module walks the site directory for pages and turns them into a
//! sitemap.xml document.

pub mod build;
pub mod scan;

// Re-export main types
pub use build::*;
pub use scan::*;

use std::path::{Path, PathBuf};

/// Name of the generated file
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

/// Where sitemap.xml goes for a configured directory
///
/// An empty directory setting means the current directory. `generate`
/// refuses an empty directory before getting here, so only library callers
/// reach that branch.
pub fn output_path(directory: &str) -> PathBuf {
    if directory.is_empty() {
        PathBuf::from(SITEMAP_FILE_NAME)
    } else {
        Path::new(directory).join(SITEMAP_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_in_directory() {
        assert_eq!(output_path("/site"), PathBuf::from("/site/sitemap.xml"));
    }

    #[test]
    fn test_output_path_without_directory() {
        assert_eq!(output_path(""), PathBuf::from("sitemap.xml"));
    }
}

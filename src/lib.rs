//! site-mapper - XML sitemap generator for static sites
//!
//! site-mapper scans a directory tree for HTML pages and writes a
//! sitemap.xml describing each page's URL and last modification date,
//! keeping its settings in a JSON config file.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod sitemap;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, SiteMapperError};

/// Current version of site-mapper
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

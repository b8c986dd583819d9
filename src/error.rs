//! Error types for site-mapper

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site-mapper operations
pub type Result<T> = std::result::Result<T, SiteMapperError>;

/// Main error type for site-mapper
#[derive(Error, Debug)]
pub enum SiteMapperError {
    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem scan errors
    #[error("Error generating sitemap: {0}")]
    Scan(#[from] ScanError),

    /// Sitemap encoding and output errors
    #[error("Error generating sitemap: {0}")]
    Sitemap(#[from] SitemapError),

    /// Command line and command handler errors
    #[error("{0}")]
    Command(#[from] CommandError),

    /// I/O errors (console output, interactive input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration file loading and saving errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while walking the site directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory '{0}' does not exist or is not a directory")]
    NotFound(PathBuf),

    #[error("Invalid base URL '{url}': {error}")]
    InvalidBaseUrl { url: String, error: String },

    #[error("Cannot build URL for '{path}': {error}")]
    UrlJoin { path: String, error: String },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read modification time of '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while encoding or writing sitemap.xml
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Failed to encode sitemap XML: {0}")]
    Encode(String),

    #[error("Failed to write sitemap to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Command dispatch and handler errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Help text requested or no command given; carries the rendered usage
    #[error("{0}")]
    Help(String),

    /// Wrong arguments for a command; carries the rendered clap error with usage
    #[error("{0}")]
    Usage(String),

    #[error("Invalid command '{0}'. Use '--help' for usage.")]
    InvalidCommand(String),

    #[error("Invalid path index '{input}' (expected a number from 0 to {})", max_index(.count))]
    InvalidPathIndex { input: String, count: usize },

    #[error(
        "Please provide both -d <directory> and -u <base_url> arguments or ensure they are set in the config file."
    )]
    MissingTarget,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for scan operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Specialized result type for sitemap output
pub type SitemapResult<T> = std::result::Result<T, SitemapError>;

/// Specialized result type for command handling
pub type CommandResult<T> = std::result::Result<T, CommandError>;

fn max_index(count: &usize) -> usize {
    count.saturating_sub(1)
}

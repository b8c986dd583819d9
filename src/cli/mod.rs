//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, dispatch to the command
//! handlers, and interactive input.

pub mod app;
pub mod commands;
pub mod input;

// Re-export main types
pub use app::*;
pub use commands::*;
pub use input::*;

//! Configuration storage and validation
//!
//! This module handles the config.json record: its types, loading and
//! saving, and advisory checks on the values it holds.

pub mod schema;
pub mod store;
pub mod types;

// Re-export main types
pub use schema::*;
pub use store::*;
pub use types::*;

//! Backends module - File system operations
//!
//! Provides:
//! - scan: Target file discovery with walkdir

pub mod scan;

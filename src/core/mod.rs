//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Audit result model (Report, FileRecord, Totals)
//! - Target selection rules
//! - Rendering functions for different output formats
//! - Path resolution utilities
//! - Strict UTF-8 file reading

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod rules;

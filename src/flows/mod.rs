//! Flows module - End-to-end commands
//!
//! Provides:
//! - audit: Walk, estimate and report hardcoded user-facing text

pub mod audit;

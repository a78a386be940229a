//! Backends module - filesystem discovery
//!
//! Provides:
//! - scan: recursive test file discovery

pub mod scan;

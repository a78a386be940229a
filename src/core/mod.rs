//! Core module - data model and shared helpers
//!
//! This module provides:
//! - The combined document model (CandidateFile, Block, CombinedDocument)
//! - Document rendering
//! - Root, test-root and output path helpers
//! - Error types and logging setup

pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;

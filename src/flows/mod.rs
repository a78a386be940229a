//! Flows module - end-to-end commands
//!
//! - combine: collect test files into one document and write it next to the root

pub mod combine;

//! Renderer module
//!
//! Renders a CombinedDocument to its text form: header, trimmed content and
//! separator per file, all joined with '\n'.

use crate::core::model::{CombinedDocument, SEPARATOR_BLOCK};

/// Render a combined document to text
///
/// An empty document renders to an empty string.
pub fn render_document(doc: &CombinedDocument) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(doc.len() * 3);
    for block in &doc.blocks {
        parts.push(&block.header);
        parts.push(&block.content);
        parts.push(SEPARATOR_BLOCK);
    }
    parts.join("\n")
}

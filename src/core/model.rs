//! Combined Document Model
//!
//! Discovery produces `CandidateFile`s; reading them produces `Block`s that are
//! collected into a `CombinedDocument` before rendering.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Separator block appended after every file's content
pub const SEPARATOR_BLOCK: &str = "\n";

/// A file discovered under the test root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path as produced by the walk (rooted at the supplied root)
    pub path: PathBuf,

    /// Path relative to the root, used only for display
    pub relative: PathBuf,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            relative: relative.into(),
        }
    }

    /// Header line identifying this file in the combined document
    pub fn header(&self) -> String {
        header_for(&self.relative)
    }
}

/// Build the `// file: <relative>` header for a path
pub fn header_for(relative: &Path) -> String {
    format!("// file: {}", relative.display())
}

/// One file's contribution to the combined document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: String,
    /// Content with leading/trailing whitespace removed
    pub content: String,
}

impl Block {
    /// Create a block, trimming the raw file content
    pub fn new(candidate: &CandidateFile, raw: &str) -> Self {
        Self {
            header: candidate.header(),
            content: trim_content(raw).to_string(),
        }
    }
}

/// Strip leading and trailing whitespace, including the ASCII
/// file/group/record/unit separators (U+001C..=U+001F)
pub fn trim_content(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Ordered collection of blocks, in sorted path order
#[derive(Debug, Clone, Default)]
pub struct CombinedDocument {
    pub blocks: Vec<Block>,
}

impl CombinedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Summary of one run, printed with `--stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombineStats {
    /// Files matching the pattern
    pub matched: usize,

    /// Files read successfully and included in the document
    pub included: usize,

    /// Files that could not be read
    pub failed: usize,

    /// Size of the rendered document in bytes
    pub bytes: usize,

    /// Where the document was written, if anywhere
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_uses_relative_path() {
        let candidate = CandidateFile::new(
            "/proj/__test__/a.test.ts",
            Path::new("__test__").join("a.test.ts"),
        );
        let expected = format!(
            "// file: {}",
            Path::new("__test__").join("a.test.ts").display()
        );
        assert_eq!(candidate.header(), expected);
    }

    #[test]
    fn test_block_trims_content() {
        let candidate = CandidateFile::new("/proj/__test__/a.test.ts", "__test__/a.test.ts");
        let block = Block::new(&candidate, "abc\n  ");
        assert_eq!(block.content, "abc");

        let block = Block::new(&candidate, "\n\n  it('works')\n\t");
        assert_eq!(block.content, "it('works')");
    }

    #[test]
    fn test_trim_content_strips_separator_controls() {
        assert_eq!(trim_content("\u{1c}\u{1d} abc \u{1e}\u{1f}\n"), "abc");
        assert_eq!(trim_content("\u{a0}abc\u{3000}"), "abc");
        // Interior characters are kept
        assert_eq!(trim_content("a\u{1f}b"), "a\u{1f}b");
        // Other controls are not whitespace
        assert_eq!(trim_content("\u{1b}abc"), "\u{1b}abc");
    }

    #[test]
    fn test_document_push_and_len() {
        let mut doc = CombinedDocument::new();
        assert!(doc.is_empty());

        let candidate = CandidateFile::new("/p/__test__/a.test.ts", "__test__/a.test.ts");
        doc.push(Block::new(&candidate, "x"));
        assert_eq!(doc.len(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CombineStats {
            matched: 3,
            included: 2,
            failed: 1,
            bytes: 42,
            output: None,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"matched":3,"included":2,"failed":1,"bytes":42,"output":null}"#
        );
    }
}

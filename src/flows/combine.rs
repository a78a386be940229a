//! Combine flow - gather test files into a single annotated document
//!
//! Discovers `*.test.<ext>` files under `<root>/<test_dir>`, reads them in
//! sorted path order and writes the combined text to `<root>/<output>`.
//! Unreadable files are reported and skipped; only a failed write aborts.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::backends::scan::find_test_files;
use crate::core::error::CombineError;
use crate::core::model::{Block, CombineStats, CombinedDocument};
use crate::core::paths::{
    output_path, search_pattern, test_root, DEFAULT_EXT, DEFAULT_OUTPUT, DEFAULT_TEST_DIR,
};
use crate::core::render::render_document;

/// Options for the combine command
#[derive(Debug, Clone)]
pub struct CombineOptions {
    /// Directory under the root holding the tests
    pub test_dir: String,
    /// Extension in `*.test.<ext>`
    pub ext: String,
    /// Output file name, written inside the root
    pub output: String,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            test_dir: DEFAULT_TEST_DIR.to_string(),
            ext: DEFAULT_EXT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

/// Output switches for the combine command
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitOptions {
    /// Suppress the confirmation line
    pub quiet: bool,
    /// Print a JSON summary to stderr
    pub stats: bool,
}

/// Result of collecting test files
#[derive(Debug, Default)]
pub struct Collection {
    /// Search pattern, for diagnostics
    pub pattern: String,
    /// Number of files matching the pattern
    pub matched: usize,
    pub document: CombinedDocument,
    /// Files that matched but could not be read, in sorted order
    pub failures: Vec<CombineError>,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}

/// Discover and read all test files under the root
pub fn collect(root: &Path, opts: &CombineOptions) -> Collection {
    let test_root = test_root(root, &opts.test_dir);
    let pattern = search_pattern(&test_root, &opts.ext);
    info!(%pattern, "scanning for test files");

    let candidates = find_test_files(root, &test_root, &opts.ext);
    let mut collection = Collection {
        pattern,
        matched: candidates.len(),
        document: CombinedDocument::new(),
        failures: Vec::new(),
    };

    for candidate in &candidates {
        match fs::read_to_string(&candidate.path) {
            Ok(raw) => collection.document.push(Block::new(candidate, &raw)),
            Err(source) => {
                debug!(path = %candidate.path.display(), error = %source, "read failed");
                collection.failures.push(CombineError::ReadFile {
                    path: candidate.path.clone(),
                    source,
                });
            }
        }
    }

    info!(
        matched = collection.matched,
        included = collection.document.len(),
        failed = collection.failures.len(),
        "collected test files"
    );
    collection
}

/// Write the rendered document to its destination, replacing any existing file
pub fn write_document(dest: &Path, text: &str) -> Result<(), CombineError> {
    fs::write(dest, text).map_err(|source| CombineError::WriteOutput {
        path: dest.to_path_buf(),
        source,
    })?;
    info!(path = %dest.display(), bytes = text.len(), "wrote combined document");
    Ok(())
}

/// Collect and render. Returns the document text, empty when nothing was read.
pub fn combine(root: &Path, opts: &CombineOptions) -> (Collection, String) {
    let collection = collect(root, opts);
    let text = render_document(&collection.document);
    (collection, text)
}

/// Run the combine command
pub fn run_combine(root: &Path, opts: &CombineOptions, emit: EmitOptions) -> Result<()> {
    let (collection, text) = combine(root, opts);

    if collection.matched == 0 {
        eprintln!("No test files found in {}", collection.pattern);
    }

    for failure in &collection.failures {
        let detail = match failure {
            CombineError::ReadFile { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        let message = format!("Error reading {}: {}", failure.path().display(), detail);
        eprintln!("{}", message.red());
    }

    let mut written: Option<PathBuf> = None;
    if !collection.is_empty() {
        println!("{}", text);

        let dest = output_path(root, &opts.output);
        write_document(&dest, &text)?;
        if !emit.quiet {
            eprintln!("{} {}", "Output saved to:".green(), dest.display());
        }
        written = Some(dest);
    }

    if emit.stats {
        let stats = CombineStats {
            matched: collection.matched,
            included: collection.document.len(),
            failed: collection.failures.len(),
            bytes: text.len(),
            output: written.map(|p| p.display().to_string()),
        };
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}

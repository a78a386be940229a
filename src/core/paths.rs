//! Path utilities
//!
//! Builds the test root, output path and search pattern from the root, and
//! renders display paths relative to the root with the host separator.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Default name of the directory holding test files
pub const DEFAULT_TEST_DIR: &str = "__test__";

/// Default extension in the `*.test.<ext>` pattern
pub const DEFAULT_EXT: &str = "ts";

/// Default name of the combined output file
pub const DEFAULT_OUTPUT: &str = "combined_tests.txt";

/// Resolve the root to an absolute path when possible.
///
/// A root that cannot be canonicalized (e.g. it does not exist) is returned
/// unchanged so the scan reports "no match" instead of failing.
pub fn resolve_root(root: PathBuf) -> PathBuf {
    root.canonicalize().unwrap_or(root)
}

/// The directory the recursive scan starts from
pub fn test_root(root: &Path, test_dir: &str) -> PathBuf {
    root.join(test_dir)
}

/// Where the combined document is written
pub fn output_path(root: &Path, output: &str) -> PathBuf {
    root.join(output)
}

/// Filename suffix for an extension: `ts` -> `.test.ts`
pub fn test_suffix(ext: &str) -> String {
    format!(".test.{}", ext.trim_start_matches('.'))
}

/// Human-readable search pattern, used in the no-match diagnostic
pub fn search_pattern(test_root: &Path, ext: &str) -> String {
    test_root
        .join("**")
        .join(format!("*{}", test_suffix(ext)))
        .display()
        .to_string()
}

/// Check whether a file name matches the `*.test.<ext>` pattern
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
pub fn matches_suffix(name: &OsStr, suffix: &str) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.ends_with(suffix.as_bytes()) && !bytes.starts_with(b".")
}

/// Make a path relative to the root directory, keeping the host separator
pub fn make_relative(path: &Path, root: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

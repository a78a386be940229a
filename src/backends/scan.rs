//! Test file discovery
//!
//! Walks the test root with the ignore crate's walker, with ignore files
//! disabled and symlinks followed, collecting every `*.test.<ext>` file.

use ignore::WalkBuilder;
use std::path::Path;
use tracing::debug;

use crate::core::model::CandidateFile;
use crate::core::paths::{make_relative, matches_suffix, test_suffix};

/// Find every file under `test_root` whose name ends with `.test.<ext>`.
///
/// Results are sorted by the byte order of the full path. A missing test root
/// yields an empty list. Entries starting with '.' are skipped, both files and
/// directories. A matching name that cannot be resolved (a dangling symlink) is
/// still returned so the read reports it.
pub fn find_test_files(root: &Path, test_root: &Path, ext: &str) -> Vec<CandidateFile> {
    if !test_root.is_dir() {
        debug!(path = %test_root.display(), "test root does not exist");
        return Vec::new();
    }

    let suffix = test_suffix(ext);

    let mut builder = WalkBuilder::new(test_root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(true);

    let mut paths = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                match unresolved_path(&err) {
                    Some(path) if name_matches(path, &suffix) => {
                        debug!(path = %path.display(), error = %err, "matched unresolved entry");
                        paths.push(path.to_path_buf());
                    }
                    _ => debug!(error = %err, "skipping unreadable entry"),
                }
                continue;
            }
        };

        // Skip the test root itself and directories
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        if matches_suffix(entry.file_name(), &suffix) {
            debug!(path = %path.display(), "matched test file");
            paths.push(path.to_path_buf());
        }
    }

    // Byte order of the whole path, not component order
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    paths
        .into_iter()
        .map(|path| {
            let relative = make_relative(&path, root).unwrap_or_else(|| path.clone());
            CandidateFile::new(path, relative)
        })
        .collect()
}

fn name_matches(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| matches_suffix(name, suffix))
        .unwrap_or(false)
}

/// Path of an entry the walker listed but could not stat, e.g. a dangling link.
/// Symlink loops are not reported here.
fn unresolved_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithDepth { err, .. } => unresolved_path(err),
        ignore::Error::WithPath { path, err } => match err.as_ref() {
            ignore::Error::Io(_) => Some(path.as_path()),
            other => unresolved_path(other),
        },
        _ => None,
    }
}

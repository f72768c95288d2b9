//! Recursive lookup across the standard roots.
//!
//! Roots are searched in a fixed order: documents, then resources, then
//! library, then temp. Within a root every reachable descendant is visited
//! exactly once, with no ordering promise; when several files in one root
//! share the name, which one wins is unspecified. Only files match, and
//! unreadable subtrees are skipped rather than fatal.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::diag::Diagnostics;
use crate::errors::StowageError;
use crate::roots::RootSet;

/// Locate the first file named `filename` under any standard root.
pub(crate) fn find_path(
    roots: &RootSet,
    diag: &Diagnostics,
    filename: &str,
) -> Result<PathBuf, StowageError> {
    for (root_name, root) in roots.in_search_order() {
        if diag.debug_mode() {
            info!(root = root_name, file = filename, "searching root");
        }
        if let Some(found) = search_root(root, filename) {
            if diag.debug_mode() {
                info!(path = %found.display(), "file found");
            }
            return Ok(found);
        }
    }
    Err(StowageError::NotFound(PathBuf::from(filename)))
}

/// Walk one root iteratively; the first file whose base name equals
/// `filename` wins. The root entry itself is never a candidate.
fn search_root(root: &Path, filename: &str) -> Option<PathBuf> {
    let target = OsStr::new(filename);
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| entry.file_name() == target)
        .map(|entry| entry.into_path())
}

//! Directory creation.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::classify::{EntryKind, TypeCheck, classify};
use crate::diag::Diagnostics;
use crate::errors::StowageError;

use super::{expect_kind, leaf_name};

/// Create a directory at `path`, with any missing intermediates.
///
/// An existing directory is success with nothing to do; an existing file is
/// a kind mismatch, never overwritten.
pub(crate) fn create_directory(diag: &Diagnostics, path: &Path) -> Result<(), StowageError> {
    match classify(path) {
        EntryKind::Directory => {
            if diag.debug_mode() {
                info!(path = %path.display(), "directory already present, nothing to create");
            }
            Ok(())
        }
        EntryKind::File => Err(StowageError::KindMismatch {
            path: path.to_path_buf(),
            expected: EntryKind::Directory,
            actual: EntryKind::File,
        }),
        EntryKind::Absent => {
            if diag.debug_mode() {
                info!(path = %path.display(), "creating directory");
            }
            fs::create_dir_all(path).map_err(|e| StowageError::host("create directory", path, e))
        }
    }
}

/// Create `name` as a child of `parent`, which must already be a directory.
/// Leading separators on `name` are ignored, so "/Sub" and "Sub" are the
/// same request.
pub(crate) fn create_subdirectory(
    diag: &Diagnostics,
    name: &str,
    parent: &Path,
) -> Result<(), StowageError> {
    expect_kind(parent, EntryKind::Directory, TypeCheck::Enforce)?;
    create_directory(diag, &parent.join(leaf_name(name)))
}

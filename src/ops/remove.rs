//! Guarded deletion.

use std::path::Path;

use tracing::info;

use crate::classify::{EntryKind, TypeCheck};
use crate::diag::Diagnostics;
use crate::errors::StowageError;

use super::{expect_kind, host};

/// Recursively remove the directory at `path` and everything under it.
pub(crate) fn delete_directory(
    diag: &Diagnostics,
    path: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    expect_kind(path, EntryKind::Directory, check)?;
    if diag.debug_mode() {
        info!(path = %path.display(), "deleting directory");
    }
    host::remove_entry(path)
}

/// Remove the single file at `path`.
pub(crate) fn delete_file(
    diag: &Diagnostics,
    path: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    expect_kind(path, EntryKind::File, check)?;
    if diag.debug_mode() {
        info!(path = %path.display(), "deleting file");
    }
    host::remove_entry(path)
}

//! Shallow directory copy and single-file copy.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::classify::{EntryKind, TypeCheck};
use crate::diag::Diagnostics;
use crate::errors::StowageError;

use super::create::create_directory;
use super::{ensure_apart, excluded_from_copy, expect_kind, host};

/// Copy the immediate children of `src` into `dst`, creating `dst` first if
/// needed.
///
/// The guards run before `dst` is touched, so a guard failure provably
/// mutates nothing; a `dst` that is `src` itself or nested inside it is
/// refused. Children are snapshot up front and each one is handed to the
/// driver whole: files byte for byte, child directories with their entire
/// subtree. The exclusion rule applies to the top level only; on a name
/// collision the incoming file overwrites the existing one.
pub(crate) fn copy_directory(
    diag: &Diagnostics,
    src: &Path,
    dst: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    expect_kind(src, EntryKind::Directory, check)?;
    ensure_apart(src, dst)?;
    create_directory(diag, dst)?;

    if diag.debug_mode() {
        info!(src = %src.display(), dst = %dst.display(), "copying directory contents");
    }

    for (name, path) in children_of(src)? {
        host::copy_entry(&path, &dst.join(&name))?;
    }
    Ok(())
}

/// Copy the file at `path` into `dest_dir`, keeping its base name. The
/// destination directory is created if missing; an existing file under the
/// same name there is overwritten, except that a destination resolving to
/// the source itself is refused.
pub(crate) fn copy_file(
    diag: &Diagnostics,
    path: &Path,
    dest_dir: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    expect_kind(path, EntryKind::File, check)?;
    let dest = dest_dir.join(base_name(path)?);
    ensure_apart(path, &dest)?;
    create_directory(diag, dest_dir)?;

    if diag.debug_mode() {
        info!(src = %path.display(), dest = %dest.display(), "copying file");
    }
    host::copy_entry(path, &dest)
}

/// Snapshot of `dir`'s immediate children with the exclusion rule applied.
/// Taken before any mutation so the copy loop never observes its own work.
pub(crate) fn children_of(dir: &Path) -> Result<Vec<(OsString, PathBuf)>, StowageError> {
    let reader = fs::read_dir(dir).map_err(|e| StowageError::host("list directory", dir, e))?;
    let mut children = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|e| StowageError::host("list directory", dir, e))?;
        let name = entry.file_name();
        if excluded_from_copy(&name) {
            continue;
        }
        children.push((name, entry.path()));
    }
    Ok(children)
}

/// Base name of `path`, required for landing it under a destination
/// directory.
pub(crate) fn base_name(path: &Path) -> Result<&OsStr, StowageError> {
    path.file_name().ok_or_else(|| {
        StowageError::host(
            "resolve file name",
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })
}

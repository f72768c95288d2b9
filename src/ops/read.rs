//! Read-side conveniences: path construction, child counts, byte retrieval.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::classify::{EntryKind, TypeCheck};
use crate::diag::Diagnostics;
use crate::errors::StowageError;

use super::{expect_kind, leaf_name};

/// Join `name` onto `dir` after checking that `dir` is a directory.
///
/// Pure path construction: the named file is not required to exist, so this
/// also builds destinations for entries about to be created.
pub(crate) fn path_for_file(name: &str, dir: &Path) -> Result<PathBuf, StowageError> {
    expect_kind(dir, EntryKind::Directory, TypeCheck::Enforce)?;
    Ok(dir.join(leaf_name(name)))
}

/// Count of `dir`'s immediate children. Hidden entries count; nothing
/// recurses.
pub(crate) fn number_of_files(dir: &Path) -> Result<usize, StowageError> {
    expect_kind(dir, EntryKind::Directory, TypeCheck::Enforce)?;
    let reader = fs::read_dir(dir).map_err(|e| StowageError::host("list directory", dir, e))?;
    let mut count = 0;
    for entry in reader {
        entry.map_err(|e| StowageError::host("list directory", dir, e))?;
        count += 1;
    }
    Ok(count)
}

/// Entire contents of the file at `path`.
///
/// Anything that stops the read, absence included, is an error; an existing
/// empty file reads as zero bytes, which is success.
pub(crate) fn retrieve_data(diag: &Diagnostics, path: &Path) -> Result<Vec<u8>, StowageError> {
    expect_kind(path, EntryKind::File, TypeCheck::Enforce)?;
    if diag.debug_mode() {
        info!(path = %path.display(), "reading file contents");
    }
    fs::read(path).map_err(|e| StowageError::host("read file", path, e))
}

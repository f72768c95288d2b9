//! Two-phase moves and the rename protocol built on them.
//!
//! A move is a copy followed by deletion of the originals, deliberately not
//! atomic and never rolled back. When the copy has fully landed and only
//! the deletion fails, the move still reports success and the leftover
//! surfaces as a logged partial-completion error.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{error, info};

use crate::classify::{EntryKind, TypeCheck};
use crate::diag::Diagnostics;
use crate::errors::StowageError;

use super::copy::{children_of, copy_directory, copy_file};
use super::create::create_directory;
use super::{ensure_apart, expect_kind, host, leaf_name};

/// Move the immediate children of `src` into `dst`.
///
/// Phase one is [`copy_directory`] and fails the move on any error. Phase
/// two deletes the copied originals and drops `src` itself once empty;
/// entries the copy excluded stay behind and keep `src` alive.
pub(crate) fn move_directory(
    diag: &Diagnostics,
    src: &Path,
    dst: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    copy_directory(diag, src, dst, check)?;
    if let Err(err) = clear_source(src) {
        error!(op = "move_directory", kind = err.kind(), "{err}");
    }
    Ok(())
}

/// Move the file at `path` into `dest_dir`: copy, then delete the source.
pub(crate) fn move_file(
    diag: &Diagnostics,
    path: &Path,
    dest_dir: &Path,
    check: TypeCheck,
) -> Result<(), StowageError> {
    copy_file(diag, path, dest_dir, check)?;
    if let Err(cause) = host::remove_entry(path) {
        let err = StowageError::PartialCompletion {
            src: path.to_path_buf(),
            detail: cause.to_string(),
        };
        error!(op = "move_file", kind = err.kind(), "{err}");
    }
    Ok(())
}

/// Rename the directory at `path` to `new_name` in place.
///
/// The protocol is create-sibling, move-contents, remove-original; after a
/// successful rename the original path is gone even if excluded artifacts
/// had kept it alive through the move. Renaming a directory to its current
/// name is a no-op, and a new name that would nest the target inside the
/// original is refused.
pub(crate) fn rename_directory(
    diag: &Diagnostics,
    path: &Path,
    new_name: &str,
    check: TypeCheck,
) -> Result<(), StowageError> {
    expect_kind(path, EntryKind::Directory, check)?;

    let parent = path.parent().ok_or_else(|| {
        StowageError::host(
            "rename directory",
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"),
        )
    })?;
    let renamed = parent.join(leaf_name(new_name));
    if renamed == path {
        return Ok(());
    }
    ensure_apart(path, &renamed)?;

    if diag.debug_mode() {
        info!(from = %path.display(), to = %renamed.display(), "renaming directory");
    }

    create_directory(diag, &renamed)?;
    move_directory(diag, path, &renamed, check)?;
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| StowageError::host("remove directory", path, e))?;
    }
    Ok(())
}

/// Delete the already-copied originals under `src`, then drop `src` itself
/// if that left it empty. Any failure here is the move's partial state.
fn clear_source(src: &Path) -> Result<(), StowageError> {
    let partial = |detail: String| StowageError::PartialCompletion {
        src: src.to_path_buf(),
        detail,
    };
    let children = children_of(src).map_err(|e| partial(e.to_string()))?;
    for (_, path) in children {
        host::remove_entry(&path).map_err(|e| partial(e.to_string()))?;
    }
    let _ = fs::remove_dir(src);
    Ok(())
}

//! Entry operations: create, copy, move, rename, delete, read.
//!
//! One submodule per action family. Everything funnels through the same
//! kind guard here and the same driver primitives in [`host`], so the
//! guard-override semantics are uniform across the surface.

pub(crate) mod copy;
pub(crate) mod create;
pub(crate) mod host;
pub(crate) mod read;
pub(crate) mod relocate;
pub(crate) mod remove;

use std::ffi::OsStr;
use std::path::Path;

use crate::classify::{EntryKind, TypeCheck, classify};
use crate::errors::StowageError;

/// Kind guard shared by every operation.
///
/// An absent target fails regardless of `check`: the override bypasses the
/// kind comparison, never the existence check. Under [`TypeCheck::Ignore`] a
/// mismatched kind passes, and later failures, if any, come from the driver
/// primitives themselves.
pub(crate) fn expect_kind(
    path: &Path,
    expected: EntryKind,
    check: TypeCheck,
) -> Result<(), StowageError> {
    match classify(path) {
        EntryKind::Absent => Err(StowageError::not_found(path)),
        actual if actual == expected => Ok(()),
        actual => match check {
            TypeCheck::Enforce => Err(StowageError::KindMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            }),
            TypeCheck::Ignore => Ok(()),
        },
    }
}

/// Overlap guard for the copy and move family.
///
/// A destination that is the source itself, or sits anywhere inside it,
/// would make the host truncate or recurse into the very data it is
/// reading, so such a pair fails before anything is touched. Both sides
/// are compared as spelled and, where they exist, canonicalized, so an
/// alias through a symlink or `..` is caught by location too.
pub(crate) fn ensure_apart(src: &Path, dst: &Path) -> Result<(), StowageError> {
    let src_real = dunce::canonicalize(src).unwrap_or_else(|_| src.to_path_buf());
    let dst_real = dunce::canonicalize(dst).unwrap_or_else(|_| dst.to_path_buf());
    if dst.starts_with(src) || dst_real.starts_with(&src_real) {
        return Err(StowageError::SourceOverlap {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    Ok(())
}

/// Strip leading separators so the name joins as a relative child.
///
/// `Path::join` replaces the base entirely when handed an absolute path, so
/// "/Sub" and "Sub" must land on the same child of the parent.
pub(crate) fn leaf_name(name: &str) -> &str {
    name.trim_start_matches(['/', '\\'])
}

/// Shallow-copy exclusion rule: the current and parent pseudo-entries and
/// resource-fork artifacts (`._` prefix) are skipped. Other dotfiles are
/// ordinary hidden entries and are not excluded.
pub(crate) fn excluded_from_copy(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name == "." || name == ".." || name.starts_with("._")
}

//! The public surface: a [`Stowage`] instance owning the prepared roots and
//! the diagnostics gate, with every operation as a method.
//!
//! Failure policy lives here. Internally everything is `Result`; each method
//! converts that to its simple result at this boundary, after logging the
//! error with a stable `kind` label and, where the OS suggested one, a hint.
//! Callers inspect return values and consult the log; nothing propagates.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::classify::{self, EntryKind, TypeCheck};
use crate::diag::Diagnostics;
use crate::errors::StowageError;
use crate::find;
use crate::ops::{copy, create, read, relocate, remove};
use crate::roots::RootSet;

/// Simple, type-guarded file management inside an application's standard
/// storage roots.
///
/// Construction resolves and prepares the four roots once; afterwards the
/// set is immutable and every method is a single synchronous pass over the
/// live file system. Nothing is cached between calls.
#[derive(Debug)]
pub struct Stowage {
    roots: RootSet,
    diag: Diagnostics,
}

impl Stowage {
    /// Build an instance on the platform-standard layout for `app`.
    ///
    /// Fails if any of the four roots cannot be resolved and prepared. This
    /// is the one failure the crate does return as an error: without roots
    /// there is no instance to degrade onto.
    pub fn new(app: &str) -> Result<Self, StowageError> {
        Self::with_roots(RootSet::resolve(app)?)
    }

    /// Build an instance on an explicit root layout.
    ///
    /// The set is validated and normalized here: the writable roots are
    /// created if missing, the resources root must already exist, and all
    /// four must be non-empty and pairwise distinct after canonicalization.
    pub fn with_roots(roots: RootSet) -> Result<Self, StowageError> {
        Ok(Self {
            roots: roots.prepare()?,
            diag: Diagnostics::default(),
        })
    }

    /// The prepared root set, in canonical form.
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// The documents root: user-generated content the application owns.
    pub fn documents(&self) -> &Path {
        &self.roots.documents
    }

    /// The resources root: read-only assets shipped with the executable.
    pub fn resources(&self) -> &Path {
        &self.roots.resources
    }

    /// The library root: internal support files and caches.
    pub fn library(&self) -> &Path {
        &self.roots.library
    }

    /// The temp root: scratch space the platform may purge.
    pub fn temp(&self) -> &Path {
        &self.roots.temp
    }

    /// Turn informational logging on or off for this instance. Error events
    /// are emitted regardless of this setting.
    pub fn set_debug_mode(&mut self, on: bool) {
        self.diag.set_debug_mode(on);
    }

    /// Whether informational logging is currently on.
    pub fn debug_mode(&self) -> bool {
        self.diag.debug_mode()
    }

    /// What currently exists at `path`: a file, a directory, or nothing.
    /// Derived fresh on every call.
    pub fn classify(&self, path: impl AsRef<Path>) -> EntryKind {
        classify::classify(path.as_ref())
    }

    /// Whether anything exists at `path`, whatever its kind.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        classify::exists(path.as_ref())
    }

    /// Create a directory at `path`, with any missing intermediates.
    ///
    /// Succeeds if a directory is already there; fails if a file is.
    pub fn create_directory(&self, path: impl AsRef<Path>) -> bool {
        report(
            "create_directory",
            create::create_directory(&self.diag, path.as_ref()),
        )
    }

    /// Create `name` as a subdirectory of `parent`, which must already be a
    /// directory. A leading separator on `name` is ignored, so "/Sub" and
    /// "Sub" create the same child.
    pub fn create_subdirectory(&self, name: &str, parent: impl AsRef<Path>) -> bool {
        report(
            "create_subdirectory",
            create::create_subdirectory(&self.diag, name, parent.as_ref()),
        )
    }

    /// Shallow-copy the immediate children of `src` into `dst`, creating
    /// `dst` if needed.
    ///
    /// "." and ".." and "._" resource-fork artifacts are skipped at the top
    /// level; other hidden entries are copied, and child directories come
    /// across with their whole subtree. Colliding destination files are
    /// overwritten. A `dst` that is `src` itself or sits inside it is
    /// refused, since the copy would clobber what it is reading.
    pub fn copy_directory(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        check: TypeCheck,
    ) -> bool {
        report(
            "copy_directory",
            copy::copy_directory(&self.diag, src.as_ref(), dst.as_ref(), check),
        )
    }

    /// Like [`copy_directory`](Self::copy_directory), then deletes the
    /// copied originals.
    ///
    /// Not atomic: if the delete phase fails after a complete copy, the move
    /// still returns `true` and the leftover source is reported in the error
    /// log as a partial completion. Nothing is rolled back.
    pub fn move_directory(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        check: TypeCheck,
    ) -> bool {
        report(
            "move_directory",
            relocate::move_directory(&self.diag, src.as_ref(), dst.as_ref(), check),
        )
    }

    /// Rename the directory at `path` to `new_name` in place, by creating
    /// the sibling, moving the contents over, and removing the original.
    ///
    /// After success the original path is gone. Renaming a directory to its
    /// current name succeeds without touching anything, and a new name that
    /// would land inside the directory itself is refused. Files cannot be
    /// renamed this way; there is deliberately no file counterpart.
    pub fn rename_directory(
        &self,
        path: impl AsRef<Path>,
        new_name: &str,
        check: TypeCheck,
    ) -> bool {
        report(
            "rename_directory",
            relocate::rename_directory(&self.diag, path.as_ref(), new_name, check),
        )
    }

    /// Recursively delete the directory at `path` and everything under it.
    pub fn delete_directory(&self, path: impl AsRef<Path>, check: TypeCheck) -> bool {
        report(
            "delete_directory",
            remove::delete_directory(&self.diag, path.as_ref(), check),
        )
    }

    /// Copy the file at `path` into `dest_dir`, keeping its base name.
    ///
    /// `dest_dir` is created if missing; an existing file under the same
    /// name there is overwritten. Copying a file onto itself, which is what
    /// `dest_dir` being the file's own directory amounts to, is refused.
    pub fn copy_file(
        &self,
        path: impl AsRef<Path>,
        dest_dir: impl AsRef<Path>,
        check: TypeCheck,
    ) -> bool {
        report(
            "copy_file",
            copy::copy_file(&self.diag, path.as_ref(), dest_dir.as_ref(), check),
        )
    }

    /// Copy the file at `path` into `dest_dir`, then delete the source.
    ///
    /// Follows the same two-phase contract as
    /// [`move_directory`](Self::move_directory): a failed source deletion
    /// after a successful copy is logged as partial completion, not failed.
    pub fn move_file(
        &self,
        path: impl AsRef<Path>,
        dest_dir: impl AsRef<Path>,
        check: TypeCheck,
    ) -> bool {
        report(
            "move_file",
            relocate::move_file(&self.diag, path.as_ref(), dest_dir.as_ref(), check),
        )
    }

    /// Remove the single file at `path`.
    pub fn delete_file(&self, path: impl AsRef<Path>, check: TypeCheck) -> bool {
        report(
            "delete_file",
            remove::delete_file(&self.diag, path.as_ref(), check),
        )
    }

    /// Join `name` onto `dir` after checking that `dir` is a directory.
    ///
    /// Pure path construction: the named file does not have to exist, so the
    /// result is also usable as a destination for something about to be
    /// written. A leading separator on `name` is ignored.
    pub fn path_for_file(&self, name: &str, dir: impl AsRef<Path>) -> Option<PathBuf> {
        report_value("path_for_file", read::path_for_file(name, dir.as_ref()))
    }

    /// Number of immediate children of `dir`, hidden entries included.
    ///
    /// Returns 0 when `dir` is missing, is a file, or cannot be listed; the
    /// error log distinguishes those from a genuinely empty directory.
    pub fn number_of_files(&self, dir: impl AsRef<Path>) -> usize {
        report_value("number_of_files", read::number_of_files(dir.as_ref())).unwrap_or(0)
    }

    /// Entire contents of the file at `path`, or `None` if no readable file
    /// is there. An existing empty file is `Some` with zero bytes, never
    /// `None`.
    pub fn retrieve_data(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        report_value(
            "retrieve_data",
            read::retrieve_data(&self.diag, path.as_ref()),
        )
    }

    /// Search documents, resources, library and temp, in that order, for the
    /// first file named exactly `filename`.
    ///
    /// The search enters every subdirectory of each root; traversal order
    /// within a root is not part of the contract. Directories never match.
    pub fn find_path(&self, filename: &str) -> Option<PathBuf> {
        report_value(
            "find_path",
            find::find_path(&self.roots, &self.diag, filename),
        )
    }

    /// Find `filename` under the standard roots and copy it into `dest_dir`.
    pub fn find_and_copy_file(&self, filename: &str, dest_dir: impl AsRef<Path>) -> bool {
        match self.find_path(filename) {
            Some(found) => self.copy_file(found, dest_dir, TypeCheck::Enforce),
            None => {
                error!(
                    op = "find_and_copy_file",
                    kind = "not_found",
                    file = filename,
                    "cannot copy: no file with this name under any root"
                );
                false
            }
        }
    }

    /// Find `filename` under the standard roots and move it into `dest_dir`.
    pub fn find_and_move_file(&self, filename: &str, dest_dir: impl AsRef<Path>) -> bool {
        match self.find_path(filename) {
            Some(found) => self.move_file(found, dest_dir, TypeCheck::Enforce),
            None => {
                error!(
                    op = "find_and_move_file",
                    kind = "not_found",
                    file = filename,
                    "cannot move: no file with this name under any root"
                );
                false
            }
        }
    }

    /// Find `filename` under the standard roots and delete it.
    pub fn find_and_delete_file(&self, filename: &str) -> bool {
        match self.find_path(filename) {
            Some(found) => self.delete_file(found, TypeCheck::Enforce),
            None => {
                error!(
                    op = "find_and_delete_file",
                    kind = "not_found",
                    file = filename,
                    "cannot delete: no file with this name under any root"
                );
                false
            }
        }
    }
}

/// The one choke point from the internal error layer to the boolean surface.
fn report(op: &'static str, result: Result<(), StowageError>) -> bool {
    report_value(op, result).is_some()
}

/// Same conversion for value-carrying operations.
fn report_value<T>(op: &'static str, result: Result<T, StowageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            match err.advice() {
                Some(hint) => error!(op, kind = err.kind(), hint, "{err}"),
                None => error!(op, kind = err.kind(), "{err}"),
            }
            None
        }
    }
}

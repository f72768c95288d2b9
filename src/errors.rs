//! Typed error definitions for stowage.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! These never cross the public call boundary: the [`Stowage`](crate::Stowage)
//! methods log them and collapse to their boolean or optional result.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::classify::EntryKind;

#[derive(Debug, Error)]
pub enum StowageError {
    /// No platform directory was available to derive a standard root from.
    #[error("no platform directory available for the {0} root")]
    RootUnresolved(&'static str),

    /// A standard root could not be created, checked or canonicalized.
    #[error("cannot prepare {name} root {path}: {source}")]
    RootInit {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two standard roots resolved to the same location.
    #[error("{first} and {second} roots both resolve to {path}")]
    RootClash {
        first: &'static str,
        second: &'static str,
        path: PathBuf,
    },

    /// The entry at `path` is not the kind the operation works on.
    #[error("{path} is a {actual}, expected a {expected}")]
    KindMismatch {
        path: PathBuf,
        expected: EntryKind,
        actual: EntryKind,
    },

    /// The destination of a copy or move is the source itself, or sits
    /// inside it. Running such a copy would truncate the data it is about
    /// to read.
    #[error("destination {dst} overlaps source {src}")]
    SourceOverlap { src: PathBuf, dst: PathBuf },

    /// The operation's target, or the file a lookup searched for, does not exist.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// An underlying file-system primitive failed.
    #[error("{op} {path}: {source}")]
    Host {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A move copied everything across but could not remove the originals.
    /// The destination is complete; the source still holds leftovers.
    #[error("moved contents of {src} but could not remove the originals: {detail}")]
    PartialCompletion { src: PathBuf, detail: String },
}

impl StowageError {
    /// Stable machine-readable label, used as the `kind` field of error logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RootUnresolved(_) => "root_unresolved",
            Self::RootInit { .. } => "root_init",
            Self::RootClash { .. } => "root_clash",
            Self::KindMismatch { .. } => "kind_mismatch",
            Self::SourceOverlap { .. } => "source_overlap",
            Self::NotFound(_) => "not_found",
            Self::Host { .. } => "host_failure",
            Self::PartialCompletion { .. } => "partial_completion",
        }
    }

    /// Short actionable hint for host failures, where the OS error suggests one.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Host { source, .. } | Self::RootInit { source, .. } => io_advice(source),
            _ => None,
        }
    }

    pub(crate) fn host(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Host {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn not_found(path: &Path) -> Self {
        Self::NotFound(path.to_path_buf())
    }
}

/// Map a host error to a hint, keyed on the raw OS code where available.
fn io_advice(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let hint = match code {
            libc::EACCES | libc::EPERM => {
                Some("permission denied; check ownership and mode of the parent directory")
            }
            libc::ENOENT => Some("a path component is missing; verify the parent exists"),
            libc::ENOTDIR => Some("a component expected to be a directory is a file"),
            libc::EISDIR => Some("the entry is a directory, not a file"),
            libc::ENOTEMPTY => Some("the directory is not empty"),
            libc::ENOSPC => Some("no space left on the device"),
            libc::EROFS => Some("the file system is read-only"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and mode of the parent directory")
        }
        io::ErrorKind::NotFound => Some("a path component is missing; verify the parent exists"),
        _ => None,
    }
}

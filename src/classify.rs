//! Path classification: what, if anything, currently lives at a path.
//!
//! Classification follows symlinks and is never cached. The file system can
//! change between calls, so every operation re-derives the kind it needs at
//! the moment it runs.

use std::fmt;
use std::fs;
use std::path::Path;

/// What a path resolves to right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An existing entry that is not a directory.
    File,
    /// An existing directory.
    Directory,
    /// Nothing, or nothing whose existence can be established.
    Absent,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Absent => "absent entry",
        })
    }
}

/// Per-call override for the kind guard.
///
/// The override relaxes the kind comparison only. An absent target still
/// fails the guard, and host primitives still fail on their own terms when
/// handed an entry they cannot process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeCheck {
    /// Refuse to act when the entry's kind disagrees with the operation.
    #[default]
    Enforce,
    /// Run the same primitives regardless of the entry's kind.
    Ignore,
}

/// Determine what exists at `path`.
///
/// A stat failure of any sort, unreadable parents included, classifies as
/// [`EntryKind::Absent`]: existence that cannot be established is absence.
pub(crate) fn classify(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        Ok(_) => EntryKind::File,
        Err(_) => EntryKind::Absent,
    }
}

/// Whether anything exists at `path`, whatever its kind.
pub(crate) fn exists(path: &Path) -> bool {
    classify(path) != EntryKind::Absent
}

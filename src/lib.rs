//! Simple, type-guarded file management for an application's private
//! storage areas.
//!
//! A [`Stowage`] instance resolves the four standard roots of an
//! application sandbox (documents, resources, library, temp) once at
//! construction and exposes flat, synchronous operations over them:
//! create, copy, move, rename, delete, locate, read. Every mutating
//! operation first checks that the entry it is about to touch is the kind
//! it expects, file or directory, and refuses to act on a mismatch unless
//! the caller passes [`TypeCheck::Ignore`].
//!
//! Failures never propagate as errors across the public boundary.
//! Operations return `bool`, or an `Option` where a value is produced, and
//! log the underlying cause at error level through [`tracing`], with a
//! stable `kind` label for filtering. Informational logging is off until
//! [`Stowage::set_debug_mode`] turns it on; error events ignore that gate.
//!
//! Moves are deliberately two-phase (copy, then delete the originals) and
//! never rolled back: a move whose copy landed but whose delete failed
//! reports success and logs the leftover as a partial completion.
//!
//! ```no_run
//! use stowage::{Stowage, TypeCheck};
//!
//! let store = Stowage::new("my-app").expect("standard roots unavailable");
//! store.create_subdirectory("exports", store.documents());
//!
//! if let Some(report) = store.find_path("report.txt") {
//!     store.copy_file(&report, store.documents().join("exports"), TypeCheck::Enforce);
//! }
//!
//! let exported = store.number_of_files(store.documents().join("exports"));
//! println!("{exported} file(s) exported");
//! ```

mod classify;
mod diag;
mod errors;
mod find;
mod manager;
mod ops;
mod roots;

pub use classify::{EntryKind, TypeCheck};
pub use errors::StowageError;
pub use manager::Stowage;
pub use roots::RootSet;

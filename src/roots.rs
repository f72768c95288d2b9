//! Standard root resolution.
//!
//! The four well-known storage areas are resolved and prepared once, when a
//! [`Stowage`](crate::Stowage) is constructed: writable roots are created if
//! missing, every root is canonicalized, and the set must be non-empty and
//! pairwise distinct. After that the set is read-only for the lifetime of
//! the instance.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::StowageError;

/// The four standard storage roots of an application sandbox.
///
/// A `RootSet` is plain data until it is handed to a [`Stowage`]
/// constructor, which validates and normalizes it. Hosts that keep their
/// layout in configuration can deserialize one directly.
///
/// [`Stowage`]: crate::Stowage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSet {
    /// User-generated content the application owns.
    pub documents: PathBuf,
    /// Read-only assets shipped alongside the executable.
    pub resources: PathBuf,
    /// Internal support files and caches.
    pub library: PathBuf,
    /// Scratch space the platform may purge at any time.
    pub temp: PathBuf,
}

impl RootSet {
    /// Derive the standard layout for `app` from the platform's well-known
    /// directories.
    ///
    /// documents and library live under the platform data directory, temp
    /// under the system temp directory, and resources is the directory the
    /// running executable was loaded from.
    pub fn resolve(app: &str) -> Result<Self, StowageError> {
        let data = dirs::data_dir().ok_or(StowageError::RootUnresolved("documents"))?;
        let container = data.join(app);

        let exe = env::current_exe().map_err(|_| StowageError::RootUnresolved("resources"))?;
        let resources = exe
            .parent()
            .ok_or(StowageError::RootUnresolved("resources"))?
            .to_path_buf();

        Ok(Self {
            documents: container.join("documents"),
            resources,
            library: container.join("library"),
            temp: env::temp_dir().join(app),
        })
    }

    /// Roots in the fixed order lookups search them: documents, resources,
    /// library, temp.
    pub fn in_search_order(&self) -> [(&'static str, &Path); 4] {
        [
            ("documents", self.documents.as_path()),
            ("resources", self.resources.as_path()),
            ("library", self.library.as_path()),
            ("temp", self.temp.as_path()),
        ]
    }

    /// Create-if-missing, canonicalize and cross-check the whole set.
    ///
    /// The resources root is only required to exist, since it is read-only
    /// by convention; the three writable roots are created with intermediate
    /// components as needed. Canonicalization happens before the distinctness
    /// check so that aliases of the same directory are caught.
    pub(crate) fn prepare(&self) -> Result<RootSet, StowageError> {
        for (name, path) in self.in_search_order() {
            if path.as_os_str().is_empty() {
                return Err(StowageError::RootInit {
                    name,
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
                });
            }
        }

        let prepared = RootSet {
            documents: prepare_writable("documents", &self.documents)?,
            resources: prepare_readonly("resources", &self.resources)?,
            library: prepare_writable("library", &self.library)?,
            temp: prepare_writable("temp", &self.temp)?,
        };
        prepared.ensure_distinct()?;
        Ok(prepared)
    }

    fn ensure_distinct(&self) -> Result<(), StowageError> {
        let roots = self.in_search_order();
        for i in 0..roots.len() {
            for j in (i + 1)..roots.len() {
                if roots[i].1 == roots[j].1 {
                    return Err(StowageError::RootClash {
                        first: roots[i].0,
                        second: roots[j].0,
                        path: roots[i].1.to_path_buf(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn prepare_writable(name: &'static str, path: &Path) -> Result<PathBuf, StowageError> {
    fs::create_dir_all(path).map_err(|e| StowageError::RootInit {
        name,
        path: path.to_path_buf(),
        source: e,
    })?;
    canonical(name, path)
}

fn prepare_readonly(name: &'static str, path: &Path) -> Result<PathBuf, StowageError> {
    if !path.is_dir() {
        return Err(StowageError::RootInit {
            name,
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not an existing directory"),
        });
    }
    canonical(name, path)
}

/// Canonicalize without the `\\?\` prefix Windows would otherwise leak into
/// every logged path.
fn canonical(name: &'static str, path: &Path) -> Result<PathBuf, StowageError> {
    dunce::canonicalize(path).map_err(|e| StowageError::RootInit {
        name,
        path: path.to_path_buf(),
        source: e,
    })
}

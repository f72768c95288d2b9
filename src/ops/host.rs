//! Composite driver primitives.
//!
//! `std::fs` exposes per-kind primitives; the operations above want
//! kind-agnostic ones so the guard override can hand either kind to the
//! same code path. These two helpers are that shim. They run after the
//! caller's guard and perform no checks of their own beyond one stat.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::StowageError;

/// Copy one entry to `dst`: files byte for byte, directories with their
/// whole subtree in a single pass. Existing destination files are
/// overwritten.
pub(crate) fn copy_entry(src: &Path, dst: &Path) -> Result<(), StowageError> {
    let meta = fs::metadata(src).map_err(|e| StowageError::host("stat", src, e))?;
    if meta.is_dir() {
        copy_tree(src, dst)
    } else {
        fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| StowageError::host("copy file", src, e))
    }
}

/// Remove one entry: directories recursively, anything else as a single
/// unlink. Symlinks are removed themselves, not their targets.
pub(crate) fn remove_entry(path: &Path) -> Result<(), StowageError> {
    let meta = fs::symlink_metadata(path).map_err(|e| StowageError::host("stat", path, e))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| StowageError::host("remove directory", path, e))
    } else {
        fs::remove_file(path).map_err(|e| StowageError::host("remove file", path, e))
    }
}

/// One-pass subtree copy: directories are created as the walk reaches them,
/// files are copied in place. Aborts on the first failure, leaving whatever
/// already landed.
fn copy_tree(src: &Path, dst: &Path) -> Result<(), StowageError> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.map_err(|e| StowageError::host("walk directory", src, io::Error::from(e)))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| StowageError::host("walk directory", src, io::Error::other(e)))?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| StowageError::host("create directory", &target, e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| StowageError::host("copy file", entry.path(), e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_entry_clones_a_subtree() {
        let td = tempfile::tempdir().unwrap();
        let src = td.path().join("src");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("top.txt"), b"top").unwrap();
        fs::write(src.join("a/b/leaf.txt"), b"leaf").unwrap();

        let dst = td.path().join("dst");
        copy_entry(&src, &dst).unwrap();

        assert_eq!(fs::read(dst.join("top.txt")).unwrap(), b"top");
        assert_eq!(fs::read(dst.join("a/b/leaf.txt")).unwrap(), b"leaf");
        assert!(src.join("top.txt").exists(), "copy must not consume the source");
    }

    #[test]
    fn remove_entry_handles_both_kinds() {
        let td = tempfile::tempdir().unwrap();
        let dir = td.path().join("d");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.txt"), b"x").unwrap();
        let file = td.path().join("f.txt");
        fs::write(&file, b"y").unwrap();

        remove_entry(&dir).unwrap();
        remove_entry(&file).unwrap();

        assert!(!dir.exists());
        assert!(!file.exists());
        assert!(remove_entry(&file).is_err(), "second removal has nothing to act on");
    }
}

//! Shallow directory copy: exclusions, subtrees, collisions.

use assert_fs::TempDir;
use std::fs;
use std::path::Path;
use stowage::{RootSet, Stowage, TypeCheck};

fn sandbox() -> (TempDir, Stowage) {
    let td = TempDir::new().unwrap();
    fs::create_dir(td.path().join("resources")).unwrap();
    let store = Stowage::with_roots(RootSet {
        documents: td.path().join("documents"),
        resources: td.path().join("resources"),
        library: td.path().join("library"),
        temp: td.path().join("temp"),
    })
    .expect("prepare roots");
    (td, store)
}

fn seed(dir: &Path, name: &str, contents: &str) {
    if let Some(parent) = Path::new(name).parent() {
        fs::create_dir_all(dir.join(parent)).unwrap();
    }
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn copy_takes_children_skips_forks_keeps_hidden() {
    let (_td, store) = sandbox();
    let src = store.documents().join("outbox");
    seed(&src, "a.txt", "alpha");
    seed(&src, ".hidden", "dot");
    seed(&src, "._a.txt", "fork");
    seed(&src, "sub/inner.txt", "deep");

    let dst = store.library().join("copied");
    assert!(store.copy_directory(&src, &dst, TypeCheck::Enforce));

    assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(dst.join(".hidden")).unwrap(), "dot");
    assert_eq!(fs::read_to_string(dst.join("sub/inner.txt")).unwrap(), "deep");
    assert!(!dst.join("._a.txt").exists(), "resource forks must not travel");

    // Four top-level children minus the excluded fork.
    assert_eq!(store.number_of_files(&dst), 3);
    // The source keeps everything, fork included.
    assert_eq!(store.number_of_files(&src), 4);
}

#[test]
fn copy_exclusion_is_top_level_only() {
    let (_td, store) = sandbox();
    let src = store.documents().join("outbox");
    seed(&src, "sub/._nested-fork", "fork");

    let dst = store.library().join("copied");
    assert!(store.copy_directory(&src, &dst, TypeCheck::Enforce));

    // Nested forks ride along inside their subtree.
    assert!(dst.join("sub/._nested-fork").is_file());
}

#[test]
fn copy_merges_into_an_existing_destination() {
    let (_td, store) = sandbox();
    let src = store.documents().join("outbox");
    seed(&src, "a.txt", "new");

    let dst = store.library().join("copied");
    seed(&dst, "a.txt", "old");
    seed(&dst, "keep.txt", "keep");

    assert!(store.copy_directory(&src, &dst, TypeCheck::Enforce));

    assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "new");
    assert_eq!(fs::read_to_string(dst.join("keep.txt")).unwrap(), "keep");
}

#[test]
fn copy_of_a_directory_onto_itself_is_refused() {
    let (_td, store) = sandbox();
    let src = store.documents().join("outbox");
    seed(&src, "a.txt", "alpha");
    seed(&src, "sub/inner.txt", "deep");

    // Copying children onto themselves would truncate every file.
    assert!(!store.copy_directory(&src, &src, TypeCheck::Enforce));

    assert_eq!(fs::read_to_string(src.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(src.join("sub/inner.txt")).unwrap(), "deep");
}

#[test]
fn copy_destination_inside_the_source_is_refused() {
    let (_td, store) = sandbox();
    let src = store.documents().join("outbox");
    seed(&src, "a.txt", "alpha");

    // A destination nested in the source would have the walk descend into
    // directories it is itself creating.
    assert!(!store.copy_directory(&src, src.join("mirror"), TypeCheck::Enforce));

    assert!(!src.join("mirror").exists(), "a refused copy must not create the destination");
    assert_eq!(fs::read_to_string(src.join("a.txt")).unwrap(), "alpha");
    assert_eq!(store.number_of_files(&src), 1);
}

#[test]
fn copy_of_a_missing_source_touches_nothing() {
    let (_td, store) = sandbox();
    let dst = store.library().join("copied");

    assert!(!store.copy_directory(store.documents().join("gone"), &dst, TypeCheck::Enforce));
    assert!(!dst.exists(), "a failed guard must not create the destination");
}

#[test]
fn copy_guard_rejects_a_file_source_before_mutating() {
    let (_td, store) = sandbox();
    let src = store.documents().join("notes.txt");
    fs::write(&src, "not a directory").unwrap();
    let dst = store.library().join("copied");

    assert!(!store.copy_directory(&src, &dst, TypeCheck::Enforce));
    assert!(!dst.exists());
}

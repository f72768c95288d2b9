//! In-place directory renames.

use std::fs;

use stowage::{RootSet, Stowage, TypeCheck};
use tempfile::{TempDir, tempdir};

fn sandbox() -> (TempDir, Stowage) {
    let td = tempdir().unwrap();
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

#[test]
fn rename_produces_a_sibling_and_removes_the_original() {
    let (_td, store) = sandbox();
    let original = store.documents().join("drafts");
    fs::create_dir_all(original.join("sub")).unwrap();
    fs::write(original.join("a.txt"), "alpha").unwrap();
    fs::write(original.join("sub/b.txt"), "beta").unwrap();

    assert!(store.rename_directory(&original, "published", TypeCheck::Enforce));

    let renamed = store.documents().join("published");
    assert_eq!(fs::read_to_string(renamed.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(renamed.join("sub/b.txt")).unwrap(), "beta");
    assert!(!original.exists(), "the original path must be gone after a rename");
}

#[test]
fn rename_removes_the_original_even_with_excluded_leftovers() {
    let (_td, store) = sandbox();
    let original = store.documents().join("drafts");
    fs::create_dir_all(&original).unwrap();
    fs::write(original.join("a.txt"), "alpha").unwrap();
    fs::write(original.join("._a.txt"), "fork").unwrap();

    assert!(store.rename_directory(&original, "published", TypeCheck::Enforce));

    // Unlike a plain move, rename finishes the job: leftovers go down with
    // the original directory.
    assert!(!original.exists());
    assert!(store.documents().join("published/a.txt").is_file());
    assert!(!store.documents().join("published/._a.txt").exists());
}

#[test]
fn rename_to_the_current_name_is_a_no_op() {
    let (_td, store) = sandbox();
    let original = store.documents().join("drafts");
    fs::create_dir_all(&original).unwrap();
    fs::write(original.join("a.txt"), "alpha").unwrap();

    assert!(store.rename_directory(&original, "drafts", TypeCheck::Enforce));

    assert!(original.is_dir());
    assert_eq!(fs::read_to_string(original.join("a.txt")).unwrap(), "alpha");
}

#[test]
fn rename_name_ignores_a_leading_separator() {
    let (_td, store) = sandbox();
    let original = store.documents().join("drafts");
    fs::create_dir_all(&original).unwrap();

    assert!(store.rename_directory(&original, "/published", TypeCheck::Enforce));

    assert!(store.documents().join("published").is_dir());
    assert!(!original.exists());
}

#[test]
fn rename_that_would_nest_inside_the_original_is_refused() {
    let (_td, store) = sandbox();
    let original = store.documents().join("drafts");
    fs::create_dir_all(&original).unwrap();
    fs::write(original.join("a.txt"), "alpha").unwrap();

    // "drafts/keep" joins to a path inside the directory being renamed;
    // carrying on would move the directory into itself.
    assert!(!store.rename_directory(&original, "drafts/keep", TypeCheck::Enforce));

    assert!(!original.join("keep").exists(), "a refused rename must not create the target");
    assert_eq!(fs::read_to_string(original.join("a.txt")).unwrap(), "alpha");
}

#[test]
fn rename_rejects_missing_targets_and_files() {
    let (_td, store) = sandbox();

    assert!(!store.rename_directory(store.documents().join("gone"), "x", TypeCheck::Enforce));

    let file = store.documents().join("notes.txt");
    fs::write(&file, "x").unwrap();
    assert!(!store.rename_directory(&file, "renamed", TypeCheck::Enforce));
    assert!(file.is_file(), "a rejected rename leaves the file alone");
    assert!(!store.documents().join("renamed").exists());
}

//! Guided tour of the stowage surface against a throwaway sandbox.
//!
//! Run with: `cargo run --example tour`. Set `RUST_LOG=info` (or turn on
//! debug mode, as below) to watch the informational events.

use anyhow::{Context, Result};
use stowage::{RootSet, Stowage, TypeCheck};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    // A self-contained sandbox instead of the platform layout, so the tour
    // leaves no trace behind.
    let sandbox = tempfile::tempdir().context("create sandbox")?;
    let base = sandbox.path();
    std::fs::create_dir(base.join("resources"))?;
    std::fs::write(base.join("resources/example.txt"), "shipped asset\n")?;

    let mut store = Stowage::with_roots(RootSet {
        documents: base.join("documents"),
        resources: base.join("resources"),
        library: base.join("library"),
        temp: base.join("temp"),
    })
    .context("prepare roots")?;
    store.set_debug_mode(true);

    // Build out a documents subtree and pull the shipped asset into it.
    assert!(store.create_subdirectory("inbox", store.documents()));
    assert!(store.find_and_copy_file("example.txt", store.documents().join("inbox")));

    // The copy in documents now shadows the original in resources.
    let found = store.find_path("example.txt").context("locate example.txt")?;
    let bytes = store.retrieve_data(&found).context("read example.txt")?;
    println!("found {} ({} bytes)", found.display(), bytes.len());

    // Reorganize in place: inbox becomes archive.
    assert!(store.rename_directory(store.documents().join("inbox"), "archive", TypeCheck::Enforce));
    let archive = store.documents().join("archive");
    println!("archive holds {} entry(ies)", store.number_of_files(&archive));

    // The kind guard refuses a file operation on a directory...
    assert!(!store.delete_file(&archive, TypeCheck::Enforce));
    // ...and the directory operation takes it down.
    assert!(store.delete_directory(&archive, TypeCheck::Enforce));

    println!("tour complete");
    Ok(())
}

// src/fsops.rs

//! Filesystem primitives shared by the hooks
//!
//! Copies are plain and overwriting: no existing-file checks, so reruns with
//! unchanged sources produce byte-identical results. Removals tolerate
//! already-absent targets.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Copy a single file, creating parent directories as needed
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(source, target)?;
    debug!("Copied {} -> {}", source.display(), target.display());
    Ok(())
}

/// Recursively copy a directory tree, overwriting existing files
pub fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;

        let rel = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir entry outside its root");
        let dest = target.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }

    info!("Copied {} -> {}", source.display(), target.display());
    Ok(())
}

/// Remove a file if it exists
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
        info!("Removed file: {}", path.display());
    } else {
        debug!("File already absent: {}", path.display());
    }

    Ok(())
}

/// Remove a directory tree if it exists
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
        info!("Removed directory: {}", path.display());
    } else {
        debug!("Directory already absent: {}", path.display());
    }

    Ok(())
}

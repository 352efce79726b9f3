// src/hooks/prepare.rs

//! Prepare hook: fetch the upstream source into the cache package path

use crate::error::{Error, Result};
use crate::fsops;
use crate::layout::Layout;
use crate::manifest::Manifest;
use crate::runner::ToolRunner;
use std::fs;
use std::path::Path;
use tracing::info;

/// Clone the upstream repository and install the patched build descriptor
///
/// Any leftover source directory from a prior prepare is removed first, so a
/// re-prepare never mixes stale files into the fresh clone. The original
/// recipe's removal step never fired (it quoted the variable name instead of
/// its value); that behavior is deliberately not preserved.
pub fn run(manifest: &Manifest, layout: &Layout, runner: &dyn ToolRunner) -> Result<()> {
    let source_dir = layout.source_dir(manifest);

    fsops::remove_dir_if_exists(&source_dir)?;
    fs::create_dir_all(layout.cache_pkg())?;

    info!(
        "Cloning {} into {}",
        manifest.source.repository,
        source_dir.display()
    );
    let clone_dest = source_dir.to_string_lossy();
    runner.run(
        "git",
        &["clone", &manifest.source.repository, &clone_dest],
        layout.cache_pkg(),
    )?;

    // Overwrite the clone's build descriptor with the patched copy shipped
    // alongside the recipe.
    if !manifest.source.build_file_patch.is_empty() {
        let patch = Path::new(&manifest.source.build_file_patch);
        if !patch.exists() {
            return Err(Error::NotFound(format!(
                "Build descriptor patch not found: {}",
                patch.display()
            )));
        }

        let build_file = source_dir.join(&manifest.source.build_file);
        fsops::copy_file(patch, &build_file)?;
        info!("Patched build descriptor: {}", build_file.display());
    }

    Ok(())
}

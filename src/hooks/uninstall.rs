// src/hooks/uninstall.rs

//! Uninstall hook: remove the environment-root executable

use crate::error::Result;
use crate::fsops;
use crate::layout::Layout;
use crate::manifest::Manifest;
use tracing::info;

/// Remove what install placed
///
/// The default scope matches the original recipe: only the executable at the
/// environment root is removed, the artifacts under the local package path
/// stay. With `purge`, every install-time artifact is removed as well.
pub fn run(manifest: &Manifest, layout: &Layout, purge: bool) -> Result<()> {
    fsops::remove_file_if_exists(&layout.env_executable(manifest))?;

    if purge {
        let local_pkg = layout.local_pkg();

        fsops::remove_dir_if_exists(&local_pkg.join(&manifest.artifacts.environment))?;
        for dir in &manifest.artifacts.support_dirs {
            fsops::remove_dir_if_exists(&local_pkg.join(dir))?;
        }
        for file in &manifest.artifacts.files {
            fsops::remove_file_if_exists(&local_pkg.join(file))?;
        }

        info!("Purged {} from {}", manifest.package.name, local_pkg.display());
    }

    Ok(())
}

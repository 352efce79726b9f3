// src/hooks/build.rs

//! Build hook: isolated environment, declared dependencies, native build

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::manifest::Manifest;
use crate::runner::ToolRunner;
use tracing::info;

/// Create the isolated interpreter environment and run the native build
///
/// Always builds from scratch: the venv is (re)created, dependencies are
/// installed into it, then the build tool runs in the source directory.
pub fn run(manifest: &Manifest, layout: &Layout, runner: &dyn ToolRunner) -> Result<()> {
    let source_dir = layout.source_dir(manifest);

    if !source_dir.exists() {
        return Err(Error::NotFound(format!(
            "Source directory not found: {} (run the prepare hook first?)",
            source_dir.display()
        )));
    }

    info!("Creating isolated environment in {}", source_dir.display());
    runner.run(
        &manifest.build.python,
        &["-m", "venv", &manifest.artifacts.environment],
        &source_dir,
    )?;

    let pip = source_dir
        .join(&manifest.artifacts.environment)
        .join("bin/pip");
    runner.run(
        &pip.to_string_lossy(),
        &["install", "-r", &manifest.build.requirements],
        &source_dir,
    )?;

    info!("Running native build in {}", source_dir.display());
    runner.run(&manifest.build.make, &[], &source_dir)?;

    Ok(())
}

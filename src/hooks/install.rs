// src/hooks/install.rs

//! Install hook: copy built artifacts into the local package path

use crate::error::{Error, Result};
use crate::fsops;
use crate::layout::Layout;
use crate::manifest::Manifest;
use std::fs;
use tracing::info;

/// Copy the built artifacts from the cache package path into place
///
/// Verifies every source artifact first so a missing build aborts before any
/// copy happens. The copies themselves are purely additive and overwriting:
/// rerunning install with unchanged cache contents leaves identical files.
pub fn run(manifest: &Manifest, layout: &Layout) -> Result<()> {
    let source_dir = layout.source_dir(manifest);
    let local_pkg = layout.local_pkg();

    // Fail fast on anything the build did not produce
    let mut expected = vec![source_dir.join(&manifest.artifacts.environment)];
    for dir in &manifest.artifacts.support_dirs {
        expected.push(source_dir.join(dir));
    }
    for file in &manifest.artifacts.files {
        expected.push(source_dir.join(file));
    }
    expected.push(source_dir.join(&manifest.artifacts.executable));

    for path in &expected {
        if !path.exists() {
            return Err(Error::MissingArtifact(path.clone()));
        }
    }

    fs::create_dir_all(local_pkg)?;

    // Isolated environment and generated support directories
    fsops::copy_dir(
        &source_dir.join(&manifest.artifacts.environment),
        &local_pkg.join(&manifest.artifacts.environment),
    )?;
    for dir in &manifest.artifacts.support_dirs {
        fsops::copy_dir(&source_dir.join(dir), &local_pkg.join(dir))?;
    }

    // Generator script, binding script, shared library
    for file in &manifest.artifacts.files {
        fsops::copy_file(&source_dir.join(file), &local_pkg.join(file))?;
    }

    // Executable goes to the environment root
    let executable = layout.env_executable(manifest);
    fsops::copy_file(&source_dir.join(&manifest.artifacts.executable), &executable)?;

    info!(
        "Installed {} artifacts to {} (executable at {})",
        manifest.package.name,
        local_pkg.display(),
        executable.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Lay down a fake built source tree with every expected artifact
    fn populate_build(manifest: &Manifest, layout: &Layout) {
        let src = layout.source_dir(manifest);
        fs::create_dir_all(src.join(&manifest.artifacts.environment).join("bin")).unwrap();
        fs::write(
            src.join(&manifest.artifacts.environment).join("bin/pip"),
            "pip",
        )
        .unwrap();

        for dir in &manifest.artifacts.support_dirs {
            fs::create_dir_all(src.join(dir)).unwrap();
            fs::write(src.join(dir).join("shim.h"), "shim").unwrap();
        }
        for file in &manifest.artifacts.files {
            fs::write(src.join(file), format!("content of {}", file)).unwrap();
        }
        fs::write(src.join(&manifest.artifacts.executable), "elf").unwrap();
    }

    #[test]
    fn test_install_copies_everything() {
        let env = TempDir::new().unwrap();
        let manifest = Manifest::default();
        let layout = Layout::new(&env.path().to_string_lossy(), "cache/pkg", "local/pkg").unwrap();
        populate_build(&manifest, &layout);

        run(&manifest, &layout).unwrap();

        let local = layout.local_pkg();
        assert!(local.join("venv/bin/pip").exists());
        assert!(local.join("include-quickjs/shim.h").exists());
        assert!(local.join("include-ffi/shim.h").exists());
        assert!(local.join("autogen.py").exists());
        assert!(local.join("quickjs-ffi.js").exists());
        assert!(local.join("quickjs-ffi.so").exists());
        assert!(layout.env_executable(&manifest).exists());
    }

    #[test]
    fn test_install_is_idempotent() {
        let env = TempDir::new().unwrap();
        let manifest = Manifest::default();
        let layout = Layout::new(&env.path().to_string_lossy(), "cache/pkg", "local/pkg").unwrap();
        populate_build(&manifest, &layout);

        run(&manifest, &layout).unwrap();
        let first = fs::read(layout.local_pkg().join("quickjs-ffi.so")).unwrap();

        run(&manifest, &layout).unwrap();
        let second = fs::read(layout.local_pkg().join("quickjs-ffi.so")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_install_fails_fast_on_missing_shared_library() {
        let env = TempDir::new().unwrap();
        let manifest = Manifest::default();
        let layout = Layout::new(&env.path().to_string_lossy(), "cache/pkg", "local/pkg").unwrap();
        populate_build(&manifest, &layout);

        // Simulate a build that never produced the shared object
        fs::remove_file(layout.source_dir(&manifest).join("quickjs-ffi.so")).unwrap();

        let err = run(&manifest, &layout).unwrap_err();
        match err {
            Error::MissingArtifact(path) => {
                assert!(path.ends_with("quickjs-ffi.so"));
            }
            other => panic!("expected MissingArtifact, got {:?}", other),
        }

        // Fail-fast: nothing was copied
        assert!(!layout.local_pkg().exists() || fs::read_dir(layout.local_pkg()).unwrap().count() == 0);
        assert!(!layout.env_executable(&manifest).exists());
    }

    #[test]
    fn test_install_fails_fast_on_unbuilt_source() {
        let env = TempDir::new().unwrap();
        let manifest = Manifest::default();
        let layout = Layout::new(&env.path().to_string_lossy(), "cache/pkg", "local/pkg").unwrap();

        assert!(matches!(
            run(&manifest, &layout),
            Err(Error::MissingArtifact(_))
        ));
    }
}

// tests/common/mod.rs

//! Shared test utilities for recipe workflow tests.

use quickjs_ffi_recipe::{Layout, Manifest, Result, ToolRunner};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch environment with a manifest whose build-descriptor patch exists.
///
/// Returns (TempDir, manifest, layout) - keep the TempDir alive to prevent
/// cleanup.
pub fn setup_recipe_env() -> (TempDir, Manifest, Layout) {
    let temp_dir = tempfile::tempdir().unwrap();

    let patch = temp_dir.path().join("Makefile.patched");
    fs::write(&patch, "# patched build descriptor\nall:\n").unwrap();

    let mut manifest = Manifest::default();
    manifest.source.build_file_patch = patch.to_string_lossy().to_string();

    let layout = Layout::new(
        &temp_dir.path().to_string_lossy(),
        "cache/quickjs-ffi-pkg",
        "lib/quickjs-ffi-pkg",
    )
    .unwrap();

    (temp_dir, manifest, layout)
}

/// Fake tool runner that simulates what git/python/pip/make leave behind.
///
/// `git clone` creates the checkout, `python -m venv` the environment, and
/// `make` the full artifact set, so the whole prepare -> build -> install
/// pipeline runs without the real tools.
pub struct SimulatedTools {
    manifest: Manifest,
    pub calls: RefCell<Vec<String>>,
}

impl SimulatedTools {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            manifest: manifest.clone(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn simulate_clone(&self, dest: &Path) {
        fs::create_dir_all(dest).unwrap();
        fs::write(dest.join(&self.manifest.source.build_file), "upstream").unwrap();
        fs::write(dest.join(&self.manifest.build.requirements), "pycparser\n").unwrap();
    }

    fn simulate_venv(&self, workdir: &Path) {
        let bin = workdir.join(&self.manifest.artifacts.environment).join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("pip"), "#!/bin/sh\n").unwrap();
        fs::write(bin.join("python"), "#!/bin/sh\n").unwrap();
    }

    fn simulate_make(&self, workdir: &Path) {
        for dir in &self.manifest.artifacts.support_dirs {
            fs::create_dir_all(workdir.join(dir)).unwrap();
            fs::write(workdir.join(dir).join("shim.h"), "/* shim */").unwrap();
        }
        for file in &self.manifest.artifacts.files {
            fs::write(workdir.join(file), format!("built {}", file)).unwrap();
        }
        fs::write(workdir.join(&self.manifest.artifacts.executable), "elf").unwrap();
    }
}

impl ToolRunner for SimulatedTools {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));

        if program == "git" && args.first() == Some(&"clone") {
            let dest = args.last().expect("clone destination");
            self.simulate_clone(&PathBuf::from(dest));
        } else if args.first() == Some(&"-m") && args.get(1) == Some(&"venv") {
            self.simulate_venv(workdir);
        } else if program == self.manifest.build.make {
            self.simulate_make(workdir);
        }

        Ok(())
    }
}

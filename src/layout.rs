// src/layout.rs

//! Path triple handed to every lifecycle hook
//!
//! The dispatcher passes three locations with every invocation: the
//! environment root, the cache package path, and the local install package
//! path. The latter two are relative to the environment root; the layout
//! derives every absolute path the hooks touch by concatenation and never
//! mutates or persists any of them.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::path::{Path, PathBuf};

/// Filesystem layout for one logical recipe operation
#[derive(Debug, Clone)]
pub struct Layout {
    /// Environment root directory
    env_root: PathBuf,
    /// Cache package path (scratch area for clone and build)
    cache_pkg: PathBuf,
    /// Local package path (final install destination)
    local_pkg: PathBuf,
}

impl Layout {
    /// Build a layout from the raw path triple
    ///
    /// The caller guarantees the triple keeps a consistent meaning across the
    /// hooks of one logical operation; this only rejects empty components.
    pub fn new(env_root: &str, cache_pkg: &str, local_pkg: &str) -> Result<Self> {
        for (name, value) in [
            ("environment path", env_root),
            ("cache package path", cache_pkg),
            ("local package path", local_pkg),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidPath(format!("{} is empty", name)));
            }
        }

        let env_root = PathBuf::from(env_root);
        let cache_pkg = env_root.join(cache_pkg);
        let local_pkg = env_root.join(local_pkg);

        Ok(Self {
            env_root,
            cache_pkg,
            local_pkg,
        })
    }

    /// Environment root directory
    pub fn env_root(&self) -> &Path {
        &self.env_root
    }

    /// Absolute cache package path
    pub fn cache_pkg(&self) -> &Path {
        &self.cache_pkg
    }

    /// Absolute local install package path
    pub fn local_pkg(&self) -> &Path {
        &self.local_pkg
    }

    /// Directory the upstream repository is cloned into and built in
    pub fn source_dir(&self, manifest: &Manifest) -> PathBuf {
        self.cache_pkg.join(&manifest.package.name)
    }

    /// Executable placed at the environment root by install
    pub fn env_executable(&self, manifest: &Manifest) -> PathBuf {
        self.env_root.join(&manifest.artifacts.executable)
    }
}

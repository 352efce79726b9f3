// src/hooks/mod.rs

//! Lifecycle hooks: prepare, build, install, uninstall
//!
//! The dispatcher selects one hook per invocation and hands it the path
//! triple. Hooks run their external commands in order, stop at the first
//! failure, and print a one-line completion message to stdout.

mod build;
mod install;
mod prepare;
mod uninstall;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::manifest::Manifest;
use crate::runner::ToolRunner;
use std::fmt;
use tracing::info;

/// The four lifecycle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Prepare,
    Build,
    Install,
    Uninstall,
}

impl Hook {
    /// Parse a hook name, rejecting anything outside the four known hooks
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "prepare" => Ok(Self::Prepare),
            "build" => Ok(Self::Build),
            "install" => Ok(Self::Install),
            "uninstall" => Ok(Self::Uninstall),
            other => Err(Error::UnknownHook(other.to_string())),
        }
    }

    /// Hook name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Build => "build",
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs lifecycle hooks for one manifest against one path triple
pub struct Executor<'a> {
    manifest: &'a Manifest,
    layout: &'a Layout,
    runner: &'a dyn ToolRunner,
    purge: bool,
}

impl<'a> Executor<'a> {
    /// Create an executor with the default uninstall scope
    pub fn new(manifest: &'a Manifest, layout: &'a Layout, runner: &'a dyn ToolRunner) -> Self {
        Self {
            manifest,
            layout,
            runner,
            purge: false,
        }
    }

    /// Make uninstall mirror every install-time artifact
    pub fn with_purge(mut self, purge: bool) -> Self {
        self.purge = purge;
        self
    }

    /// Run a single hook to completion
    ///
    /// The first failing step aborts the hook; nothing is retried or rolled
    /// back. On success the completion line is printed to stdout.
    pub fn run(&self, hook: Hook) -> Result<()> {
        info!(
            "Running {} hook for {} v{}",
            hook, self.manifest.package.name, self.manifest.package.version
        );

        match hook {
            Hook::Prepare => prepare::run(self.manifest, self.layout, self.runner)?,
            Hook::Build => build::run(self.manifest, self.layout, self.runner)?,
            Hook::Install => install::run(self.manifest, self.layout)?,
            Hook::Uninstall => uninstall::run(self.manifest, self.layout, self.purge)?,
        }

        println!(
            "{}: {} {} complete",
            hook, self.manifest.package.name, self.manifest.package.version
        );

        Ok(())
    }
}

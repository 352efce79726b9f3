// src/runner.rs

//! External tool execution
//!
//! Every hook sequences external commands (git, python, make) through the
//! [`ToolRunner`] trait. The production [`SystemRunner`] runs them blocking
//! and synchronous: each command completes before the next begins, the first
//! non-zero exit aborts the hook, and no timeout is applied; the invoked
//! tools' own exit behavior is relied on entirely.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

/// Seam for running external commands
pub trait ToolRunner {
    /// Run `program` with `args` in `workdir`, failing on a non-zero exit
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<()>;
}

/// Blocking runner backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<()> {
        debug!("Running: {} {} (in {})", program, args.join(" "), workdir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| Error::CommandSpawn {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines() {
            info!("[{}] {}", program, line);
        }
        for line in stderr.lines() {
            warn!("[{}] {}", program, line);
        }

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                code: output.status.code(),
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(())
    }
}

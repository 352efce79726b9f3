// src/error.rs

//! Error types for the recipe executor

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a lifecycle hook
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from filesystem operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or validate a manifest
    #[error("Manifest error: {0}")]
    Parse(String),

    /// An external command exited with a non-zero status
    #[error("{program} failed with exit code {code:?}: {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external command could not be spawned at all
    #[error("Failed to run {program}: {reason}")]
    CommandSpawn { program: String, reason: String },

    /// A required file or directory does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A build artifact expected in the cache package path is missing
    #[error("Missing build artifact: {0} (run the build hook first?)")]
    MissingArtifact(PathBuf),

    /// The hook name is not one of prepare/build/install/uninstall
    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    /// A path triple component was empty or otherwise unusable
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

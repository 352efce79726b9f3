// src/lib.rs

//! quickjs-ffi package recipe executor
//!
//! Sequences the lifecycle of the quickjs-ffi native addon inside a managed
//! environment: clone and patch the upstream source (prepare), build it in an
//! isolated interpreter environment (build), copy the artifacts into place
//! (install), and remove the environment-root executable (uninstall).
//!
//! # Architecture
//!
//! - Manifest-driven: package identity, upstream URL, and artifact set live in
//!   an explicit [`manifest::Manifest`], not in ambient globals
//! - Hooks are an enumerated type with exhaustive dispatch
//! - External tools run through the [`runner::ToolRunner`] seam, blocking and
//!   in order; the first failure aborts the hook

mod error;
pub mod fsops;
pub mod hooks;
pub mod layout;
pub mod manifest;
pub mod runner;

pub use error::{Error, Result};
pub use hooks::{Executor, Hook};
pub use layout::Layout;
pub use manifest::{Manifest, load_manifest, parse_manifest, validate_manifest};
pub use runner::{SystemRunner, ToolRunner};

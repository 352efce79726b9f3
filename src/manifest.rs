// src/manifest.rs

//! Recipe manifest: package identity, upstream source, and artifact set
//!
//! The manifest replaces the ambient script variables of the original recipe
//! with an explicit configuration struct. The compiled-in default describes
//! the quickjs-ffi package; a TOML file with the same shape can override it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete recipe manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Package identity, fixed at load time, used for logging and messages
    pub package: PackageSection,

    /// Upstream source location and local build-descriptor patch
    pub source: SourceSection,

    /// Tools invoked by the build hook
    #[serde(default)]
    pub build: BuildSection,

    /// Artifacts produced by build and placed by install
    #[serde(default)]
    pub artifacts: ArtifactSection,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            package: PackageSection {
                name: "quickjs-ffi".to_string(),
                version: "0.1.0".to_string(),
            },
            source: SourceSection::default(),
            build: BuildSection::default(),
            artifacts: ArtifactSection::default(),
        }
    }
}

/// Package identity section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,
}

/// Upstream source section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    /// Git repository the prepare hook clones from
    pub repository: String,

    /// Build descriptor inside the clone that gets replaced
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Locally supplied patched build descriptor, relative to the recipe root
    #[serde(default = "default_build_file_patch")]
    pub build_file_patch: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            repository: "https://github.com/quickjs-ffi/quickjs-ffi.git".to_string(),
            build_file: default_build_file(),
            build_file_patch: default_build_file_patch(),
        }
    }
}

fn default_build_file() -> String {
    "Makefile".to_string()
}

fn default_build_file_patch() -> String {
    "patches/Makefile".to_string()
}

/// Build tool section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Interpreter used to create the isolated environment
    #[serde(default = "default_python")]
    pub python: String,

    /// Requirements manifest installed into the isolated environment
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// Native build tool invoked inside the source directory
    #[serde(default = "default_make")]
    pub make: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            python: default_python(),
            requirements: default_requirements(),
            make: default_make(),
        }
    }
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_make() -> String {
    "make".to_string()
}

/// Artifact set section
///
/// Everything the install hook copies out of the cache package path, plus the
/// single executable placed at the environment root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSection {
    /// Isolated interpreter environment directory
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Generated header-shim directories
    #[serde(default = "default_support_dirs")]
    pub support_dirs: Vec<String>,

    /// Generated files: generator script, binding script, shared library
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Executable copied into the environment root
    #[serde(default = "default_executable")]
    pub executable: String,
}

impl Default for ArtifactSection {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            support_dirs: default_support_dirs(),
            files: default_files(),
            executable: default_executable(),
        }
    }
}

fn default_environment() -> String {
    "venv".to_string()
}

fn default_support_dirs() -> Vec<String> {
    vec!["include-quickjs".to_string(), "include-ffi".to_string()]
}

fn default_files() -> Vec<String> {
    vec![
        "autogen.py".to_string(),
        "quickjs-ffi.js".to_string(),
        "quickjs-ffi.so".to_string(),
    ]
}

fn default_executable() -> String {
    "qjs".to_string()
}

impl Manifest {
    /// The shared library among the generated files, if one is listed
    pub fn shared_library(&self) -> Option<&str> {
        self.artifacts
            .files
            .iter()
            .map(|f| f.as_str())
            .find(|f| f.ends_with(".so"))
    }
}

/// Parse a manifest from a TOML string
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    toml::from_str(content).map_err(|e| Error::Parse(format!("Invalid manifest: {}", e)))
}

/// Parse a manifest from a file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Parse(format!("Failed to read manifest {}: {}", path.display(), e)))?;

    parse_manifest(&content)
}

/// Validate a manifest for completeness
///
/// Hard errors for fields every hook depends on; warnings for fields that only
/// degrade a subset of the hooks.
pub fn validate_manifest(manifest: &Manifest) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if manifest.package.name.is_empty() {
        return Err(Error::Parse("Package name cannot be empty".to_string()));
    }
    if manifest.package.version.is_empty() {
        return Err(Error::Parse("Package version cannot be empty".to_string()));
    }
    if manifest.source.repository.is_empty() {
        return Err(Error::Parse("Source repository cannot be empty".to_string()));
    }
    if manifest.artifacts.executable.is_empty() {
        return Err(Error::Parse(
            "Environment-root executable name cannot be empty".to_string(),
        ));
    }

    if manifest.source.build_file_patch.is_empty() {
        warnings.push("No build descriptor patch; prepare will keep the upstream one".to_string());
    }
    if manifest.artifacts.files.is_empty() {
        warnings.push("No generated files listed; install will only copy directories".to_string());
    }
    if manifest.shared_library().is_none() {
        warnings.push("No shared library among the generated files".to_string());
    }

    Ok(warnings)
}

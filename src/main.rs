// src/main.rs

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quickjs_ffi_recipe::{
    Executor, Hook, Layout, Manifest, SystemRunner, load_manifest, validate_manifest,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "quickjs-ffi-recipe")]
#[command(version)]
#[command(about = "Lifecycle hooks for the quickjs-ffi package recipe", long_about = None)]
struct Cli {
    /// Manifest file overriding the compiled-in quickjs-ffi recipe
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Path triple every hook receives from the dispatcher
#[derive(Args)]
struct PathTriple {
    /// Environment root directory
    env_path: String,

    /// Cache package path, relative to the environment root
    cache_path: String,

    /// Local install package path, relative to the environment root
    local_path: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the upstream source and patch its build descriptor
    Prepare {
        #[command(flatten)]
        paths: PathTriple,
    },

    /// Create the isolated environment and run the native build
    Build {
        #[command(flatten)]
        paths: PathTriple,
    },

    /// Copy the built artifacts into the local package path
    Install {
        #[command(flatten)]
        paths: PathTriple,
    },

    /// Remove the executable placed at the environment root
    Uninstall {
        #[command(flatten)]
        paths: PathTriple,

        /// Also remove every artifact install placed under the local package path
        #[arg(long)]
        purge: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let manifest = match &cli.manifest {
        Some(path) => load_manifest(path)
            .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
        None => Manifest::default(),
    };

    let warnings = validate_manifest(&manifest).context("Manifest validation failed")?;
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    info!(
        "Recipe: {} version {}",
        manifest.package.name, manifest.package.version
    );

    let (hook, paths, purge) = match &cli.command {
        Commands::Prepare { paths } => (Hook::Prepare, paths, false),
        Commands::Build { paths } => (Hook::Build, paths, false),
        Commands::Install { paths } => (Hook::Install, paths, false),
        Commands::Uninstall { paths, purge } => (Hook::Uninstall, paths, *purge),
    };

    let layout = Layout::new(&paths.env_path, &paths.cache_path, &paths.local_path)
        .context("Invalid path triple")?;

    let runner = SystemRunner::new();
    Executor::new(&manifest, &layout, &runner)
        .with_purge(purge)
        .run(hook)
        .with_context(|| format!("{} hook failed for {}", hook, manifest.package.name))?;

    Ok(())
}

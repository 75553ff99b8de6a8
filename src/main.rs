//! Droidpatch - Android build-configuration patcher.
//!
//! Patches the generated Android project of the WebView shell app before
//! packaging:
//! - strips unused permissions from the manifest
//! - forces security attributes on the application node
//! - pins min/target SDK versions
//! - disables WebView remote debugging in the bootstrap source
//! - adds the JitPack repository to the project build script

mod commands;
mod config;
mod manifest;
mod patcher;
mod project;
mod report;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser)]
#[command(name = "droidpatch")]
#[command(about = "Patches generated Android project files before packaging")]
#[command(
    after_help = "QUICK START:\n  droidpatch check        See what would change\n  droidpatch patch        Apply all patches\n  droidpatch show report  Inspect the last run"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the build-configuration patches
    Patch {
        #[command(subcommand)]
        target: Option<PatchTarget>,
    },

    /// Dry run: report pending patches without writing anything
    Check {
        /// Fail if any patch is pending (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Remove the patch report output directory
    Clean,
}

#[derive(Subcommand)]
enum PatchTarget {
    /// Manifest patches only (permissions, security flags, SDK versions)
    Manifest,
    /// Bootstrap source patches only (WebView debug disable)
    Sources,
    /// Build script patches only (Maven repository)
    Gradle,
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the last patch report
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir().context("Failed to resolve working directory")?;

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Patch { target } => {
            let patch_target = match target {
                None => patcher::PatchTarget::All,
                Some(PatchTarget::Manifest) => patcher::PatchTarget::Manifest,
                Some(PatchTarget::Sources) => patcher::PatchTarget::Sources,
                Some(PatchTarget::Gradle) => patcher::PatchTarget::Gradle,
            };
            commands::cmd_patch(&config, patch_target)?;
        }

        Commands::Check { strict } => {
            commands::cmd_check(&config, strict)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Report => commands::show::ShowTarget::Report,
            };
            commands::cmd_show(&config, show_target)?;
        }

        Commands::Clean => {
            commands::cmd_clean(&config)?;
        }
    }

    Ok(())
}

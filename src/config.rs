//! Configuration management for droidpatch.
//!
//! Reads configuration from environment variables. A `.env` file in the
//! invocation directory is merged in by `main` before loading; real
//! environment variables take precedence.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name of the generated Android project, relative to the base dir.
pub const DEFAULT_PROJECT_DIR: &str = "android";

/// Directory name for the patch report, relative to the base dir.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Droidpatch configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the generated Android project to patch.
    pub project_dir: PathBuf,
    /// Directory the patch report is written to.
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `DROIDPATCH_PROJECT_DIR` and `DROIDPATCH_OUTPUT_DIR` override the
    /// defaults; relative values are resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Self {
        Self {
            project_dir: resolve_dir(base_dir, "DROIDPATCH_PROJECT_DIR", DEFAULT_PROJECT_DIR),
            output_dir: resolve_dir(base_dir, "DROIDPATCH_OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
        }
    }

    /// Check if the project root exists on disk.
    pub fn has_project(&self) -> bool {
        self.project_dir.is_dir()
    }

    /// Path of the patch report file.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("patch-report.json")
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  DROIDPATCH_PROJECT_DIR: {}", self.project_dir.display());
        println!("  DROIDPATCH_OUTPUT_DIR: {}", self.output_dir.display());
        println!("  Report file: {}", self.report_path().display());
        if self.has_project() {
            println!("  Android project: FOUND");
        } else {
            println!("  Android project: NOT FOUND (run the project generator first)");
        }
    }
}

fn resolve_dir(base_dir: &Path, var: &str, default: &str) -> PathBuf {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    let path = PathBuf::from(value);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

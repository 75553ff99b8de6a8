//! Locating patch targets inside a generated Android project.
//!
//! The generator lays the project out in the usual Gradle shape; the patch
//! targets are found by walking that tree rather than hardcoding module
//! names, since the application module is renamed per brand.

use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Resolved paths of the files the patcher operates on.
#[derive(Debug, Clone)]
pub struct AndroidProject {
    /// Project root the paths were discovered under.
    pub root: PathBuf,
    /// Main manifest (`**/src/main/AndroidManifest.xml`).
    pub manifest: PathBuf,
    /// Top-level project build script (`build.gradle`).
    pub project_build_script: PathBuf,
    /// Application bootstrap source (`MainApplication.java`/`.kt`), if the
    /// generator produced one.
    pub bootstrap_source: Option<PathBuf>,
}

impl AndroidProject {
    /// Discover the patch targets under a generated project root.
    ///
    /// The walk skips `build/`, `.gradle/`, and hidden directories, and is
    /// sorted so repeated runs resolve the same files. A project without a
    /// main manifest or top-level build script is not a generated Android
    /// project, and that is an error; a missing bootstrap source only
    /// downgrades the WebView-debug patch to a skip.
    pub fn locate(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!(
                "Android project not found at {} (run the project generator first)",
                root.display()
            );
        }

        let mut manifest = None;
        let mut bootstrap_source = None;
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(keep_entry)
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
        {
            let path = entry.path();
            if !in_src_main(path) {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some("AndroidManifest.xml") if manifest.is_none() => {
                    manifest = Some(path.to_path_buf());
                }
                Some("MainApplication.java" | "MainApplication.kt")
                    if bootstrap_source.is_none() =>
                {
                    bootstrap_source = Some(path.to_path_buf());
                }
                _ => {}
            }
        }

        let manifest = match manifest {
            Some(path) => path,
            None => bail!(
                "No src/main/AndroidManifest.xml found under {}",
                root.display()
            ),
        };

        let project_build_script = root.join("build.gradle");
        if !project_build_script.is_file() {
            bail!("No build.gradle found at {}", project_build_script.display());
        }

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            project_build_script,
            bootstrap_source,
        })
    }
}

/// Skip build output, Gradle caches, and hidden directories.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    match entry.file_name().to_str() {
        Some(name) => name != "build" && !name.starts_with('.'),
        None => false,
    }
}

/// Whether a path sits under a `src/main/` directory.
fn in_src_main(path: &Path) -> bool {
    let components: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    components.windows(2).any(|w| w == ["src", "main"])
}

//! The patch pipeline: read, transform, write back, record.
//!
//! Transforms themselves are pure functions over a document or text; every
//! piece of file I/O lives here. Files are rewritten only when a transform
//! actually changed them, so a second run over a patched project touches
//! nothing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::manifest::{
    apply_sdk_versions, apply_security_flags, strip_blocked_permissions, ManifestDocument,
    PermissionDenylist, SdkVersions, SecurityFlags,
};
use crate::project::AndroidProject;
use crate::report::{sha256_hex, PatchEntry, PatchReport, PatchStatus};
use crate::script::{
    disable_webview_debugging, inject_maven_repository, DebugDisabler, RepositoryInjection,
    DEBUG_GUARD_MARKER,
};

/// Fixed values for every patch, bundled for one run.
///
/// Defaults are the shipped production configuration; tests override
/// individual fields.
#[derive(Debug, Clone, Default)]
pub struct PatchConfig {
    /// Permission names stripped from the manifest.
    pub permissions: PermissionDenylist,
    /// Attributes forced onto the application node.
    pub security: SecurityFlags,
    /// Pinned platform versions.
    pub sdk: SdkVersions,
    /// WebView debug kill switch.
    pub debug: DebugDisabler,
    /// Extra Maven repository.
    pub repository: RepositoryInjection,
}

/// Which group of patches to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    /// Everything (the default).
    All,
    /// Manifest patches only.
    Manifest,
    /// Bootstrap source patches only.
    Sources,
    /// Build script patches only.
    Gradle,
}

impl PatchTarget {
    fn manifest(self) -> bool {
        matches!(self, Self::All | Self::Manifest)
    }

    fn sources(self) -> bool {
        matches!(self, Self::All | Self::Sources)
    }

    fn gradle(self) -> bool {
        matches!(self, Self::All | Self::Gradle)
    }
}

/// Run the selected patches over a located project.
///
/// With `dry_run` set, everything is computed but no file is written; the
/// returned report then describes what a real run would do.
pub fn patch_project(
    project: &AndroidProject,
    config: &PatchConfig,
    target: PatchTarget,
    dry_run: bool,
) -> Result<PatchReport> {
    let verb = if dry_run { "Checking" } else { "Patching" };
    println!("{} Android project at {}...", verb, project.root.display());

    let mut report = PatchReport::new(&project.root);
    if target.manifest() {
        patch_manifest(project, config, dry_run, &mut report)?;
    }
    if target.sources() {
        patch_bootstrap_source(project, config, dry_run, &mut report)?;
    }
    if target.gradle() {
        patch_build_script(project, config, dry_run, &mut report)?;
    }

    let applied = report.pending().count();
    let total = report.entries.len();
    println!(
        "  {} of {} patches {}",
        applied,
        total,
        if dry_run { "pending" } else { "applied" }
    );
    Ok(report)
}

/// Apply the three manifest transforms and rewrite the file if any changed it.
fn patch_manifest(
    project: &AndroidProject,
    config: &PatchConfig,
    dry_run: bool,
    report: &mut PatchReport,
) -> Result<()> {
    let path = &project.manifest;
    let rel = relative_name(path, &project.root);
    println!("  Manifest: {}", rel);

    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut doc = ManifestDocument::parse(&original)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // Track the text each transform starts from so entries carry exact
    // before/after digests.
    let mut current = original.clone();

    let removed = strip_blocked_permissions(&mut doc, &config.permissions);
    let (status, detail) = if removed > 0 {
        (
            PatchStatus::Applied,
            format!("removed {} denylisted permission entries", removed),
        )
    } else {
        (
            PatchStatus::AlreadyApplied,
            "no denylisted permissions present".to_string(),
        )
    };
    record(report, "manifest-permissions", &rel, status, detail, &mut current, &doc);

    let snapshot = doc.root.clone();
    let (status, detail) = if !apply_security_flags(&mut doc, &config.security) {
        (
            PatchStatus::Skipped,
            "manifest has no application node".to_string(),
        )
    } else if doc.root != snapshot {
        (
            PatchStatus::Applied,
            "forced security attributes on application node".to_string(),
        )
    } else {
        (
            PatchStatus::AlreadyApplied,
            "security attributes already set".to_string(),
        )
    };
    record(report, "manifest-security-flags", &rel, status, detail, &mut current, &doc);

    let snapshot = doc.root.clone();
    apply_sdk_versions(&mut doc, &config.sdk);
    let (status, detail) = if doc.root != snapshot {
        (
            PatchStatus::Applied,
            format!(
                "pinned minSdkVersion={} targetSdkVersion={}",
                config.sdk.min_sdk, config.sdk.target_sdk
            ),
        )
    } else {
        (
            PatchStatus::AlreadyApplied,
            "sdk versions already pinned".to_string(),
        )
    };
    record(report, "manifest-sdk-versions", &rel, status, detail, &mut current, &doc);

    if current != original && !dry_run {
        fs::write(path, &current)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Push a manifest entry, re-rendering the document when this step changed it.
fn record(
    report: &mut PatchReport,
    patch: &str,
    file: &str,
    status: PatchStatus,
    detail: String,
    current: &mut String,
    doc: &ManifestDocument,
) {
    let before = sha256_hex(current.as_bytes());
    if status == PatchStatus::Applied {
        *current = doc.to_xml();
    }
    report.entries.push(PatchEntry {
        patch: patch.to_string(),
        file: file.to_string(),
        status,
        detail,
        sha256_before: before,
        sha256_after: sha256_hex(current.as_bytes()),
    });
}

/// Insert the WebView debug guard into the bootstrap source.
fn patch_bootstrap_source(
    project: &AndroidProject,
    config: &PatchConfig,
    dry_run: bool,
    report: &mut PatchReport,
) -> Result<()> {
    let path = match &project.bootstrap_source {
        Some(path) => path,
        None => {
            println!("  Warning: no MainApplication source found, WebView debug patch skipped");
            report.entries.push(PatchEntry {
                patch: "webview-debug-disable".to_string(),
                file: "(not found)".to_string(),
                status: PatchStatus::Skipped,
                detail: "no MainApplication.java or MainApplication.kt under src/main".to_string(),
                sha256_before: String::new(),
                sha256_after: String::new(),
            });
            return Ok(());
        }
    };
    let rel = relative_name(path, &project.root);
    println!("  Bootstrap source: {}", rel);

    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (status, detail, output) = if original.contains(DEBUG_GUARD_MARKER) {
        (
            PatchStatus::AlreadyApplied,
            "debug guard already present".to_string(),
            original.clone(),
        )
    } else {
        let output = disable_webview_debugging(&original, &config.debug);
        if output == original {
            (
                PatchStatus::Skipped,
                "initialization anchor not found".to_string(),
                output,
            )
        } else {
            (
                PatchStatus::Applied,
                "inserted guarded WebView debug disable".to_string(),
                output,
            )
        }
    };

    if status == PatchStatus::Applied && !dry_run {
        fs::write(path, &output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    report.entries.push(PatchEntry {
        patch: "webview-debug-disable".to_string(),
        file: rel,
        status,
        detail,
        sha256_before: sha256_hex(original.as_bytes()),
        sha256_after: sha256_hex(output.as_bytes()),
    });
    Ok(())
}

/// Inject the Maven repository into the project build script.
fn patch_build_script(
    project: &AndroidProject,
    config: &PatchConfig,
    dry_run: bool,
    report: &mut PatchReport,
) -> Result<()> {
    let path = &project.project_build_script;
    let rel = relative_name(path, &project.root);
    println!("  Build script: {}", rel);

    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (status, detail, output) = if original.contains(&config.repository.url) {
        (
            PatchStatus::AlreadyApplied,
            format!("{} already listed", config.repository.url),
            original.clone(),
        )
    } else {
        let output = inject_maven_repository(&original, &config.repository);
        if output == original {
            (
                PatchStatus::Skipped,
                "no repositories block found".to_string(),
                output,
            )
        } else {
            (
                PatchStatus::Applied,
                format!("added maven repository {}", config.repository.url),
                output,
            )
        }
    };

    if status == PatchStatus::Applied && !dry_run {
        fs::write(path, &output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    report.entries.push(PatchEntry {
        patch: "gradle-maven-repository".to_string(),
        file: rel,
        status,
        detail,
        sha256_before: sha256_hex(original.as_bytes()),
        sha256_after: sha256_hex(output.as_bytes()),
    });
    Ok(())
}

fn relative_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

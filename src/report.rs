//! Machine-readable record of a patch run.
//!
//! The report is what the packaging pipeline checks after invoking the
//! patcher: one entry per (file, patch) with the outcome and content digests.
//! `check` builds the same report without touching any file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Outcome of one patch against one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchStatus {
    /// The file content changed.
    Applied,
    /// The patch found its own earlier output and left the file alone.
    AlreadyApplied,
    /// The patch could not be applied (missing anchor or target).
    Skipped,
}

/// One patch applied to one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchEntry {
    /// Patch identifier (e.g. `manifest-permissions`).
    pub patch: String,
    /// Target file, relative to the project root where possible.
    pub file: String,
    /// Outcome.
    pub status: PatchStatus,
    /// Human-readable summary of what happened.
    pub detail: String,
    /// SHA256 of the file content before the patch.
    pub sha256_before: String,
    /// SHA256 of the file content after the patch.
    pub sha256_after: String,
}

/// Full record of a patch or check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    /// Timestamp of the run (ISO 8601, UTC).
    pub generated_at: String,
    /// Project root the run operated on.
    pub project_root: String,
    /// Per-patch outcomes in application order.
    pub entries: Vec<PatchEntry>,
}

impl PatchReport {
    /// Create an empty report for a project.
    pub fn new(project_root: &Path) -> Self {
        Self {
            generated_at: chrono_lite_now(),
            project_root: project_root.display().to_string(),
            entries: Vec::new(),
        }
    }

    /// Entries that did or would change a file.
    pub fn pending(&self) -> impl Iterator<Item = &PatchEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == PatchStatus::Applied)
    }

    /// Save report to pretty JSON, creating the output directory as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read report from {}", path.as_ref().display()))?;
        let report: Self = serde_json::from_str(&json)?;
        Ok(report)
    }

    /// Print a one-line-per-entry summary.
    pub fn print(&self) {
        println!("Patch report for {}", self.project_root);
        println!("  Generated at: {}", self.generated_at);
        for entry in &self.entries {
            let status = match entry.status {
                PatchStatus::Applied => "applied",
                PatchStatus::AlreadyApplied => "already applied",
                PatchStatus::Skipped => "skipped",
            };
            println!("  [{:>15}] {} on {}: {}", status, entry.patch, entry.file, entry.detail);
        }
    }
}

/// SHA256 of in-memory content, lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Get current timestamp in ISO 8601 format (minimal implementation).
fn chrono_lite_now() -> String {
    // Use date command for simplicity
    let output = std::process::Command::new("date")
        .arg("-u")
        .arg("+%Y-%m-%dT%H:%M:%SZ")
        .output()
        .ok();

    output
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

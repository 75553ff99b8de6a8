//! Patch command - applies the build-configuration patches.

use anyhow::Result;

use crate::config::Config;
use crate::patcher::{patch_project, PatchConfig, PatchTarget};
use crate::project::AndroidProject;

/// Execute the patch command.
pub fn cmd_patch(config: &Config, target: PatchTarget) -> Result<()> {
    let project = AndroidProject::locate(&config.project_dir)?;
    let report = patch_project(&project, &PatchConfig::default(), target, false)?;
    report.save(config.report_path())?;
    println!("  Report written to {}", config.report_path().display());
    Ok(())
}

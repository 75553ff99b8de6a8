//! Check command - dry run over the generated project.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::patcher::{patch_project, PatchConfig, PatchTarget};
use crate::project::AndroidProject;

/// Execute the check command.
///
/// Computes the full report without writing any file. With `strict`, pending
/// patches fail the command so CI can gate on an unpatched project.
pub fn cmd_check(config: &Config, strict: bool) -> Result<()> {
    let project = AndroidProject::locate(&config.project_dir)?;
    let report = patch_project(&project, &PatchConfig::default(), PatchTarget::All, true)?;
    report.print();

    let pending = report.pending().count();
    if strict && pending > 0 {
        bail!("{} patches pending. Run 'droidpatch patch' to apply them.", pending);
    }
    Ok(())
}

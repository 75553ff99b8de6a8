//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::report::PatchReport;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the last patch report
    Report,
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Report => {
            let path = config.report_path();
            if !path.exists() {
                anyhow::bail!("No patch report found. Run 'droidpatch patch' first.");
            }
            PatchReport::load(&path)?.print();
        }
    }
    Ok(())
}

//! Clean command - removes patcher output.

use anyhow::{Context, Result};
use std::fs;

use crate::config::Config;

/// Execute the clean command.
///
/// Removes the output directory (the patch report). The patched project
/// files themselves are regenerated by the project generator, not restored
/// here.
pub fn cmd_clean(config: &Config) -> Result<()> {
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir)
            .with_context(|| format!("Failed to remove {}", config.output_dir.display()))?;
        println!("Removed {}", config.output_dir.display());
    } else {
        println!("Nothing to clean.");
    }
    Ok(())
}

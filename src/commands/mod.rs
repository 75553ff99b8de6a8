//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `patch` - Apply build-configuration patches
//! - `check` - Dry run, report pending patches
//! - `show` - Display information
//! - `clean` - Remove patcher output

pub mod check;
pub mod clean;
pub mod patch;
pub mod show;

pub use check::cmd_check;
pub use clean::cmd_clean;
pub use patch::cmd_patch;
pub use show::cmd_show;

//! Text transforms for generated scripts and sources.
//!
//! Unlike the manifest transforms these work on opaque text: each one
//! searches for an anchor pattern and splices a fixed snippet in after it.
//! Both are idempotent and degrade to a no-op when the anchor is missing.

pub mod repositories;
pub mod webview_debug;

pub use repositories::{inject_maven_repository, RepositoryInjection, REPOSITORIES_ANCHOR};
pub use webview_debug::{
    disable_webview_debugging, DebugDisabler, DEBUG_GUARD_MARKER, ON_CREATE_ANCHOR,
};

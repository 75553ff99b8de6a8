//! Tests for environment-driven configuration.
//!
//! These mutate process environment variables, so they run serially.

use droidpatch::config::Config;
use serial_test::serial;
use std::env;
use std::path::Path;

fn clear_droidpatch_env() {
    env::remove_var("DROIDPATCH_PROJECT_DIR");
    env::remove_var("DROIDPATCH_OUTPUT_DIR");
}

#[test]
#[serial]
fn test_defaults_resolve_against_base_dir() {
    clear_droidpatch_env();
    let base = Path::new("/work/shell-app");
    let config = Config::load(base);

    assert_eq!(config.project_dir, base.join("android"));
    assert_eq!(config.output_dir, base.join("output"));
    assert_eq!(
        config.report_path(),
        base.join("output/patch-report.json")
    );
}

#[test]
#[serial]
fn test_relative_overrides_resolve_against_base_dir() {
    clear_droidpatch_env();
    env::set_var("DROIDPATCH_PROJECT_DIR", "generated/android");
    let config = Config::load(Path::new("/work/shell-app"));
    assert_eq!(
        config.project_dir,
        Path::new("/work/shell-app/generated/android")
    );
    clear_droidpatch_env();
}

#[test]
#[serial]
fn test_absolute_overrides_are_taken_as_is() {
    clear_droidpatch_env();
    env::set_var("DROIDPATCH_PROJECT_DIR", "/ci/checkout/android");
    env::set_var("DROIDPATCH_OUTPUT_DIR", "/ci/artifacts");
    let config = Config::load(Path::new("/work/shell-app"));

    assert_eq!(config.project_dir, Path::new("/ci/checkout/android"));
    assert_eq!(config.output_dir, Path::new("/ci/artifacts"));
    clear_droidpatch_env();
}

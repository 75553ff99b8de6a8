//! Tests for the script/source text transforms.
//!
//! The anchor patterns track the project generator's output format, so their
//! exact match semantics are pinned here alongside the transform behavior.

mod helpers;

use droidpatch::script::{
    disable_webview_debugging, inject_maven_repository, DebugDisabler, RepositoryInjection,
    DEBUG_GUARD_MARKER, ON_CREATE_ANCHOR, REPOSITORIES_ANCHOR,
};
use helpers::{GENERATED_BUILD_GRADLE, GENERATED_MAIN_APPLICATION};
use regex::Regex;

// =============================================================================
// Anchor pattern pins
// =============================================================================

#[test]
fn test_on_create_anchor_matches_generated_bootstrap() {
    let anchor = Regex::new(ON_CREATE_ANCHOR).unwrap();
    let m = anchor
        .find(GENERATED_MAIN_APPLICATION)
        .expect("anchor matches generated bootstrap");

    // The match runs from the onCreate definition through the superclass call.
    assert!(m.as_str().starts_with("onCreate()"));
    assert!(m.as_str().ends_with("super.onCreate();"));
}

#[test]
fn test_on_create_anchor_stops_at_first_super_call() {
    let anchor = Regex::new(ON_CREATE_ANCHOR).unwrap();
    let source = "void onCreate() {\n  super.onCreate(savedState);\n  super.onCreate();\n}";
    let m = anchor.find(source).unwrap();
    assert!(m.as_str().ends_with("super.onCreate(savedState);"));
}

#[test]
fn test_repositories_anchor_tolerates_spacing() {
    let anchor = Regex::new(REPOSITORIES_ANCHOR).unwrap();
    assert!(anchor.is_match("repositories {"));
    assert!(anchor.is_match("repositories{"));
    assert!(anchor.is_match("repositories  {"));
    assert!(!anchor.is_match("repositories ="));
}

// =============================================================================
// WebView debug disabler tests
// =============================================================================

#[test]
fn test_debug_guard_inserted_after_super_on_create() {
    let patched = disable_webview_debugging(GENERATED_MAIN_APPLICATION, &DebugDisabler::default());

    let expected = "super.onCreate();\n    try { android.webkit.WebView.setWebContentsDebuggingEnabled(false); } catch (e) {}";
    assert!(patched.contains(expected), "patched source:\n{}", patched);
    // The rest of the method body is untouched.
    assert!(patched.contains("SoLoader.init(this, false);"));
}

#[test]
fn test_debug_disabler_is_idempotent() {
    let once = disable_webview_debugging(GENERATED_MAIN_APPLICATION, &DebugDisabler::default());
    let twice = disable_webview_debugging(&once, &DebugDisabler::default());
    assert_eq!(once, twice);
}

#[test]
fn test_already_guarded_source_is_unchanged() {
    let source = format!(
        "public void onCreate() {{\n  super.onCreate();\n  {}\n}}",
        "try { android.webkit.WebView.setWebContentsDebuggingEnabled(false); } catch (e) {}"
    );
    let patched = disable_webview_debugging(&source, &DebugDisabler::default());
    assert_eq!(patched, source);
}

#[test]
fn test_guard_marker_anywhere_suppresses_insertion() {
    // Even a marker outside the onCreate body counts as already applied.
    let source = format!(
        "// {}\npublic void onCreate() {{\n  super.onCreate();\n}}",
        DEBUG_GUARD_MARKER
    );
    let patched = disable_webview_debugging(&source, &DebugDisabler::default());
    assert_eq!(patched, source);
}

#[test]
fn test_source_without_anchor_is_unchanged() {
    let source = "public class MainApplication extends Application {\n}\n";
    let patched = disable_webview_debugging(source, &DebugDisabler::default());
    assert_eq!(patched, source);
}

#[test]
fn test_only_first_on_create_is_patched() {
    let source = "void onCreate() {\n  super.onCreate();\n}\nvoid onCreate() {\n  super.onCreate();\n}\n";
    let patched = disable_webview_debugging(source, &DebugDisabler::default());
    assert_eq!(patched.matches("setWebContentsDebuggingEnabled").count(), 1);
}

// =============================================================================
// Maven repository injector tests
// =============================================================================

#[test]
fn test_repository_added_inside_first_block() {
    let patched = inject_maven_repository(GENERATED_BUILD_GRADLE, &RepositoryInjection::default());

    let expected = "buildscript {\n    repositories {\n        maven { url 'https://www.jitpack.io' }\n        google()";
    assert!(patched.starts_with(expected), "patched script:\n{}", patched);
    // Only the first block gets the entry.
    assert_eq!(patched.matches("jitpack").count(), 1);
}

#[test]
fn test_repository_injector_is_idempotent() {
    let once = inject_maven_repository(GENERATED_BUILD_GRADLE, &RepositoryInjection::default());
    let twice = inject_maven_repository(&once, &RepositoryInjection::default());
    assert_eq!(once, twice);
}

#[test]
fn test_url_anywhere_in_script_suppresses_insertion() {
    let script = "// mirror of https://www.jitpack.io\nrepositories {\n    google()\n}\n";
    let patched = inject_maven_repository(script, &RepositoryInjection::default());
    assert_eq!(patched, script);
}

#[test]
fn test_script_without_repositories_block_is_unchanged() {
    let script = "dependencies {\n    classpath('com.android.tools.build:gradle')\n}\n";
    let patched = inject_maven_repository(script, &RepositoryInjection::default());
    assert_eq!(patched, script);
}

#[test]
fn test_empty_script_is_unchanged() {
    assert_eq!(
        inject_maven_repository("", &RepositoryInjection::default()),
        ""
    );
}

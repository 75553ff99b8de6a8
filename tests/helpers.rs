//! Shared test utilities for droidpatch tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest text as the project generator emits it.
pub const GENERATED_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.brokerage.shell">
    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.CAMERA" />
    <uses-permission android:name="android.permission.ACCESS_NETWORK_STATE" />
    <uses-permission android:name="android.permission.RECORD_AUDIO" />
    <uses-sdk android:minSdkVersion="21" android:targetSdkVersion="33" android:maxSdkVersion="34" />
    <application android:name=".MainApplication" android:allowBackup="true" android:label="Shell">
        <activity android:name=".MainActivity" />
    </application>
</manifest>
"#;

/// Bootstrap source as the project generator emits it.
pub const GENERATED_MAIN_APPLICATION: &str = r#"package com.brokerage.shell;

import android.app.Application;

public class MainApplication extends Application {
  @Override
  public void onCreate() {
    super.onCreate();
    SoLoader.init(this, false);
  }
}
"#;

/// Project build script as the project generator emits it.
pub const GENERATED_BUILD_GRADLE: &str = r#"buildscript {
    repositories {
        google()
        mavenCentral()
    }
    dependencies {
        classpath('com.android.tools.build:gradle')
    }
}

allprojects {
    repositories {
        google()
        mavenCentral()
    }
}
"#;

/// Test environment with a temporary base directory holding a synthetic
/// generated Android project.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Base directory (invocation dir simulation)
    pub base_dir: PathBuf,
    /// Generated project root (`<base>/android`)
    pub project: PathBuf,
}

impl TestEnv {
    /// Create a test environment with an empty base directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let project = base_dir.join("android");
        Self {
            _temp_dir: temp_dir,
            base_dir,
            project,
        }
    }

    /// Create a test environment with a full synthetic generated project.
    pub fn with_generated_project() -> Self {
        let env = Self::new();
        write_file(&env.manifest_path(), GENERATED_MANIFEST);
        write_file(
            &env.bootstrap_path("MainApplication.java"),
            GENERATED_MAIN_APPLICATION,
        );
        write_file(&env.build_gradle_path(), GENERATED_BUILD_GRADLE);
        env
    }

    /// Path of the generated main manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.project.join("app/src/main/AndroidManifest.xml")
    }

    /// Path of the generated bootstrap source.
    pub fn bootstrap_path(&self, file_name: &str) -> PathBuf {
        self.project
            .join("app/src/main/java/com/brokerage/shell")
            .join(file_name)
    }

    /// Path of the generated top-level build script.
    pub fn build_gradle_path(&self) -> PathBuf {
        self.project.join("build.gradle")
    }
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// Assert that a file does not contain the given content.
pub fn assert_file_lacks(path: &Path, unexpected: &str) {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    assert!(
        !content.contains(unexpected),
        "File {} unexpectedly contains: {}\nActual content: {}",
        path.display(),
        unexpected,
        content
    );
}

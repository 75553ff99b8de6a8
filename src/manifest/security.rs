//! Forced security attributes on the `<application>` node.

use super::document::ManifestDocument;

/// Attribute values forced onto the application node.
///
/// Defaults are the shipped configuration: backups and cleartext traffic off,
/// RTL layouts on, native libraries left compressed in the APK.
#[derive(Debug, Clone)]
pub struct SecurityFlags {
    /// `android:allowBackup`
    pub allow_backup: bool,
    /// `android:usesCleartextTraffic`
    pub uses_cleartext_traffic: bool,
    /// `android:supportsRtl`
    pub supports_rtl: bool,
    /// `android:extractNativeLibs`
    pub extract_native_libs: bool,
}

impl Default for SecurityFlags {
    fn default() -> Self {
        Self {
            allow_backup: false,
            uses_cleartext_traffic: false,
            supports_rtl: true,
            extract_native_libs: false,
        }
    }
}

/// Set the security attributes on the single `application` node.
///
/// The values are written unconditionally, overwriting whatever the generator
/// produced. A manifest without an `application` node is left unchanged and
/// reported via the return value; the prebuild step may run again after the
/// generator has produced the node, so this is not an error.
pub fn apply_security_flags(doc: &mut ManifestDocument, flags: &SecurityFlags) -> bool {
    let app = match doc.root.child_mut("application") {
        Some(app) => app,
        None => {
            println!("  Warning: manifest has no <application> node, security flags not applied");
            return false;
        }
    };

    app.set_attr("android:allowBackup", bool_str(flags.allow_backup));
    app.set_attr(
        "android:usesCleartextTraffic",
        bool_str(flags.uses_cleartext_traffic),
    );
    app.set_attr("android:supportsRtl", bool_str(flags.supports_rtl));
    app.set_attr(
        "android:extractNativeLibs",
        bool_str(flags.extract_native_libs),
    );
    true
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

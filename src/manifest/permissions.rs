//! Permission stripping for the generated manifest.
//!
//! The shell app renders everything inside a WebView and talks to its backend
//! over HTTPS; the template it is generated from still declares a handful of
//! runtime permissions the app never uses. Store review flags them, so they
//! are removed at build time.

use super::document::ManifestDocument;

/// Permissions removed from every generated manifest.
pub const BLOCKED_PERMISSIONS: &[&str] = &[
    "android.permission.CAMERA",
    "android.permission.RECORD_AUDIO",
    "android.permission.READ_EXTERNAL_STORAGE",
    "android.permission.WRITE_EXTERNAL_STORAGE",
    "android.permission.SYSTEM_ALERT_WINDOW",
];

/// Denylist of permission names to drop, matched exactly (case-sensitive).
#[derive(Debug, Clone)]
pub struct PermissionDenylist {
    /// Fully qualified permission names.
    pub blocked: Vec<String>,
}

impl Default for PermissionDenylist {
    fn default() -> Self {
        Self {
            blocked: BLOCKED_PERMISSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PermissionDenylist {
    /// Whether a permission name is on the denylist.
    pub fn contains(&self, name: &str) -> bool {
        self.blocked.iter().any(|b| b == name)
    }
}

/// Remove every `uses-permission` entry whose `android:name` is denylisted.
///
/// Remaining entries keep their relative order. Entries without a name
/// attribute are left alone. Returns the number of entries removed.
pub fn strip_blocked_permissions(
    doc: &mut ManifestDocument,
    denylist: &PermissionDenylist,
) -> usize {
    let before = doc.root.children.len();
    doc.root.children.retain(|child| {
        if child.name != "uses-permission" {
            return true;
        }
        match child.attr("android:name") {
            Some(name) => !denylist.contains(name),
            None => true,
        }
    });
    before - doc.root.children.len()
}

//! Pinned SDK version declaration.
//!
//! The web portal requires TLS features and WebView behavior only present
//! from API 29, and the store submission targets API 34. The generated
//! `<uses-sdk>` node is replaced outright so template defaults cannot leak
//! through.

use super::document::{Element, ManifestDocument};

/// Platform versions written into the manifest.
#[derive(Debug, Clone)]
pub struct SdkVersions {
    /// `android:minSdkVersion`
    pub min_sdk: u32,
    /// `android:targetSdkVersion`
    pub target_sdk: u32,
}

impl Default for SdkVersions {
    fn default() -> Self {
        Self {
            min_sdk: 29,
            target_sdk: 34,
        }
    }
}

/// Replace the `uses-sdk` declaration with a single freshly built node.
///
/// This is a full overwrite, not a merge: any other attributes on the node
/// are discarded, duplicate nodes collapse to one, and a missing node is
/// created. The new node lands where the first old one was, else before
/// `<application>`, else last.
pub fn apply_sdk_versions(doc: &mut ManifestDocument, versions: &SdkVersions) {
    let mut node = Element::new("uses-sdk");
    node.set_attr("android:minSdkVersion", &versions.min_sdk.to_string());
    node.set_attr("android:targetSdkVersion", &versions.target_sdk.to_string());

    let children = &mut doc.root.children;
    let slot = children
        .iter()
        .position(|c| c.name == "uses-sdk")
        .or_else(|| children.iter().position(|c| c.name == "application"))
        .unwrap_or(children.len());
    children.retain(|c| c.name != "uses-sdk");
    children.insert(slot.min(children.len()), node);
}

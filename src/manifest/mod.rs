//! Manifest model and the transforms applied to it.

pub mod document;
pub mod permissions;
pub mod sdk;
pub mod security;

pub use document::{Element, ManifestDocument};
pub use permissions::{strip_blocked_permissions, PermissionDenylist};
pub use sdk::{apply_sdk_versions, SdkVersions};
pub use security::{apply_security_flags, SecurityFlags};

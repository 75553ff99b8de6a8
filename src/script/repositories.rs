//! Extra Maven repository for the project build script.
//!
//! The chart and OTP widgets resolve from JitPack, which the generated
//! `build.gradle` does not list. The URL is added to the first repository
//! block so dependency resolution finds it in every configuration.

use regex::Regex;

/// Anchor locating the opening of a repository declaration block.
///
/// Pinned by unit test; tracks the generator's output format.
pub const REPOSITORIES_ANCHOR: &str = r"repositories\s*\{";

/// Repository URL to make available to the build.
#[derive(Debug, Clone)]
pub struct RepositoryInjection {
    /// Maven repository URL.
    pub url: String,
}

impl Default for RepositoryInjection {
    fn default() -> Self {
        Self {
            url: "https://www.jitpack.io".to_string(),
        }
    }
}

/// Add a `maven { url ... }` entry inside the first repository block.
///
/// If the URL already occurs anywhere in the script the text is returned
/// unchanged. A script without a repository block is also returned unchanged,
/// with a build-log warning; the host pipeline has no recovery path for a
/// hard error here.
pub fn inject_maven_repository(script: &str, patch: &RepositoryInjection) -> String {
    if script.contains(&patch.url) {
        return script.to_string();
    }

    let anchor = Regex::new(REPOSITORIES_ANCHOR).expect("anchor pattern compiles");
    if anchor.find(script).is_none() {
        println!("  Warning: no repositories block found, {} not added", patch.url);
        return script.to_string();
    }

    anchor
        .replace(script, |caps: &regex::Captures| {
            format!("{}\n        maven {{ url '{}' }}", &caps[0], patch.url)
        })
        .into_owned()
}

//! WebView remote-debugging kill switch.
//!
//! The generated application bootstrap enables Chrome DevTools inspection of
//! release WebViews unless it is turned off explicitly. This transform plants
//! a guarded disable call right after the superclass initialization in
//! `onCreate`, so it runs before any WebView is constructed.

use regex::Regex;

/// Anchor locating the end of the bootstrap initialization sequence: the
/// `onCreate()` definition up through its `super.onCreate(...)` call.
///
/// Any change to the generator's output format silently breaks this match;
/// its exact semantics are pinned by unit test.
pub const ON_CREATE_ANCHOR: &str = r"onCreate\(\)[\s\S]*?super\.onCreate\(.*?\);";

/// Substring whose presence means the patch has already been applied.
pub const DEBUG_GUARD_MARKER: &str = "setWebContentsDebuggingEnabled(false)";

/// The guarded statement inserted after the anchor.
#[derive(Debug, Clone)]
pub struct DebugDisabler {
    /// Statement text, inserted on its own line.
    pub statement: String,
}

impl Default for DebugDisabler {
    fn default() -> Self {
        Self {
            statement:
                "try { android.webkit.WebView.setWebContentsDebuggingEnabled(false); } catch (e) {}"
                    .to_string(),
        }
    }
}

/// Insert the debug-disable statement after the first initialization anchor.
///
/// No-op when the guard marker is already present anywhere in the text or
/// when the anchor does not match; running twice equals running once.
pub fn disable_webview_debugging(source: &str, patch: &DebugDisabler) -> String {
    if source.contains(DEBUG_GUARD_MARKER) {
        return source.to_string();
    }

    let anchor = Regex::new(ON_CREATE_ANCHOR).expect("anchor pattern compiles");
    anchor
        .replace(source, |caps: &regex::Captures| {
            format!("{}\n    {}", &caps[0], patch.statement)
        })
        .into_owned()
}

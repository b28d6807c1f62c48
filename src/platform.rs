//! Platform-specific configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Extra modifier accepted for the copy shortcut on macOS (Cmd key).
/// Elsewhere Ctrl+C quits the app, so only plain `c` copies.
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: Option<KeyModifiers> = Some(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: Option<KeyModifiers> = None;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Copy payload shortcut display
/// - macOS: "Cmd+C"
/// - Linux/Windows: "c"
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+C";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "c";

/// Ctrl held without Alt. Windows reports AltGr as Ctrl+Alt, and AltGr
/// combinations are ordinary characters (`@`, `#` on many layouts).
pub fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

/// Whether `key` copies the submitted payload
pub fn is_copy_key(key: &KeyEvent) -> bool {
    if key.code != KeyCode::Char('c') {
        return false;
    }
    key.modifiers.is_empty() || COPY_MODIFIER.is_some_and(|m| key.modifiers == m)
}

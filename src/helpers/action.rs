//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
    /// Persist the current gallery settings
    SaveSettings,
}

/// Gallery actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum GalleryAction {
    /// Show the next component section
    NextSection,
    /// Show the previous component section
    PreviousSection,
    /// Switch label language
    ToggleLocale,
    /// Close an open modal or drawer
    Dismiss,
}

#[cfg(target_os = "macos")]
const KEY_NAMES: &[(&str, &str)] = &[
    ("secondary", "⌘"),
    ("cmd", "⌘"),
    ("ctrl", "⌃"),
    ("alt", "⌥"),
    ("shift", "⇧"),
    ("backspace", "⌫"),
    ("enter", "Enter"),
    ("space", "Space"),
    ("escape", "Esc"),
];

#[cfg(not(target_os = "macos"))]
const KEY_NAMES: &[(&str, &str)] = &[
    ("secondary", "Ctrl"),
    ("cmd", "Ctrl"),
    ("ctrl", "Ctrl"),
    ("alt", "Alt"),
    ("shift", "Shift"),
    ("backspace", "Backspace"),
    ("enter", "Enter"),
    ("space", "Space"),
    ("escape", "Esc"),
];

const KEY_SEPARATOR: &str = if cfg!(target_os = "macos") { "" } else { "+" };

/// Shortcuts listed in the sidebar: (keystroke, translation key)
pub const SHORTCUT_HINTS: [(&str, &str); 4] = [
    ("secondary-]", "shortcut-next-section"),
    ("secondary-[", "shortcut-previous-section"),
    ("secondary-l", "shortcut-language"),
    ("secondary-s", "shortcut-save"),
];

/// Convert a keystroke string such as `secondary-q` to display form
/// (`⌘Q` on macOS, `Ctrl+Q` elsewhere)
pub fn humanize_keystroke(keystroke: &str) -> String {
    keystroke
        .split('-')
        .map(|part| {
            KEY_NAMES
                .iter()
                .find(|(name, _)| *name == part)
                .map_or_else(|| part.to_uppercase(), |(_, display)| (*display).to_string())
        })
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("secondary-s", MenuAction::SaveSettings, None),
        // Gallery
        KeyBinding::new("secondary-]", GalleryAction::NextSection, None),
        KeyBinding::new("secondary-[", GalleryAction::PreviousSection, None),
        KeyBinding::new("secondary-l", GalleryAction::ToggleLocale, None),
        KeyBinding::new("escape", GalleryAction::Dismiss, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_are_uppercased() {
        assert_eq!(humanize_keystroke("q"), "Q");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn modifiers_are_joined_with_plus() {
        assert_eq!(humanize_keystroke("secondary-q"), "Ctrl+Q");
        assert_eq!(humanize_keystroke("ctrl-shift-l"), "Ctrl+Shift+L");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn modifiers_use_symbols() {
        assert_eq!(humanize_keystroke("secondary-q"), "⌘Q");
        assert_eq!(humanize_keystroke("alt-shift-l"), "⌥⇧L");
    }

    #[test]
    fn every_binding_is_created() {
        assert_eq!(new_key_bindings().len(), 6);
    }

    #[test]
    fn hints_have_labels() {
        for (keystroke, key) in SHORTCUT_HINTS {
            assert!(!humanize_keystroke(keystroke).is_empty());
            assert_ne!(crate::i18n::t(crate::i18n::Locale::ZhCN, key).as_ref(), key);
        }
    }
}

//! Hotkey chords: single chords that combine the space dot with other
//! dots. Their digit strings therefore start with "0", a namespace the
//! phonetic tables never use.

/// Host-side programs and toggles a hotkey can request. The session
/// reports these to the embedder, which owns the actual side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalCommand {
    OpenWebsite,
    OpenForum,
    BugReport,
    DictionaryBugReport,
    UserPhraseEditor,
    ToggleSimplified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Discard any half-entered cell sequence.
    ResetPending,
    /// Switch between Chinese and English mode.
    ToggleLanguage,
    /// Show a short usage hint.
    ShowHint,
    /// Rotate the pending-input display style.
    CycleDisplayStyle,
    /// Toggle raw braille-pattern output in English mode.
    ToggleBrailleOutput,
    /// Hand off to the host environment.
    Run(ExternalCommand),
}

/// Resolve a chord's digit string to a hotkey. Only meaningful for
/// chords that contain the space dot plus at least one other dot;
/// anything unrecognized in that namespace is an unknown hotkey.
pub fn hotkey_for_chord(digits: &str) -> Option<HotkeyAction> {
    let action = match digits {
        "0245" => HotkeyAction::ResetPending,
        "0456" => HotkeyAction::ToggleLanguage,
        "01" => HotkeyAction::ShowHint,
        "0145" => HotkeyAction::CycleDisplayStyle,
        "0136" => HotkeyAction::ToggleBrailleOutput,
        "024567" => HotkeyAction::Run(ExternalCommand::OpenWebsite),
        "012457" => HotkeyAction::Run(ExternalCommand::OpenForum),
        "0127" => HotkeyAction::Run(ExternalCommand::BugReport),
        "012347" => HotkeyAction::Run(ExternalCommand::DictionaryBugReport),
        "0157" => HotkeyAction::Run(ExternalCommand::UserPhraseEditor),
        "02347" => HotkeyAction::Run(ExternalCommand::ToggleSimplified),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chords() {
        assert_eq!(hotkey_for_chord("0245"), Some(HotkeyAction::ResetPending));
        assert_eq!(hotkey_for_chord("0456"), Some(HotkeyAction::ToggleLanguage));
        assert_eq!(hotkey_for_chord("01"), Some(HotkeyAction::ShowHint));
        assert_eq!(
            hotkey_for_chord("024567"),
            Some(HotkeyAction::Run(ExternalCommand::OpenWebsite))
        );
    }

    #[test]
    fn test_unknown_chord() {
        assert_eq!(hotkey_for_chord("078"), None);
        assert_eq!(hotkey_for_chord("0"), None);
    }
}

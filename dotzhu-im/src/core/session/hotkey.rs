//! Hotkey chords: space-dot combinations dispatched to session commands

use dotzhu_engine::{Cell, HotkeyAction, table::hotkey_for_chord};
use tracing::debug;

use super::*;
use crate::core::backend::LanguageMode;

impl<B: PhoneticBackend> BrailleSession<B> {
    /// Dispatch a chord from the hotkey namespace.
    pub(super) fn handle_hotkey(&mut self, cell: &Cell) -> SessionResult {
        let Some(action) = hotkey_for_chord(cell.digits()) else {
            debug!(chord = %cell.digits(), "unknown hotkey");
            return self.reject();
        };
        debug!(chord = %cell.digits(), ?action, "hotkey");

        match action {
            HotkeyAction::ResetPending => {
                // Recover from a confused braille state without losing
                // text already in the backend buffer
                self.clear_braille_state(true);
                let mut result = SessionResult::consumed();
                self.refresh_display(&mut result.actions);
                result
            }
            HotkeyAction::ToggleLanguage => self.toggle_language(),
            HotkeyAction::ShowHint => {
                SessionResult::consumed().with_action(HostAction::ShowMessage {
                    text: self.hint_message(),
                    duration_secs: self.settings.feedback.message_duration_secs,
                })
            }
            HotkeyAction::CycleDisplayStyle => {
                self.style = self.style.next();
                let mut result = SessionResult::consumed();
                self.refresh_display(&mut result.actions);
                result
            }
            HotkeyAction::ToggleBrailleOutput => {
                let mut result = SessionResult::consumed();
                // Leaving ASCII output with text still in the buffer
                // would strand it, so commit first
                if self.language == LanguageMode::English
                    && self.backend.has_pending_buffer()
                {
                    self.force_commit(&mut result.actions);
                }
                self.braille_unicode_output = !self.braille_unicode_output;
                result
            }
            HotkeyAction::Run(command) => {
                SessionResult::consumed().with_action(HostAction::RunCommand(command))
            }
        }
    }

    fn toggle_language(&mut self) -> SessionResult {
        let mut result = SessionResult::consumed();
        self.force_commit(&mut result.actions);
        self.language = match self.language {
            LanguageMode::Chinese => LanguageMode::English,
            LanguageMode::English => LanguageMode::Chinese,
        };
        if self.language == LanguageMode::English {
            self.clear_braille_state(true);
        }
        let label = match self.language {
            LanguageMode::Chinese => "\u{4e2d}\u{6587}", // 中文
            LanguageMode::English => "\u{82f1}\u{6578}", // 英數
        };
        result = result.with_action(HostAction::ShowMessage {
            text: label.to_string(),
            duration_secs: self.settings.feedback.message_duration_secs,
        });
        self.refresh_display(&mut result.actions);
        result
    }
}

//! Composition display: splicing pending braille input into the backend
//! buffer, and the human-readable state hint

use super::*;
use crate::core::backend::LanguageMode;

impl<B: PhoneticBackend> BrailleSession<B> {
    /// Pending braille input rendered per the current display style.
    fn pending_text(&self) -> String {
        match self.style {
            DisplayStyle::Phonetic => self.composer.display_phonetic(),
            DisplayStyle::Braille => self.composer.display_braille(),
            DisplayStyle::Hidden => String::new(),
        }
    }

    /// Drain committed text, then rebuild the composition area: the
    /// backend buffer with the pending braille input spliced in at the
    /// cursor, cursor sitting after the spliced part.
    pub(super) fn refresh_display(&mut self, actions: &mut Vec<HostAction>) {
        if let Some(text) = self.backend.take_committed_text() {
            actions.push(HostAction::Commit(text));
        }

        let buffer = self.backend.buffer_text();
        let pos = self.backend.cursor_position().min(buffer.chars().count());
        let pending = self.pending_text();

        let mut text = String::new();
        text.extend(buffer.chars().take(pos));
        text.push_str(&pending);
        text.extend(buffer.chars().skip(pos));

        actions.push(HostAction::SetComposition {
            text,
            cursor: pos + pending.chars().count(),
        });
    }

    /// Human-readable session state for the hint hotkey.
    pub(super) fn hint_message(&self) -> String {
        let mode = match self.language {
            LanguageMode::Chinese => "\u{4e2d}\u{6587}", // 中文
            LanguageMode::English => "\u{82f1}\u{6578}", // 英數
        };
        let pending = self.composer.display_phonetic();
        if pending.is_empty() {
            format!("{} / {}", mode, self.style.label())
        } else {
            format!("{} / {} / {}", mode, self.style.label(), pending)
        }
    }
}

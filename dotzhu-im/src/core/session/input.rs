//! Key event dispatch: chord tracking on press, cell handling on release

use dotzhu_engine::{Cell, ChordRelease, Emitted, translate};
use tracing::{debug, trace, warn};

use super::*;
use crate::core::backend::LanguageMode;
use crate::core::keycode::KeyEvent;

impl<B: PhoneticBackend> BrailleSession<B> {
    /// Process a key press.
    pub fn key_down(&mut self, key: &KeyEvent) -> SessionResult {
        if !self.backend.is_ready() {
            warn!("phonetic backend not ready, passing key through");
            return SessionResult::not_consumed();
        }

        // Held modifiers break braille input entirely; let the host and
        // backend see the combination
        if key.keysym.is_modifier() || key.modifiers.any_held() {
            self.clear_braille_state(true);
            return SessionResult::not_consumed();
        }

        if key.keysym == Keysym::BACKSPACE {
            // Dots still held no longer form a cell
            self.chord.clear();
            return match self.composer.erase() {
                Ok(_) => {
                    let mut result = SessionResult::consumed();
                    self.refresh_display(&mut result.actions);
                    result
                }
                // Nothing of ours to erase: the application handles it
                Err(_) => SessionResult::not_consumed(),
            };
        }

        if key.keysym == Keysym::ESCAPE {
            if self.composer.is_pending() {
                self.clear_braille_state(true);
                let mut result = SessionResult::consumed();
                self.refresh_display(&mut result.actions);
                return result;
            }
            return SessionResult::not_consumed();
        }

        // Digits select candidates, and type numbers in English mode
        if let Some(digit) = key.keysym.digit_char()
            && (self.backend.candidate_page_count() > 0
                || self.language == LanguageMode::English)
            && !self.composer.is_pending()
            && !self.chord.is_held()
        {
            self.backend.submit_key(digit);
            let mut result = SessionResult::consumed();
            self.refresh_display(&mut result.actions);
            return result;
        }

        if let Some(dot) = key.keysym.dot_index() {
            trace!(dot, "dot key down");
            self.chord.press(dot);
            self.claimed.insert(key.keysym);
            return SessionResult::consumed();
        }

        if key.keysym.is_printable() {
            // Printable non-dot keys are swallowed so stray fingers do
            // not leak characters into the application
            self.claimed.insert(key.keysym);
            return SessionResult::consumed();
        }

        // Arrows, Delete and similar keys reset the chord but keep the
        // pending composition; consume them only while composing
        self.chord.clear();
        if self.composer.is_pending() {
            self.claimed.insert(key.keysym);
            return SessionResult::consumed();
        }
        SessionResult::not_consumed()
    }

    /// Process a key release.
    pub fn key_up(&mut self, key: &KeyEvent) -> SessionResult {
        if !self.claimed.remove(&key.keysym) {
            return SessionResult::not_consumed();
        }

        if let Some(dot) = key.keysym.dot_index() {
            return match self.chord.release(dot) {
                ChordRelease::Pending => SessionResult::consumed(),
                ChordRelease::Bounce => SessionResult::consumed(),
                ChordRelease::Cell(cell) => self.handle_cell(cell, key.modifiers.caps_lock),
            };
        }

        // A claimed non-dot key released with no chord in progress was
        // an invalid braille key
        if !self.chord.is_held() && key.keysym.is_printable() {
            return self.reject();
        }
        SessionResult::consumed()
    }

    /// A chord has fully resolved into a cell.
    pub(super) fn handle_cell(&mut self, cell: Cell, caps_lock: bool) -> SessionResult {
        debug!(cell = %cell.digits(), "cell finalized");

        // A lone space cell was pending: any cell sequence opened with
        // it is an unknown hotkey
        if self.space_lead {
            self.space_lead = false;
            return self.reject();
        }

        // Chords combining space with other dots form the hotkey namespace
        if cell.has_space() && !cell.is_space_only() {
            return self.handle_hotkey(&cell);
        }

        if cell.is_space_only() {
            let composing =
                self.composer.is_pending() || self.backend.has_pending_buffer();
            if self.language == LanguageMode::Chinese && !composing {
                // Reserved: first tone needs a syllable, and hotkeys are
                // single chords, so remember the space and wait
                self.space_lead = true;
                return SessionResult::consumed();
            }
            // While composing, the space cell reads as the first tone
            // and falls through to the Chinese path; in English mode it
            // is a plain space
        }

        if self.language == LanguageMode::English {
            return self.handle_english_cell(&cell, caps_lock);
        }

        if self.backend.candidate_page_count() > 0 {
            return self.handle_candidate_cell(&cell);
        }

        match self.composer.push(cell) {
            Ok(outcome) => {
                let mut result = SessionResult::consumed();
                for emitted in &outcome.forwards {
                    let text = match emitted {
                        Emitted::Syllable(text) => text,
                        Emitted::Literal(text) => text,
                    };
                    for key in translate(text).chars() {
                        self.backend.submit_key(key);
                    }
                }
                self.refresh_display(&mut result.actions);
                result
            }
            Err(err) => {
                debug!(%err, "cell rejected");
                self.reject()
            }
        }
    }

    /// English mode: one cell is one ASCII character, or one braille
    /// pattern when unicode output is on.
    fn handle_english_cell(&mut self, cell: &Cell, caps_lock: bool) -> SessionResult {
        if self.braille_unicode_output {
            return SessionResult::consumed()
                .with_action(HostAction::Commit(cell.glyph().to_string()));
        }
        match dotzhu_engine::table::ascii_char(cell.digits()) {
            Some(ch) => {
                let ch = if caps_lock { ch.to_ascii_uppercase() } else { ch };
                self.backend.submit_key(ch);
                let mut result = SessionResult::consumed();
                self.refresh_display(&mut result.actions);
                result
            }
            None => self.reject(),
        }
    }

    /// Candidate window showing: only braille digits are allowed, as
    /// selection keys.
    fn handle_candidate_cell(&mut self, cell: &Cell) -> SessionResult {
        match dotzhu_engine::table::ascii_char(cell.digits()) {
            Some(ch) if ch.is_ascii_digit() => {
                self.backend.submit_key(ch);
                let mut result = SessionResult::consumed();
                self.refresh_display(&mut result.actions);
                result
            }
            _ => self.reject(),
        }
    }
}

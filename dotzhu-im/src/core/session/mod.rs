//! Braille input session - chord tracking, key dispatch, and hotkeys
//!
//! This module contains the main `BrailleSession` struct that sits
//! between the host key events and the phonetic conversion backend. It
//! tracks which keys form the current chord, feeds finalized cells to
//! the composer, and turns backend state into host actions.

mod display;
mod hotkey;
mod input;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use dotzhu_engine::{BrailleComposer, DotChord, table::chinese_table};
use tracing::debug;

use super::backend::{LanguageMode, PhoneticBackend};
use super::keycode::Keysym;
use crate::config::{DisplayStyle, Settings};

/// The braille input session
pub struct BrailleSession<B: PhoneticBackend> {
    /// Phonetic conversion backend
    backend: B,
    /// Dots currently held and accumulated for the chord in progress
    chord: DotChord,
    /// Cell-sequence composition state
    composer: BrailleComposer,
    /// Keys whose press we consumed, so their release is ours too
    claimed: HashSet<Keysym>,
    /// Chinese or English input mode
    language: LanguageMode,
    /// How pending input is shown
    style: DisplayStyle,
    /// English mode commits braille patterns instead of ASCII
    braille_unicode_output: bool,
    /// A lone space cell was typed while idle; the next cell decides
    /// whether it was a hotkey prefix
    space_lead: bool,
    /// Loaded configuration
    settings: Settings,
}

impl<B: PhoneticBackend> BrailleSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, Settings::default())
    }

    pub fn with_settings(backend: B, settings: Settings) -> Self {
        Self {
            backend,
            chord: DotChord::new(),
            composer: BrailleComposer::new(chinese_table()),
            claimed: HashSet::new(),
            language: LanguageMode::Chinese,
            style: settings.display.style,
            braille_unicode_output: settings.display.braille_unicode_output,
            space_lead: false,
            settings,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn language_mode(&self) -> LanguageMode {
        self.language
    }

    pub fn display_style(&self) -> DisplayStyle {
        self.style
    }

    /// Whether braille composition is in progress.
    pub fn is_composing(&self) -> bool {
        self.composer.is_pending()
    }

    /// Clear chord tracking; optionally also the pending composition.
    pub(super) fn clear_braille_state(&mut self, clear_pending: bool) {
        self.chord.clear();
        self.space_lead = false;
        if clear_pending {
            self.composer.reset();
        }
    }

    /// Drop all braille input state: chord tracking, claimed keys, and
    /// the pending composition. The backend buffer is untouched.
    pub fn reset(&mut self) {
        self.claimed.clear();
        self.clear_braille_state(true);
    }

    /// The host forcibly ended the composition (focus loss, shutdown).
    pub fn composition_terminated(&mut self, forced: bool) {
        if forced {
            debug!("composition terminated by host");
            self.reset();
        }
    }

    /// Push everything the backend holds out to the application:
    /// close the candidate window, commit the pre-edit buffer, and
    /// collect the committed text.
    pub(super) fn force_commit(&mut self, actions: &mut Vec<HostAction>) {
        if self.backend.candidate_page_count() > 0 {
            self.backend.close_candidates();
        }
        if self.backend.has_pending_buffer() {
            self.backend.commit_pending();
        }
        if let Some(text) = self.backend.take_committed_text() {
            actions.push(HostAction::Commit(text));
        }
    }

    /// Rejected input: optionally beep, always consume.
    pub(super) fn reject(&self) -> SessionResult {
        if self.settings.feedback.beep {
            SessionResult::consumed().with_action(HostAction::Beep)
        } else {
            SessionResult::consumed()
        }
    }
}

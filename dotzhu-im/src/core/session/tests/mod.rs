//! Tests for the braille session

use super::*;
use crate::core::backend::PhoneticBackend;
use crate::core::keycode::{KeyEvent, KeyModifiers, Keysym};

mod display;
mod english;
mod hotkeys;
mod passthrough;

/// Scripted phonetic backend. Tests poke `buffer`, `cursor` and
/// `candidate_pages` directly to simulate backend state; submitted keys
/// are recorded verbatim.
#[derive(Debug, Default)]
pub(super) struct MockBackend {
    pub keys: String,
    pub buffer: String,
    pub cursor: usize,
    pub candidate_pages: usize,
    pub committed: Option<String>,
    pub unavailable: bool,
}

impl PhoneticBackend for MockBackend {
    fn is_ready(&self) -> bool {
        !self.unavailable
    }

    fn submit_key(&mut self, key: char) {
        self.keys.push(key);
    }

    fn has_pending_buffer(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn buffer_text(&self) -> String {
        self.buffer.clone()
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn candidate_page_count(&self) -> usize {
        self.candidate_pages
    }

    fn close_candidates(&mut self) {
        self.candidate_pages = 0;
    }

    fn commit_pending(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        if !text.is_empty() {
            self.committed = Some(text);
        }
        self.cursor = 0;
    }

    fn take_committed_text(&mut self) -> Option<String> {
        self.committed.take()
    }
}

fn session() -> BrailleSession<MockBackend> {
    BrailleSession::new(MockBackend::default())
}

fn dot_keysym(dot: u8) -> Keysym {
    let ch = match dot {
        0 => ' ',
        1 => 'f',
        2 => 'd',
        3 => 's',
        4 => 'j',
        5 => 'k',
        6 => 'l',
        7 => 'a',
        8 => ';',
        _ => panic!("no key for dot {}", dot),
    };
    Keysym(ch as u32)
}

/// Press and release a full chord, returning the final release result.
fn tap_chord(session: &mut BrailleSession<MockBackend>, dots: &[u8]) -> SessionResult {
    tap_chord_mods(session, dots, KeyModifiers::default())
}

fn tap_chord_mods(
    session: &mut BrailleSession<MockBackend>,
    dots: &[u8],
    modifiers: KeyModifiers,
) -> SessionResult {
    for &dot in dots {
        let result = session.key_down(&KeyEvent::new(dot_keysym(dot), modifiers, true));
        assert!(result.consumed, "dot key press should be consumed");
    }
    let mut last = SessionResult::not_consumed();
    for &dot in dots {
        last = session.key_up(&KeyEvent::new(dot_keysym(dot), modifiers, false));
    }
    last
}

/// Switch a fresh session to English mode via the language hotkey.
fn english_session() -> BrailleSession<MockBackend> {
    let mut session = session();
    tap_chord(&mut session, &[0, 4, 5, 6]);
    assert_eq!(session.language_mode(), LanguageMode::English);
    session
}

fn composition_of(result: &SessionResult) -> Option<(&str, usize)> {
    result.actions.iter().rev().find_map(|action| match action {
        HostAction::SetComposition { text, cursor } => Some((text.as_str(), *cursor)),
        _ => None,
    })
}

fn has_beep(result: &SessionResult) -> bool {
    result.actions.contains(&HostAction::Beep)
}

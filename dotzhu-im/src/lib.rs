//! dotzhu-im: a braille-keyboard Bopomofo input method for Taiwan
//!
//! This crate turns nine-key braille chords into Bopomofo syllables and
//! punctuation, feeding a host phonetic conversion backend. It uses
//! dotzhu-engine for chord formation and cell-sequence composition.

pub mod config;
pub mod core;
pub mod logging;

pub use core::backend::{LanguageMode, PhoneticBackend};
pub use core::keycode::{KeyEvent, KeyModifiers, Keysym};
pub use core::session::{BrailleSession, HostAction, SessionResult};

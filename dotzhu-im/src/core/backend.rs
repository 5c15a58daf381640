//! Interface to the host phonetic conversion backend.
//!
//! The session drives a backend that turns standard-layout key sequences
//! into Chinese text, tracks a pre-edit buffer and a candidate window,
//! and produces committed text. The trait mirrors the surface the
//! session needs and nothing more, so tests can supply a scripted fake.

/// Chinese or English (direct ASCII) input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMode {
    Chinese,
    English,
}

pub trait PhoneticBackend {
    /// Whether the backend is initialized and able to take input.
    fn is_ready(&self) -> bool {
        true
    }

    /// Feed one key as typed on a standard keyboard layout.
    fn submit_key(&mut self, key: char);

    /// Whether the backend pre-edit buffer holds uncommitted text.
    fn has_pending_buffer(&self) -> bool;

    /// Current pre-edit buffer contents.
    fn buffer_text(&self) -> String;

    /// Cursor position within the pre-edit buffer, in characters.
    fn cursor_position(&self) -> usize;

    /// Number of candidate pages currently showing. Zero when the
    /// candidate window is closed.
    fn candidate_page_count(&self) -> usize;

    /// Close the candidate window without selecting.
    fn close_candidates(&mut self);

    /// Commit the pre-edit buffer as-is.
    fn commit_pending(&mut self);

    /// Take text the backend has committed since the last call.
    fn take_committed_text(&mut self) -> Option<String>;
}

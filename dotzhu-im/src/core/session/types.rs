//! Type definitions for the braille session

use dotzhu_engine::ExternalCommand;

/// Action to be performed by the host framework/UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Update the composition area text and cursor position
    SetComposition { text: String, cursor: usize },
    /// Commit text to the application
    Commit(String),
    /// Show a transient message to the user
    ShowMessage { text: String, duration_secs: u32 },
    /// Audible warning for rejected input
    Beep,
    /// Hand an external command off to the host environment
    RunCommand(ExternalCommand),
}

/// Result of processing a key event
#[derive(Debug, Clone, Default)]
pub struct SessionResult {
    /// Whether the key was consumed by the IME
    pub consumed: bool,
    /// Actions to perform
    pub actions: Vec<HostAction>,
}

impl SessionResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: HostAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_actions(mut self, actions: Vec<HostAction>) -> Self {
        self.actions.extend(actions);
        self
    }
}

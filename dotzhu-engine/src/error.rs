//! Error types for braille composition

/// Rejections surfaced by the composition state machine. None of these are
/// fatal: the decoder stays in a well-defined state and the next input is
/// processed normally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The cell can neither begin nor extend the pending sequence. The
    /// attempted cell is discarded; pending state is preserved.
    #[error("cell '{0}' is invalid in the current context")]
    InvalidCellInContext(String),

    /// Erase was requested with nothing retractable.
    #[error("nothing to erase")]
    NothingToErase,
}

pub mod cell;
pub mod compose;
pub mod error;
pub mod keys;
pub mod table;

pub use cell::{Cell, ChordRelease, DotChord};
pub use compose::{BrailleComposer, Correction, Emitted, Outcome};
pub use error::ComposeError;
pub use keys::translate;
pub use table::{CellMatch, CellTrie, ExternalCommand, HotkeyAction, Payload, PayloadKind};

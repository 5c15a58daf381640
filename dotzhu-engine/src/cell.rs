//! Braille cell formation from dot-key chords.
//!
//! A cell is typed by holding down several dot keys at once and releasing
//! them. Keys may go down and come up in any order and may overlap, so the
//! chord tracks two masks: the keys currently held and every key seen since
//! the chord began. The cell is finalized exactly when the held mask
//! returns to empty.

use std::fmt;

/// Dot index of the space bar within a chord.
pub const SPACE_DOT: u8 = 0;

/// Number of chord positions: space plus dots 1-8.
pub const DOT_COUNT: u8 = 9;

/// A finalized braille cell, canonically encoded as the ascending digit
/// string of every dot in the chord (`0` = space). Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    mask: u16,
    digits: String,
}

impl Cell {
    /// Build a cell from a chord mask (bit i = dot i). Returns `None` for
    /// an empty mask: a chord that accumulated nothing is a no-op, not a
    /// space cell (the space cell has the space bit set).
    pub fn from_mask(mask: u16) -> Option<Self> {
        if mask == 0 || mask >= 1 << DOT_COUNT {
            return None;
        }
        let digits = (0..DOT_COUNT)
            .filter(|dot| mask & (1 << dot) != 0)
            .map(|dot| char::from(b'0' + dot))
            .collect();
        Some(Self { mask, digits })
    }

    /// Build a cell from explicit dot positions. Convenient in tests and
    /// table definitions.
    pub fn from_dots(dots: &[u8]) -> Option<Self> {
        let mask = dots
            .iter()
            .filter(|&&dot| dot < DOT_COUNT)
            .fold(0u16, |mask, &dot| mask | (1 << dot));
        Self::from_mask(mask)
    }

    /// The canonical digit string, e.g. `"135"` for dots 1, 3 and 5.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The chord mask this cell was finalized from.
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Whether the space bar was part of the chord.
    pub fn has_space(&self) -> bool {
        self.mask & (1 << SPACE_DOT) != 0
    }

    /// Whether this is the bare space cell (`"0"`).
    pub fn is_space_only(&self) -> bool {
        self.mask == 1 << SPACE_DOT
    }

    /// The Unicode braille glyph for this cell. The space bit is shifted
    /// out; dots 1-8 line up with the U+2800 block's pattern bits.
    pub fn glyph(&self) -> char {
        // mask >> 1 fits in 8 bits, so the codepoint is always valid
        char::from_u32(0x2800 | u32::from(self.mask >> 1)).unwrap_or('\u{2800}')
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

/// Outcome of releasing a dot key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordRelease {
    /// Other keys of the chord are still held down.
    Pending,
    /// The chord ended without accumulating any dot (a bounced or
    /// unrecognized key): distinct from the space-only cell.
    Bounce,
    /// The last key went up; the chord finalized into a cell.
    Cell(Cell),
}

/// Chord accumulator for the nine dot keys.
#[derive(Debug, Clone, Default)]
pub struct DotChord {
    /// Keys currently held down.
    held: u16,
    /// Every key seen since the last idle state.
    seen: u16,
}

impl DotChord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dot key going down.
    pub fn press(&mut self, dot: u8) {
        if dot < DOT_COUNT {
            self.held |= 1 << dot;
            self.seen |= 1 << dot;
        }
    }

    /// Record a dot key going up, finalizing the cell when the chord empties.
    pub fn release(&mut self, dot: u8) -> ChordRelease {
        if dot < DOT_COUNT {
            self.held &= !(1 << dot);
        }
        if self.held != 0 {
            return ChordRelease::Pending;
        }
        let seen = std::mem::take(&mut self.seen);
        match Cell::from_mask(seen) {
            Some(cell) => ChordRelease::Cell(cell),
            None => ChordRelease::Bounce,
        }
    }

    /// Whether any key of the chord is still held down.
    pub fn is_held(&self) -> bool {
        self.held != 0
    }

    /// Drop both masks without finalizing.
    pub fn clear(&mut self) {
        self.held = 0;
        self.seen = 0;
    }
}

//! Key code definitions and key event handling

use std::fmt;

/// Key symbol (keysym) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keysym(pub u32);

impl Keysym {
    // Common key symbols (XKB keysym values)
    pub const BACKSPACE: Keysym = Keysym(0xff08);
    pub const TAB: Keysym = Keysym(0xff09);
    pub const RETURN: Keysym = Keysym(0xff0d);
    pub const ESCAPE: Keysym = Keysym(0xff1b);
    pub const DELETE: Keysym = Keysym(0xffff);

    // Cursor movement
    pub const HOME: Keysym = Keysym(0xff50);
    pub const LEFT: Keysym = Keysym(0xff51);
    pub const UP: Keysym = Keysym(0xff52);
    pub const RIGHT: Keysym = Keysym(0xff53);
    pub const DOWN: Keysym = Keysym(0xff54);
    pub const PAGE_UP: Keysym = Keysym(0xff55);
    pub const PAGE_DOWN: Keysym = Keysym(0xff56);
    pub const END: Keysym = Keysym(0xff57);

    // Modifiers
    pub const SHIFT_L: Keysym = Keysym(0xffe1);
    pub const SHIFT_R: Keysym = Keysym(0xffe2);
    pub const CONTROL_L: Keysym = Keysym(0xffe3);
    pub const CONTROL_R: Keysym = Keysym(0xffe4);
    pub const ALT_L: Keysym = Keysym(0xffe9);
    pub const ALT_R: Keysym = Keysym(0xffea);
    pub const META_L: Keysym = Keysym(0xffe7);
    pub const META_R: Keysym = Keysym(0xffe8);
    pub const SUPER_L: Keysym = Keysym(0xffeb);
    pub const SUPER_R: Keysym = Keysym(0xffec);
    pub const CAPS_LOCK: Keysym = Keysym(0xffe5);

    // Space
    pub const SPACE: Keysym = Keysym(0x0020);

    /// Check if this keysym represents a printable character
    pub fn is_printable(&self) -> bool {
        // ASCII printable range (0x20-0x7e)
        (0x0020..=0x007e).contains(&self.0)
    }

    /// Try to convert this keysym to a character
    pub fn to_char(&self) -> Option<char> {
        if self.is_printable() {
            char::from_u32(self.0)
        } else {
            None
        }
    }

    /// Braille dot index for this key on the home-row chord layout.
    /// Space is dot 0; F D S and J K L carry dots 1-3 and 4-6; A and
    /// semicolon carry dots 7 and 8. Case-insensitive.
    pub fn dot_index(&self) -> Option<u8> {
        let ch = self.to_char()?.to_ascii_lowercase();
        let dot = match ch {
            ' ' => 0,
            'f' => 1,
            'd' => 2,
            's' => 3,
            'j' => 4,
            'k' => 5,
            'l' => 6,
            'a' => 7,
            ';' => 8,
            _ => return None,
        };
        Some(dot)
    }

    /// Check if this keysym is a digit (0-9)
    pub fn digit_char(&self) -> Option<char> {
        match self.0 {
            0x0030..=0x0039 => char::from_u32(self.0),
            _ => None,
        }
    }

    /// Check if this is a modifier key
    pub fn is_modifier(&self) -> bool {
        matches!(
            *self,
            Self::SHIFT_L
                | Self::SHIFT_R
                | Self::CONTROL_L
                | Self::CONTROL_R
                | Self::ALT_L
                | Self::ALT_R
                | Self::META_L
                | Self::META_R
                | Self::SUPER_L
                | Self::SUPER_R
        )
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ch) = self.to_char() {
            write!(f, "{}", ch)
        } else {
            write!(f, "Keysym(0x{:04x})", self.0)
        }
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub control_key: bool,
    pub alt_key: bool,
    pub super_key: bool,
    /// CapsLock toggle state, not a held key
    pub caps_lock: bool,
}

/// XKB modifier bitmask constants used at the host framework boundary.
impl KeyModifiers {
    pub const SHIFT_MASK: u32 = 1; // ShiftMask
    pub const CAPS_LOCK_MASK: u32 = 2; // LockMask
    pub const CONTROL_MASK: u32 = 4; // ControlMask
    pub const ALT_MASK: u32 = 8; // Mod1Mask
    pub const SUPER_MASK: u32 = 64; // Mod4Mask

    /// Decode a bitmask of XKB modifier flags into a `KeyModifiers` struct.
    pub fn from_modifier_state(state: u32) -> Self {
        Self {
            shift_key: (state & Self::SHIFT_MASK) != 0,
            control_key: (state & Self::CONTROL_MASK) != 0,
            alt_key: (state & Self::ALT_MASK) != 0,
            super_key: (state & Self::SUPER_MASK) != 0,
            caps_lock: (state & Self::CAPS_LOCK_MASK) != 0,
        }
    }
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.control_key = control;
        self
    }

    pub fn with_caps_lock(mut self, caps_lock: bool) -> Self {
        self.caps_lock = caps_lock;
        self
    }

    /// True when a held modifier (shift, ctrl, alt, super) is active.
    /// CapsLock is a toggle and does not count.
    pub fn any_held(&self) -> bool {
        self.shift_key || self.control_key || self.alt_key || self.super_key
    }
}

/// A key event
#[derive(Debug, Clone)]
pub struct KeyEvent {
    /// The key symbol
    pub keysym: Keysym,
    /// Modifier key state
    pub modifiers: KeyModifiers,
    /// Whether this is a key press (true) or release (false)
    pub is_press: bool,
}

impl KeyEvent {
    pub fn new(keysym: Keysym, modifiers: KeyModifiers, is_press: bool) -> Self {
        Self {
            keysym,
            modifiers,
            is_press,
        }
    }

    /// Create a simple key press event without modifiers
    pub fn press(keysym: Keysym) -> Self {
        Self::new(keysym, KeyModifiers::default(), true)
    }

    /// Create the matching key release event without modifiers
    pub fn release(keysym: Keysym) -> Self {
        Self::new(keysym, KeyModifiers::default(), false)
    }
}

//! Key input as the editor sees it.
//!
//! The engine only cares about a handful of keys (Enter for auto-indent, a
//! typed `>` for auto-close, caret movement for the pilot), so [`Key`] is a
//! small closed set. Crossterm key events convert via `From`; anything the
//! editor has no use for becomes [`Key::Other`].

use std::ops::BitOr;

use crossterm::event::{KeyCode, KeyModifiers};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Escape,
    /// A key with no editing meaning (function keys, media keys, ...).
    Other,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(m: KeyModifiers) -> Self {
        let mut out = Modifiers::NONE;
        if m.contains(KeyModifiers::SHIFT) {
            out = out | Modifiers::SHIFT;
        }
        if m.contains(KeyModifiers::CONTROL) {
            out = out | Modifiers::CTRL;
        }
        if m.contains(KeyModifiers::ALT) {
            out = out | Modifiers::ALT;
        }
        out
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// The character this press inserts into a text buffer, if any.
    ///
    /// Ctrl/Alt chords are shortcuts, not text. Shift is allowed since it is
    /// how most punctuation (including `>`) is typed.
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            Key::Char(c)
                if !self.modifiers.contains(Modifiers::CTRL)
                    && !self.modifiers.contains(Modifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        };
        KeyEvent::new(code, Modifiers::from(ct.modifiers))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

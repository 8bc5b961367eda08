//! Keyboard event model
//!
//! Key identity, modifier flags, and a binary prevent-default,
//! mirroring what a host event stream delivers.

/// Key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, case as typed
    Char(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Tab,
    Enter,
    Escape,
}

/// Event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// One keyboard event
///
/// Cancellation is binary and immediate: a handler that acts calls
/// `prevent_default` once; nothing else is communicated back.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    default_prevented: bool,
}

impl KeyEvent {
    /// A keydown with no modifiers
    pub fn down(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
            default_prevented: false,
        }
    }

    /// A keyup with no modifiers
    pub fn up(key: Key) -> Self {
        Self {
            phase: KeyPhase::Up,
            ..Self::down(key)
        }
    }

    /// Keydown for a typed character; uppercase implies shift
    pub fn char(ch: char) -> Self {
        Self {
            shift: ch.is_ascii_uppercase(),
            ..Self::down(Key::Char(ch))
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Suppress the host's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Check if the default action was suppressed
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

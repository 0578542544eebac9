//! Portable input event types for pointer and keyboard

use bitflags::bitflags;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

// ============================================================================
// Modifiers
// ============================================================================

bitflags! {
    /// Modifier keys held during an event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Modifiers: u8 {
        /// Control key
        const CTRL = 1 << 0;
        /// Alt key (Option on macOS)
        const ALT = 1 << 1;
        /// Shift key
        const SHIFT = 1 << 2;
        /// Super key (Command on macOS, Windows key on Windows)
        const SUPER = 1 << 3;
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// A mouse button in canonical numbering
///
/// Button 1 is the primary (left) button, 2 the middle button, 3 the
/// secondary (right) button. Buttons 4 and up are extra buttons numbered
/// in the order the hardware reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MouseButton(u32);

impl MouseButton {
    pub const LEFT: MouseButton = MouseButton(1);
    pub const MIDDLE: MouseButton = MouseButton(2);
    pub const RIGHT: MouseButton = MouseButton(3);

    /// Create a button from its canonical index
    ///
    /// Returns `None` for index 0, which names no button.
    pub const fn new(index: u32) -> Option<Self> {
        if index == 0 {
            None
        } else {
            Some(MouseButton(index))
        }
    }

    /// Create a button from a zero-based position (0 becomes button 1)
    pub const fn from_zero_based(n: u32) -> Self {
        MouseButton(n.saturating_add(1))
    }

    /// Canonical button index (always >= 1)
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Buttons held during a mouse event, in discovery order
pub type HeldButtons = SmallVec<[MouseButton; 4]>;

/// A normalized pointer event
///
/// At most one of `down` and `up` is set. Neither is set for a plain move or
/// drag. `held` never contains the button named by `down` or `up`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseEvent {
    /// Position in area-local coordinates
    pub pos: Point,
    /// Button that was pressed, if this is a press
    pub down: Option<MouseButton>,
    /// Button that was released, if this is a release
    pub up: Option<MouseButton>,
    /// Click count of a press (1 single, 2 double, ...); 0 otherwise
    pub count: u32,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Other buttons currently held down
    pub held: HeldButtons,
}

impl MouseEvent {
    /// The button this event is about, if any
    pub fn acting_button(&self) -> Option<MouseButton> {
        self.down.or(self.up)
    }

    /// Whether this is a move or drag rather than a press or release
    pub fn is_motion(&self) -> bool {
        self.down.is_none() && self.up.is_none()
    }
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Key press/release state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyState {
    /// Key was pressed
    #[default]
    Pressed,
    /// Key was released
    Released,
}

impl KeyState {
    /// Whether this is a release
    pub fn is_up(self) -> bool {
        self == KeyState::Released
    }
}

/// Keys that do not produce a character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtKey {
    Escape,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Numeric keypad
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    NDot,
    NEnter,
    NAdd,
    NSubtract,
    NMultiply,
    NDivide,
}

/// What a key event is about
///
/// Ordinary key events carry either a character or an extended key;
/// modifier-only events carry the single modifier that changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyIdentity {
    /// A key that types a character (layout-independent, lowercase)
    Char(char),
    /// A non-printing key
    Ext(ExtKey),
    /// A modifier key by itself
    Modifier(Modifiers),
}

/// A normalized keyboard event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyEvent {
    /// The key that was pressed or released
    pub key: KeyIdentity,
    /// Modifier keys held during this event
    ///
    /// For modifier-only events this excludes the modifier in `key`.
    pub modifiers: Modifiers,
    /// Whether the key was pressed or released
    pub state: KeyState,
}

impl KeyEvent {
    /// The typed character, for ordinary character keys
    pub fn char(&self) -> Option<char> {
        match self.key {
            KeyIdentity::Char(c) => Some(c),
            _ => None,
        }
    }

    /// The extended key, for non-printing keys
    pub fn ext_key(&self) -> Option<ExtKey> {
        match self.key {
            KeyIdentity::Ext(k) => Some(k),
            _ => None,
        }
    }

    /// The modifier, for modifier-only events
    pub fn modifier(&self) -> Option<Modifiers> {
        match self.key {
            KeyIdentity::Modifier(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_up(&self) -> bool {
        self.state.is_up()
    }
}

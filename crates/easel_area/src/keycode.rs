//! Virtual key code tables
//!
//! Two read-only tables keyed by hardware virtual key code: one for ordinary
//! keys (characters and [`ExtKey`]s), one for modifier keys. Character keys
//! are identified by their US-ANSI position, not by the active keyboard
//! layout. Both tables are built once on first use and never change.

use std::sync::OnceLock;

use easel_platform::{ExtKey, KeyIdentity, Modifiers};
use rustc_hash::FxHashMap;

use easel_platform::KeyIdentity::{Char, Ext};

const KEYS: &[(u16, KeyIdentity)] = &[
    // Letters
    (0x00, Char('a')),
    (0x0B, Char('b')),
    (0x08, Char('c')),
    (0x02, Char('d')),
    (0x0E, Char('e')),
    (0x03, Char('f')),
    (0x05, Char('g')),
    (0x04, Char('h')),
    (0x22, Char('i')),
    (0x26, Char('j')),
    (0x28, Char('k')),
    (0x25, Char('l')),
    (0x2E, Char('m')),
    (0x2D, Char('n')),
    (0x1F, Char('o')),
    (0x23, Char('p')),
    (0x0C, Char('q')),
    (0x0F, Char('r')),
    (0x01, Char('s')),
    (0x11, Char('t')),
    (0x20, Char('u')),
    (0x09, Char('v')),
    (0x0D, Char('w')),
    (0x07, Char('x')),
    (0x10, Char('y')),
    (0x06, Char('z')),
    // Digits row
    (0x1D, Char('0')),
    (0x12, Char('1')),
    (0x13, Char('2')),
    (0x14, Char('3')),
    (0x15, Char('4')),
    (0x17, Char('5')),
    (0x16, Char('6')),
    (0x1A, Char('7')),
    (0x1C, Char('8')),
    (0x19, Char('9')),
    // Punctuation
    (0x1B, Char('-')),
    (0x18, Char('=')),
    (0x21, Char('[')),
    (0x1E, Char(']')),
    (0x27, Char('\'')),
    (0x29, Char(';')),
    (0x2A, Char('\\')),
    (0x2B, Char(',')),
    (0x2C, Char('/')),
    (0x2F, Char('.')),
    (0x32, Char('`')),
    // Whitespace and editing
    (0x24, Char('\n')),
    (0x30, Char('\t')),
    (0x31, Char(' ')),
    (0x33, Char('\u{8}')),
    // Navigation
    (0x35, Ext(ExtKey::Escape)),
    (0x72, Ext(ExtKey::Insert)),
    (0x75, Ext(ExtKey::Delete)),
    (0x73, Ext(ExtKey::Home)),
    (0x77, Ext(ExtKey::End)),
    (0x74, Ext(ExtKey::PageUp)),
    (0x79, Ext(ExtKey::PageDown)),
    (0x7E, Ext(ExtKey::Up)),
    (0x7D, Ext(ExtKey::Down)),
    (0x7B, Ext(ExtKey::Left)),
    (0x7C, Ext(ExtKey::Right)),
    // Function keys
    (0x7A, Ext(ExtKey::F1)),
    (0x78, Ext(ExtKey::F2)),
    (0x63, Ext(ExtKey::F3)),
    (0x76, Ext(ExtKey::F4)),
    (0x60, Ext(ExtKey::F5)),
    (0x61, Ext(ExtKey::F6)),
    (0x62, Ext(ExtKey::F7)),
    (0x64, Ext(ExtKey::F8)),
    (0x65, Ext(ExtKey::F9)),
    (0x6D, Ext(ExtKey::F10)),
    (0x67, Ext(ExtKey::F11)),
    (0x6F, Ext(ExtKey::F12)),
    // Keypad
    (0x52, Ext(ExtKey::N0)),
    (0x53, Ext(ExtKey::N1)),
    (0x54, Ext(ExtKey::N2)),
    (0x55, Ext(ExtKey::N3)),
    (0x56, Ext(ExtKey::N4)),
    (0x57, Ext(ExtKey::N5)),
    (0x58, Ext(ExtKey::N6)),
    (0x59, Ext(ExtKey::N7)),
    (0x5B, Ext(ExtKey::N8)),
    (0x5C, Ext(ExtKey::N9)),
    (0x41, Ext(ExtKey::NDot)),
    (0x4C, Ext(ExtKey::NEnter)),
    (0x45, Ext(ExtKey::NAdd)),
    (0x4E, Ext(ExtKey::NSubtract)),
    (0x43, Ext(ExtKey::NMultiply)),
    (0x4B, Ext(ExtKey::NDivide)),
];

const MODIFIER_KEYS: &[(u16, Modifiers)] = &[
    (0x37, Modifiers::SUPER), // Command
    (0x36, Modifiers::SUPER), // right Command
    (0x38, Modifiers::SHIFT),
    (0x3C, Modifiers::SHIFT), // right Shift
    (0x3A, Modifiers::ALT),   // Option
    (0x3D, Modifiers::ALT),   // right Option
    (0x3B, Modifiers::CTRL),
    (0x3E, Modifiers::CTRL), // right Control
];

fn key_table() -> &'static FxHashMap<u16, KeyIdentity> {
    static TABLE: OnceLock<FxHashMap<u16, KeyIdentity>> = OnceLock::new();
    TABLE.get_or_init(|| KEYS.iter().copied().collect())
}

fn modifier_table() -> &'static FxHashMap<u16, Modifiers> {
    static TABLE: OnceLock<FxHashMap<u16, Modifiers>> = OnceLock::new();
    TABLE.get_or_init(|| MODIFIER_KEYS.iter().copied().collect())
}

/// The ordinary key for a virtual key code
///
/// Returns `None` for modifier keys and for keys with no portable meaning.
pub fn key(code: u16) -> Option<KeyIdentity> {
    key_table().get(&code).copied()
}

/// The modifier a virtual key code toggles
pub fn modifier(code: u16) -> Option<Modifiers> {
    modifier_table().get(&code).copied()
}

/// All ordinary key mappings, in table order
pub fn keys() -> impl Iterator<Item = (u16, KeyIdentity)> {
    KEYS.iter().copied()
}

/// All modifier key mappings, in table order
pub fn modifier_keys() -> impl Iterator<Item = (u16, Modifiers)> {
    MODIFIER_KEYS.iter().copied()
}

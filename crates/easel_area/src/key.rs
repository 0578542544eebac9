//! Keyboard event synthesis
//!
//! Ordinary keys arrive as separate key-down and key-up messages. Modifier
//! keys arrive as a single flags-changed message for both directions; the
//! direction is read from the modifier mask the event carries, not from any
//! remembered state.

use easel_platform::{KeyEvent, KeyIdentity, KeyState};

use crate::decode;
use crate::keycode;
use crate::native::NativeEvent;

/// Build the portable event for a key-down or key-up message
///
/// Returns `None` when the key code has no portable key. Modifier keys land
/// here too on some platforms and are dropped; they are reported through
/// [`flags_changed_event`].
pub fn key_event<E>(event: &E, state: KeyState) -> Option<KeyEvent>
where
    E: NativeEvent + ?Sized,
{
    let code = event.key_code();
    let Some(key) = keycode::key(code) else {
        tracing::trace!(code, ?state, "dropping key event for unmapped key code");
        return None;
    };
    Some(KeyEvent {
        key,
        modifiers: decode::modifiers(event.modifier_flags()),
        state,
    })
}

/// Build the portable event for a flags-changed message
///
/// The changed modifier is reported in the event's key and removed from its
/// modifier set. Returns `None` for key codes that are not modifier keys
/// (Caps Lock, Fn).
pub fn flags_changed_event<E>(event: &E) -> Option<KeyEvent>
where
    E: NativeEvent + ?Sized,
{
    let code = event.key_code();
    let Some(modifier) = keycode::modifier(code) else {
        tracing::trace!(code, "dropping flags-changed event for unmapped key code");
        return None;
    };
    let held = decode::modifiers(event.modifier_flags());
    let state = if held.contains(modifier) {
        KeyState::Pressed
    } else {
        KeyState::Released
    };
    Some(KeyEvent {
        key: KeyIdentity::Modifier(modifier),
        modifiers: held.difference(modifier),
        state,
    })
}

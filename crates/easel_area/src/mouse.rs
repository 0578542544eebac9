//! Pointer event synthesis

use easel_platform::{MouseEvent, Point, Rect};

use crate::decode;
use crate::native::NativeEvent;

/// Which native pointer message is being translated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    /// Pointer moved or was dragged
    Motion,
    /// A button was pressed
    Down,
    /// A button was released
    Up,
}

/// Build the portable event for a native pointer message
///
/// `bounds` is the area's live bounds. The platform keeps delivering drag
/// events after the pointer leaves the area; those land outside `bounds`
/// and are dropped rather than clamped.
///
/// Positions are floored, not truncated: a pointer at x = -0.5 is at pixel
/// -1 and therefore outside the area.
pub fn mouse_event<E>(event: &E, action: MouseAction, bounds: Rect) -> Option<MouseEvent>
where
    E: NativeEvent + ?Sized,
{
    let (x, y) = event.location();
    let pos = Point::new(x.floor() as i32, y.floor() as i32);
    if !pos.is_in(bounds) {
        tracing::trace!(?pos, ?bounds, ?action, "dropping pointer event outside area");
        return None;
    }

    let mut me = MouseEvent {
        pos,
        modifiers: decode::modifiers(event.modifier_flags()),
        ..Default::default()
    };
    let which = decode::button(event.button_number());
    match action {
        MouseAction::Down => {
            me.down = Some(which);
            me.count = event.click_count();
        }
        MouseAction::Up => me.up = Some(which),
        MouseAction::Motion => {}
    }
    me.held = decode::held_buttons(event.pressed_mouse_buttons(), me.acting_button());
    Some(me)
}

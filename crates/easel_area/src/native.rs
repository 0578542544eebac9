//! Native collaborator traits
//!
//! The area core never talks to a windowing system directly. A backend
//! implements these traits over its native objects: one [`NativeView`] for
//! the document view that displays the area, one [`NativeScrollView`] for the
//! scroll view wrapping it, and [`NativeEvent`] for the event objects its
//! callbacks receive.
//!
//! Coordinates handed across these traits are already in the toolkit's
//! top-left-origin convention.

use easel_platform::{PixelBuffer, Point, Rect, Size};

#[cfg(doc)]
use crate::registry::AreaRegistry;

/// Opaque identity of a native view
///
/// Backends pick any value that is unique among live views (a pointer
/// address, a window-system id). The [`AreaRegistry`] maps it back to the
/// owning area when a native callback fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeHandle(pub u64);

/// Opaque identity of a native parent container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParentHandle(pub u64);

/// A native redraw rectangle in origin + extent form
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NativeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NativeRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to corner form, widened to whole pixels
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            (self.x + self.width).ceil() as i32,
            (self.y + self.height).ceil() as i32,
        )
    }
}

/// A native input event as delivered to a view callback
pub trait NativeEvent {
    /// Pointer location in view-local coordinates
    fn location(&self) -> (f64, f64);

    /// Raw modifier flag bitmask
    fn modifier_flags(&self) -> u64;

    /// Zero-based native number of the button this event is about
    fn button_number(&self) -> u32;

    /// Native click count of a press
    fn click_count(&self) -> u32;

    /// Bitmask of buttons pressed right now, bit n for native button n
    fn pressed_mouse_buttons(&self) -> u64;

    /// Hardware virtual key code
    fn key_code(&self) -> u16;
}

/// The native document view an area draws into
pub trait NativeView {
    /// Identity the view is registered under
    fn handle(&self) -> NativeHandle;

    /// Current frame size, as the view reports it right now
    fn frame_size(&self) -> Size;

    /// Move and resize the view within its scroll view
    fn set_frame(&mut self, frame: Rect);

    /// Invalidate the whole view so the platform issues a redraw request
    fn set_needs_display(&mut self);

    /// Composite `buffer` into the view with its top-left corner at `at`
    fn draw_image(&mut self, buffer: &PixelBuffer, at: Point);
}

/// The native scroll view wrapping a document view
pub trait NativeScrollView {
    /// Install the document view this scroll view displays
    fn set_document_view(&mut self, document: NativeHandle);

    /// Whether the scroll view clears behind the document view
    fn set_draws_background(&mut self, draws: bool);

    /// Reparent the scroll view
    fn set_parent(&mut self, parent: ParentHandle);

    /// Current frame within the parent
    fn frame(&self) -> Rect;

    /// Move and resize the scroll view within its parent
    fn set_frame(&mut self, frame: Rect);
}

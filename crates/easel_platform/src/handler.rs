//! The application side of an area

use crate::geometry::Rect;
use crate::input::{KeyEvent, MouseEvent};
use crate::pixels::PixelBuffer;

/// Callbacks an application supplies to draw an area and receive its input
///
/// All methods are called on the UI thread, in the order the platform
/// delivered the underlying events. The area never retains the handler's
/// return values beyond the call that produced them.
pub trait Handler {
    /// Produce the pixels for `clip`
    ///
    /// `clip` is already intersected with the area's bounds and is never
    /// empty. The returned buffer is composited with its top-left corner at
    /// `clip.min`.
    fn paint(&mut self, clip: Rect) -> PixelBuffer;

    /// A pointer moved, was dragged, pressed, or released inside the area
    fn mouse(&mut self, event: MouseEvent);

    /// A key or modifier key changed state while the area had focus
    fn key(&mut self, event: KeyEvent);
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn paint(&mut self, clip: Rect) -> PixelBuffer {
        (**self).paint(clip)
    }

    fn mouse(&mut self, event: MouseEvent) {
        (**self).mouse(event)
    }

    fn key(&mut self, event: KeyEvent) {
        (**self).key(event)
    }
}

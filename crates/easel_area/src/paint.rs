//! Redraw handling
//!
//! A native redraw request names a dirty rectangle in origin + extent form.
//! It is converted to corner form, clipped to the view's live frame, and only
//! then handed to the [`Handler`]. The handler's pixels are composited back
//! into the view at the clipped rectangle's origin.

use easel_platform::{Handler, Rect};

use crate::native::{NativeRect, NativeView};

/// Clip a native redraw rectangle to `bounds`
///
/// Returns `None` when nothing of the request is visible.
pub fn clip_rect(requested: NativeRect, bounds: Rect) -> Option<Rect> {
    let clip = bounds.intersect(requested.to_rect());
    if clip.is_empty() {
        None
    } else {
        Some(clip)
    }
}

/// Answer a native redraw request
///
/// The view does not need clearing first; the scroll view behind it does
/// that. Returns whether the handler was asked to paint.
pub fn draw_rect<H, V>(handler: &mut H, view: &mut V, requested: NativeRect) -> bool
where
    H: Handler + ?Sized,
    V: NativeView + ?Sized,
{
    let bounds = Rect::from_size(view.frame_size());
    let Some(clip) = clip_rect(requested, bounds) else {
        tracing::trace!(?requested, ?bounds, "redraw request outside area; skipping paint");
        return false;
    };
    let buffer = handler.paint(clip);
    view.draw_image(&buffer, clip.min);
    true
}

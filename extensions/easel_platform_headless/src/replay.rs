//! Replaying traces against a registered area

use easel_area::{AreaRegistry, LayoutParticipant, NativeHandle, NativeRect, Sizing};

use crate::error::Result;
use crate::event::NativeMessage;

/// What happened during a replay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Messages fed to the area
    pub messages: usize,
    /// Callbacks that reached the handler
    pub dispatched: usize,
    /// Callbacks the area filtered out
    pub dropped: usize,
}

/// Deliver one message to the area registered for `handle`
///
/// Returns whether the handler was invoked. Size, layout and repaint
/// messages never invoke it directly.
pub fn deliver(
    registry: &mut AreaRegistry,
    handle: NativeHandle,
    message: &NativeMessage,
) -> Result<bool> {
    let dispatched = match message {
        NativeMessage::DrawRect {
            x,
            y,
            width,
            height,
        } => registry.draw_rect(handle, NativeRect::new(*x, *y, *width, *height))?,
        NativeMessage::MouseMoved(event) => registry.mouse_moved_or_dragged(handle, event)?,
        NativeMessage::MouseDown(event) => registry.mouse_down(handle, event)?,
        NativeMessage::MouseUp(event) => registry.mouse_up(handle, event)?,
        NativeMessage::KeyDown(event) => registry.key_down(handle, event)?,
        NativeMessage::KeyUp(event) => registry.key_up(handle, event)?,
        NativeMessage::FlagsChanged(event) => registry.flags_changed(handle, event)?,
        NativeMessage::RepaintAll => {
            registry.area_mut(handle)?.repaint_all();
            false
        }
        NativeMessage::SetSize { width, height } => {
            registry.area_mut(handle)?.set_size(*width, *height);
            false
        }
        NativeMessage::Layout {
            x,
            y,
            width,
            height,
        } => {
            let area = registry.area_mut(handle)?;
            let sizing = Sizing::default();
            for allocation in area.allocate(*x, *y, *width, *height, &sizing) {
                area.commit_resize(&allocation, &sizing);
            }
            false
        }
    };
    Ok(dispatched)
}

/// Deliver every message in order, stopping at the first error
pub fn replay(
    registry: &mut AreaRegistry,
    handle: NativeHandle,
    messages: &[NativeMessage],
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    for message in messages {
        stats.messages += 1;
        if deliver(registry, handle, message)? {
            stats.dispatched += 1;
        } else if is_callback(message) {
            stats.dropped += 1;
        }
    }
    tracing::info!(
        messages = stats.messages,
        dispatched = stats.dispatched,
        dropped = stats.dropped,
        "replay finished"
    );
    Ok(stats)
}

fn is_callback(message: &NativeMessage) -> bool {
    !matches!(
        message,
        NativeMessage::RepaintAll | NativeMessage::SetSize { .. } | NativeMessage::Layout { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HeadlessEvent;
    use crate::headless_area;
    use easel_area::{AreaConfig, AreaError};
    use easel_platform::{Handler, KeyEvent, MouseEvent, PixelBuffer, Rect};

    struct Blue;

    impl Handler for Blue {
        fn paint(&mut self, clip: Rect) -> PixelBuffer {
            PixelBuffer::filled(clip, [0, 0, 255, 255])
        }
        fn mouse(&mut self, _event: MouseEvent) {}
        fn key(&mut self, _event: KeyEvent) {}
    }

    #[test]
    fn test_replay_counts() {
        let (area, view, scroll) =
            headless_area(AreaConfig::new("t").size(20, 20), Box::new(Blue), NativeHandle(9))
                .unwrap();
        let mut registry = AreaRegistry::new();
        registry.insert(area).unwrap();

        let messages = vec![
            NativeMessage::DrawRect {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            NativeMessage::MouseMoved(HeadlessEvent {
                x: 50.0,
                y: 5.0,
                ..Default::default()
            }),
            NativeMessage::Layout {
                x: 1,
                y: 2,
                width: 3,
                height: 4,
            },
            NativeMessage::RepaintAll,
        ];
        let stats = replay(&mut registry, NativeHandle(9), &messages).unwrap();
        assert_eq!(
            stats,
            ReplayStats {
                messages: 4,
                dispatched: 1,
                dropped: 1
            }
        );
        assert_eq!(scroll.state().frame, Rect::new(1, 2, 4, 6));
        assert!(view.take_needs_display());
        assert_eq!(view.surface().blits, 1);
    }

    #[test]
    fn test_replay_unknown_handle() {
        let mut registry = AreaRegistry::new();
        let err = replay(&mut registry, NativeHandle(1), &[NativeMessage::RepaintAll]).unwrap_err();
        assert!(matches!(
            err,
            crate::HeadlessError::Area(AreaError::UnknownView(NativeHandle(1)))
        ));
    }
}

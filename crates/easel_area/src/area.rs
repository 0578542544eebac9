//! The area control
//!
//! An [`Area`] ties together an application [`Handler`], the native document
//! view it draws into, and the [`Scroller`] that places it in its parent.
//! Native callbacks reach it through the [`AreaRegistry`](crate::AreaRegistry),
//! layout passes through [`LayoutParticipant`].

use easel_platform::{Handler, KeyState, Rect, Size};

use crate::config::AreaConfig;
use crate::error::Result;
use crate::key;
use crate::layout::{
    base_allocate, base_get_aux_resize_info, Allocation, LayoutParticipant, Sizing,
};
use crate::mouse::{self, MouseAction};
use crate::native::{
    NativeEvent, NativeHandle, NativeRect, NativeScrollView, NativeView, ParentHandle,
};
use crate::paint;
use crate::scroll::Scroller;

/// A custom-drawn canvas inside a scroll view
pub struct Area {
    name: String,
    size: Size,
    handler: Box<dyn Handler>,
    view: Box<dyn NativeView>,
    scroller: Scroller,
}

impl Area {
    /// Create an area and size its document view from `config`
    pub fn new(
        config: AreaConfig,
        handler: Box<dyn Handler>,
        view: Box<dyn NativeView>,
        scroll_view: Box<dyn NativeScrollView>,
    ) -> Result<Self> {
        config.validate()?;
        let scroller = Scroller::new(scroll_view, view.handle(), config.draws_background);
        let mut area = Self {
            name: config.name,
            size: Size::ZERO,
            handler,
            view,
            scroller,
        };
        area.set_size(config.width, config.height);
        Ok(area)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the document view this area draws into
    pub fn native_handle(&self) -> NativeHandle {
        self.view.handle()
    }

    /// The size last given to [`set_size`](Self::set_size)
    pub fn size(&self) -> Size {
        self.size
    }

    /// Live bounds of the document view, in area-local coordinates
    ///
    /// Usually `(0, 0)-size`, but the native side may have changed the
    /// frame since the last [`set_size`](Self::set_size).
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.view.frame_size())
    }

    /// Resize the area and push the new frame to the document view
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = Size::new(width, height);
        tracing::debug!(area = %self.name, width, height, "setting area size");
        self.view.set_frame(Rect::from_size(self.size));
    }

    /// Invalidate the whole area
    ///
    /// The handler is asked to paint when the platform gets around to it,
    /// not during this call.
    pub fn repaint_all(&mut self) {
        self.view.set_needs_display();
    }

    /// Move the area (through its scroll view) under a new parent
    pub fn set_parent(&mut self, parent: ParentHandle) {
        self.scroller.set_parent(parent);
    }

    /// Native redraw request. Returns whether the handler painted.
    pub fn draw_rect(&mut self, requested: NativeRect) -> bool {
        paint::draw_rect(&mut *self.handler, &mut *self.view, requested)
    }

    /// Native pointer message. Returns whether an event was dispatched.
    pub fn mouse_event<E>(&mut self, event: &E, action: MouseAction) -> bool
    where
        E: NativeEvent + ?Sized,
    {
        match mouse::mouse_event(event, action, self.bounds()) {
            Some(me) => {
                self.handler.mouse(me);
                true
            }
            None => false,
        }
    }

    /// Native key-down or key-up message. Returns whether an event was dispatched.
    pub fn key_event<E>(&mut self, event: &E, state: KeyState) -> bool
    where
        E: NativeEvent + ?Sized,
    {
        match key::key_event(event, state) {
            Some(ke) => {
                self.handler.key(ke);
                true
            }
            None => false,
        }
    }

    /// Native flags-changed message. Returns whether an event was dispatched.
    pub fn flags_changed<E>(&mut self, event: &E) -> bool
    where
        E: NativeEvent + ?Sized,
    {
        match key::flags_changed_event(event) {
            Some(ke) => {
                self.handler.key(ke);
                true
            }
            None => false,
        }
    }
}

impl LayoutParticipant for Area {
    /// An area has no natural content size; it wants the size it was given
    fn preferred_size(&self, _sizing: &Sizing) -> Size {
        self.size
    }

    fn allocate(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        sizing: &Sizing,
    ) -> Vec<Allocation> {
        base_allocate(self, x, y, width, height, sizing)
    }

    fn commit_resize(&mut self, allocation: &Allocation, _sizing: &Sizing) {
        self.scroller
            .commit_resize(allocation, &mut *self.view, self.size);
    }

    fn get_aux_resize_info(&self, sizing: &mut Sizing) {
        base_get_aux_resize_info(self, sizing)
    }

    fn frame(&self) -> Rect {
        self.scroller.frame()
    }
}

impl std::fmt::Debug for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Area")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("handle", &self.native_handle())
            .field("scroller", &self.scroller)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::NATIVE_SHIFT;
    use crate::layout::Alignment;
    use crate::testing::{FakeEvent, FakeScrollView, FakeView, RecordingHandler};
    use easel_platform::{KeyIdentity, Modifiers};

    struct Rig {
        area: Area,
        handler: RecordingHandler,
        view: FakeView,
        scroll: FakeScrollView,
    }

    fn rig(width: u32, height: u32) -> Rig {
        let handler = RecordingHandler::default();
        let view = FakeView::new(42);
        let scroll = FakeScrollView::default();
        let area = Area::new(
            AreaConfig::new("test").size(width, height),
            Box::new(handler.clone()),
            Box::new(view.clone()),
            Box::new(scroll.clone()),
        )
        .unwrap();
        Rig {
            area,
            handler,
            view,
            scroll,
        }
    }

    #[test]
    fn test_new_pushes_initial_frame() {
        let r = rig(400, 300);
        assert_eq!(r.view.state.borrow().frame, Rect::new(0, 0, 400, 300));
        assert_eq!(r.scroll.state.borrow().document, Some(NativeHandle(42)));
        assert_eq!(r.area.native_handle(), NativeHandle(42));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result = Area::new(
            AreaConfig::new(""),
            Box::new(RecordingHandler::default()),
            Box::new(FakeView::new(1)),
            Box::new(FakeScrollView::default()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_preferred_size_tracks_set_size() {
        let mut r = rig(10, 10);
        for (w, h) in [(0, 0), (1, 999), (640, 480), (10_000, 3)] {
            r.area.set_size(w, h);
            assert_eq!(r.area.preferred_size(&Sizing::default()), Size::new(w, h));
            assert_eq!(r.view.state.borrow().frame, Rect::from_size(Size::new(w, h)));
        }
    }

    #[test]
    fn test_layout_pass() {
        let mut r = rig(640, 480);
        let sizing = Sizing::default();
        let allocs = r.area.allocate(5, 10, 200, 150, &sizing);
        assert_eq!(allocs.len(), 1);
        r.area.commit_resize(&allocs[0], &sizing);

        assert_eq!(r.scroll.state.borrow().frame, Rect::new(5, 10, 205, 160));
        assert_eq!(r.view.state.borrow().frame, Rect::new(0, 0, 640, 480));
        assert_eq!(r.area.preferred_size(&sizing), Size::new(640, 480));

        let mut sizing = Sizing::default();
        r.area.get_aux_resize_info(&mut sizing);
        assert_eq!(
            sizing.neighbor_align,
            Some(Alignment {
                rect: Rect::new(5, 10, 205, 160),
                baseline: 0
            })
        );
    }

    #[test]
    fn test_repaint_all_invalidates_without_painting() {
        let mut r = rig(10, 10);
        r.area.repaint_all();
        assert_eq!(r.view.state.borrow().needs_display, 1);
        assert!(r.handler.calls.borrow().paints.is_empty());
    }

    #[test]
    fn test_set_parent_goes_through_scroller() {
        let mut r = rig(10, 10);
        r.area.set_parent(ParentHandle(3));
        assert_eq!(r.scroll.state.borrow().parent, Some(ParentHandle(3)));
    }

    #[test]
    fn test_mouse_uses_live_frame() {
        let mut r = rig(400, 300);
        let inside = FakeEvent {
            location: (350.0, 250.0),
            ..Default::default()
        };
        assert!(r.area.mouse_event(&inside, MouseAction::Motion));

        r.view.state.borrow_mut().frame = Rect::new(0, 0, 100, 100);
        assert!(!r.area.mouse_event(&inside, MouseAction::Motion));
        assert_eq!(r.handler.calls.borrow().mice.len(), 1);
    }

    #[test]
    fn test_key_paths_dispatch_in_order() {
        let mut r = rig(10, 10);
        let shift_down = FakeEvent {
            key_code: 0x38,
            flags: NATIVE_SHIFT,
            ..Default::default()
        };
        let a_down = FakeEvent {
            key_code: 0x00,
            flags: NATIVE_SHIFT,
            ..Default::default()
        };
        let caps = FakeEvent {
            key_code: 0x39,
            ..Default::default()
        };
        assert!(r.area.flags_changed(&shift_down));
        assert!(r.area.key_event(&a_down, KeyState::Pressed));
        assert!(!r.area.key_event(&caps, KeyState::Pressed));
        assert!(!r.area.flags_changed(&caps));

        let calls = r.handler.calls.borrow();
        assert_eq!(calls.keys.len(), 2);
        assert_eq!(calls.keys[0].key, KeyIdentity::Modifier(Modifiers::SHIFT));
        assert_eq!(calls.keys[0].modifiers, Modifiers::empty());
        assert_eq!(calls.keys[1].key, KeyIdentity::Char('a'));
        assert_eq!(calls.keys[1].modifiers, Modifiers::SHIFT);
    }
}

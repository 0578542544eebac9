//! In-crate fakes for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use easel_platform::{Handler, KeyEvent, MouseEvent, PixelBuffer, Point, Rect, Size};

use crate::native::{NativeEvent, NativeHandle, NativeScrollView, NativeView, ParentHandle};

#[derive(Clone, Debug, Default)]
pub struct FakeEvent {
    pub location: (f64, f64),
    pub flags: u64,
    pub button: u32,
    pub clicks: u32,
    pub pressed: u64,
    pub key_code: u16,
}

impl NativeEvent for FakeEvent {
    fn location(&self) -> (f64, f64) {
        self.location
    }

    fn modifier_flags(&self) -> u64 {
        self.flags
    }

    fn button_number(&self) -> u32 {
        self.button
    }

    fn click_count(&self) -> u32 {
        self.clicks
    }

    fn pressed_mouse_buttons(&self) -> u64 {
        self.pressed
    }

    fn key_code(&self) -> u16 {
        self.key_code
    }
}

/// Everything a [`RecordingHandler`] was asked to do
#[derive(Debug, Default)]
pub struct Calls {
    pub paints: Vec<Rect>,
    pub mice: Vec<MouseEvent>,
    pub keys: Vec<KeyEvent>,
}

#[derive(Clone, Default)]
pub struct RecordingHandler {
    pub calls: Rc<RefCell<Calls>>,
}

impl Handler for RecordingHandler {
    fn paint(&mut self, clip: Rect) -> PixelBuffer {
        self.calls.borrow_mut().paints.push(clip);
        PixelBuffer::filled(clip, [0xff, 0, 0, 0xff])
    }

    fn mouse(&mut self, event: MouseEvent) {
        self.calls.borrow_mut().mice.push(event);
    }

    fn key(&mut self, event: KeyEvent) {
        self.calls.borrow_mut().keys.push(event);
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub frame: Rect,
    pub needs_display: usize,
    pub draws: Vec<(Rect, Point)>,
}

#[derive(Clone)]
pub struct FakeView {
    pub handle: NativeHandle,
    pub state: Rc<RefCell<ViewState>>,
}

impl FakeView {
    pub fn new(handle: u64) -> Self {
        Self {
            handle: NativeHandle(handle),
            state: Rc::default(),
        }
    }
}

impl NativeView for FakeView {
    fn handle(&self) -> NativeHandle {
        self.handle
    }

    fn frame_size(&self) -> Size {
        let f = self.state.borrow().frame;
        Size::new(f.dx().max(0) as u32, f.dy().max(0) as u32)
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.borrow_mut().frame = frame;
    }

    fn set_needs_display(&mut self) {
        self.state.borrow_mut().needs_display += 1;
    }

    fn draw_image(&mut self, buffer: &PixelBuffer, at: Point) {
        self.state.borrow_mut().draws.push((buffer.rect(), at));
    }
}

#[derive(Debug, Default)]
pub struct ScrollState {
    pub document: Option<NativeHandle>,
    pub draws_background: Option<bool>,
    pub parent: Option<ParentHandle>,
    pub frame: Rect,
}

#[derive(Clone, Default)]
pub struct FakeScrollView {
    pub state: Rc<RefCell<ScrollState>>,
}

impl NativeScrollView for FakeScrollView {
    fn set_document_view(&mut self, document: NativeHandle) {
        self.state.borrow_mut().document = Some(document);
    }

    fn set_draws_background(&mut self, draws: bool) {
        self.state.borrow_mut().draws_background = Some(draws);
    }

    fn set_parent(&mut self, parent: ParentHandle) {
        self.state.borrow_mut().parent = Some(parent);
    }

    fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.borrow_mut().frame = frame;
    }
}

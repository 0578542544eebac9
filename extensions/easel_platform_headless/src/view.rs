//! In-memory native views
//!
//! [`HeadlessView`] backs an area's document view with an [`RgbaImage`] the
//! size of its frame; handler output is alpha-blended into it. Frames larger
//! than [`MAX_SURFACE_SIDE`] on either axis keep the previous image, and blits
//! are clipped to whatever image is there. Both view types
//! are cheap handles onto shared state so a test or tool can keep a clone
//! and inspect what the area did after handing the original over.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use easel_area::{NativeHandle, NativeScrollView, NativeView, ParentHandle};
use easel_platform::{PixelBuffer, Point, Rect, Size};
use image::{imageops, Pixel, Rgba, RgbaImage};

/// Largest surface width or height that gets its own pixels
pub const MAX_SURFACE_SIDE: u32 = 16384;

/// Backing store of a [`HeadlessView`]
#[derive(Debug)]
pub struct Surface {
    /// Pixels, the size of `frame` unless the frame is too large to back
    pub image: RgbaImage,
    /// Frame within the scroll view
    pub frame: Rect,
    /// Set by `set_needs_display`, cleared by [`HeadlessView::take_needs_display`]
    pub needs_display: bool,
    /// Number of buffers composited so far
    pub blits: usize,
}

/// A document view that draws into memory
#[derive(Clone, Debug)]
pub struct HeadlessView {
    handle: NativeHandle,
    surface: Rc<RefCell<Surface>>,
}

impl HeadlessView {
    pub fn new(handle: NativeHandle) -> Self {
        Self {
            handle,
            surface: Rc::new(RefCell::new(Surface {
                image: RgbaImage::new(0, 0),
                frame: Rect::ZERO,
                needs_display: false,
                blits: 0,
            })),
        }
    }

    pub fn surface(&self) -> Ref<'_, Surface> {
        self.surface.borrow()
    }

    /// Copy of the current pixels
    pub fn snapshot(&self) -> RgbaImage {
        self.surface.borrow().image.clone()
    }

    /// Whether the view was invalidated since the last call
    pub fn take_needs_display(&self) -> bool {
        std::mem::take(&mut self.surface.borrow_mut().needs_display)
    }

    /// Change the frame from the platform side, as a container might
    pub fn platform_resize(&self, frame: Rect) {
        resize_surface(&mut self.surface.borrow_mut(), frame);
    }
}

fn frame_extent(frame: Rect) -> Size {
    Size::new(frame.dx().max(0) as u32, frame.dy().max(0) as u32)
}

fn can_back(size: Size) -> bool {
    size.width <= MAX_SURFACE_SIDE
        && size.height <= MAX_SURFACE_SIDE
        && (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|n| n.checked_mul(4))
            .is_some()
}

fn resize_surface(surface: &mut Surface, frame: Rect) {
    surface.frame = frame;
    let size = frame_extent(frame);
    if surface.image.dimensions() == (size.width, size.height) {
        return;
    }
    if !can_back(size) {
        tracing::warn!(?size, "frame too large for a headless surface; keeping old pixels");
        return;
    }
    let mut image = RgbaImage::new(size.width, size.height);
    imageops::replace(&mut image, &surface.image, 0, 0);
    surface.image = image;
}

impl NativeView for HeadlessView {
    fn handle(&self) -> NativeHandle {
        self.handle
    }

    fn frame_size(&self) -> Size {
        frame_extent(self.surface.borrow().frame)
    }

    fn set_frame(&mut self, frame: Rect) {
        resize_surface(&mut self.surface.borrow_mut(), frame);
    }

    fn set_needs_display(&mut self) {
        self.surface.borrow_mut().needs_display = true;
    }

    fn draw_image(&mut self, buffer: &PixelBuffer, at: Point) {
        let mut surface = self.surface.borrow_mut();
        let (sw, sh) = surface.image.dimensions();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let (tx, ty) = (at.x + x, at.y + y);
                if tx < 0 || ty < 0 || tx as u32 >= sw || ty as u32 >= sh {
                    continue;
                }
                if let Some(px) = buffer.pixel(x, y) {
                    surface
                        .image
                        .get_pixel_mut(tx as u32, ty as u32)
                        .blend(&Rgba(px));
                }
            }
        }
        surface.blits += 1;
    }
}

/// State of a [`HeadlessScrollView`]
#[derive(Debug, Default)]
pub struct ScrollState {
    pub document: Option<NativeHandle>,
    pub draws_background: bool,
    pub parent: Option<ParentHandle>,
    pub frame: Rect,
}

/// A scroll view that records what it was told
#[derive(Clone, Debug, Default)]
pub struct HeadlessScrollView {
    state: Rc<RefCell<ScrollState>>,
}

impl HeadlessScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, ScrollState> {
        self.state.borrow()
    }
}

impl NativeScrollView for HeadlessScrollView {
    fn set_document_view(&mut self, document: NativeHandle) {
        self.state.borrow_mut().document = Some(document);
    }

    fn set_draws_background(&mut self, draws: bool) {
        self.state.borrow_mut().draws_background = draws;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_frame_resizes_surface_and_keeps_pixels() {
        let mut view = HeadlessView::new(NativeHandle(1));
        view.set_frame(Rect::new(0, 0, 4, 4));
        let dot = PixelBuffer::filled(Rect::new(0, 0, 1, 1), [0, 255, 0, 255]);
        view.draw_image(&dot, Point::ZERO);
        view.set_frame(Rect::new(0, 0, 8, 2));
        assert_eq!(view.frame_size(), Size::new(8, 2));
        assert_eq!(view.snapshot().get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_draw_image_clips_to_surface() {
        let mut view = HeadlessView::new(NativeHandle(1));
        view.set_frame(Rect::new(0, 0, 4, 4));
        let buf = PixelBuffer::filled(Rect::new(2, 2, 6, 6), [255, 0, 0, 255]);
        view.draw_image(&buf, Point::new(2, 2));
        let img = view.snapshot();
        assert_eq!(img.get_pixel(3, 3), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(view.surface().blits, 1);
    }

    #[test]
    fn test_oversized_frame_keeps_old_pixels() {
        let mut view = HeadlessView::new(NativeHandle(1));
        view.set_frame(Rect::new(0, 0, 4, 4));
        view.set_frame(Rect::new(0, 0, i32::MAX, i32::MAX));
        assert_eq!(view.frame_size(), Size::new(i32::MAX as u32, i32::MAX as u32));
        assert_eq!(view.snapshot().dimensions(), (4, 4));

        let buf = PixelBuffer::filled(Rect::new(0, 0, 8, 8), [0, 0, 255, 255]);
        view.draw_image(&buf, Point::ZERO);
        assert_eq!(view.snapshot().get_pixel(3, 3), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_needs_display_is_taken() {
        let mut view = HeadlessView::new(NativeHandle(1));
        view.set_needs_display();
        assert!(view.take_needs_display());
        assert!(!view.take_needs_display());
    }
}

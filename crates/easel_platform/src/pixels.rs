//! RGBA pixel buffers returned by [`Handler::paint`](crate::Handler::paint)

use image::RgbaImage;

use crate::error::{PlatformError, Result};
use crate::geometry::{Point, Rect};

const BYTES_PER_PIXEL: usize = 4;

/// Non-premultiplied RGBA8 pixels covering a rectangle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    rect: Rect,
    stride: usize,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw pixel rows
    ///
    /// `stride` is the byte distance between the starts of two rows and must
    /// be at least `4 * rect.dx()`. `pixels` must hold `stride * rect.dy()`
    /// bytes.
    pub fn new(rect: Rect, stride: usize, pixels: Vec<u8>) -> Result<Self> {
        let width = rect.dx().max(0) as usize;
        let height = rect.dy().max(0) as usize;
        let min = width.saturating_mul(BYTES_PER_PIXEL);
        if stride < min {
            return Err(PlatformError::StrideTooShort { stride, min });
        }
        let needed = stride.saturating_mul(height);
        if pixels.len() < needed {
            return Err(PlatformError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            rect,
            stride,
            pixels,
        })
    }

    /// A buffer covering `rect` filled with one color
    pub fn filled(rect: Rect, rgba: [u8; 4]) -> Self {
        let width = rect.dx().max(0) as usize;
        let height = rect.dy().max(0) as usize;
        let pixels = rgba.repeat(width * height);
        Self {
            rect,
            stride: width * BYTES_PER_PIXEL,
            pixels,
        }
    }

    /// Take ownership of an image, placing its top-left pixel at `origin`
    pub fn from_image(origin: Point, image: RgbaImage) -> Self {
        let (w, h) = image.dimensions();
        let rect = Rect::from_origin_size(
            origin.x,
            origin.y,
            i32::try_from(w).unwrap_or(i32::MAX),
            i32::try_from(h).unwrap_or(i32::MAX),
        );
        Self {
            rect,
            stride: w as usize * BYTES_PER_PIXEL,
            pixels: image.into_raw(),
        }
    }

    /// The rectangle these pixels cover
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> i32 {
        self.rect.dx()
    }

    pub fn height(&self) -> i32 {
        self.rect.dy()
    }

    /// Bytes between the starts of consecutive rows
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)` relative to the buffer's top-left corner
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let at = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        let px = self.pixels.get(at..at + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_dimensions() {
        let buf = PixelBuffer::filled(Rect::new(10, 10, 13, 12), [1, 2, 3, 4]);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.stride(), 12);
        assert_eq!(buf.pixels().len(), 24);
        assert_eq!(buf.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(buf.pixel(3, 0), None);
    }

    #[test]
    fn test_new_rejects_short_stride() {
        let err = PixelBuffer::new(Rect::new(0, 0, 4, 1), 8, vec![0; 16]).unwrap_err();
        assert_eq!(err, PlatformError::StrideTooShort { stride: 8, min: 16 });
    }

    #[test]
    fn test_new_rejects_short_data() {
        let err = PixelBuffer::new(Rect::new(0, 0, 2, 2), 8, vec![0; 10]).unwrap_err();
        assert_eq!(
            err,
            PlatformError::BufferTooSmall {
                needed: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn test_new_rejects_oversized_rect_without_overflow() {
        let huge = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let err = PixelBuffer::new(huge, usize::MAX, vec![0; 16]).unwrap_err();
        assert_eq!(
            err,
            PlatformError::BufferTooSmall {
                needed: usize::MAX,
                actual: 16
            }
        );
    }

    #[test]
    fn test_new_accepts_padded_rows() {
        let buf = PixelBuffer::new(Rect::new(0, 0, 2, 2), 12, vec![7; 24]).unwrap();
        assert_eq!(buf.stride(), 12);
        assert_eq!(buf.pixel(1, 1), Some([7, 7, 7, 7]));
    }

    #[test]
    fn test_from_image_keeps_origin() {
        let img = RgbaImage::from_pixel(5, 4, image::Rgba([9, 8, 7, 6]));
        let buf = PixelBuffer::from_image(Point::new(20, 30), img);
        assert_eq!(buf.rect(), Rect::new(20, 30, 25, 34));
        assert_eq!(buf.stride(), 20);
        assert_eq!(buf.pixel(0, 0), Some([9, 8, 7, 6]));
    }
}

//! Easel Portable Event Model
//!
//! This crate provides the platform-independent vocabulary shared by every
//! Easel area backend: geometry, normalized input events, pixel buffers, and
//! the [`Handler`] contract an application implements to draw an area and
//! receive its input.
//!
//! # Architecture
//!
//! Native backends translate raw platform input into the types defined here
//! and hand them to a [`Handler`]:
//!
//! - [`Handler::paint`] - answer a redraw request with a [`PixelBuffer`]
//! - [`Handler::mouse`] - receive a normalized [`MouseEvent`]
//! - [`Handler::key`] - receive a normalized [`KeyEvent`]
//!
//! # Example
//!
//! ```
//! use easel_platform::prelude::*;
//!
//! struct Checkerboard;
//!
//! impl Handler for Checkerboard {
//!     fn paint(&mut self, clip: Rect) -> PixelBuffer {
//!         PixelBuffer::filled(clip, [0x20, 0x20, 0x20, 0xff])
//!     }
//!
//!     fn mouse(&mut self, event: MouseEvent) {
//!         if let Some(button) = event.down {
//!             println!("button {} pressed at {:?}", button.index(), event.pos);
//!         }
//!     }
//!
//!     fn key(&mut self, event: KeyEvent) {
//!         println!("{:?}", event.key);
//!     }
//! }
//! ```

mod error;
mod geometry;
mod handler;
mod input;
mod pixels;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use geometry::{Point, Rect, Size};
pub use handler::Handler;
pub use input::{
    ExtKey, HeldButtons, KeyEvent, KeyIdentity, KeyState, Modifiers, MouseButton, MouseEvent,
};
pub use pixels::PixelBuffer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::handler::Handler;
    pub use crate::input::{
        ExtKey, HeldButtons, KeyEvent, KeyIdentity, KeyState, Modifiers, MouseButton, MouseEvent,
    };
    pub use crate::pixels::PixelBuffer;
}

//! Easel Area Core
//!
//! An *area* is a custom-drawn canvas embedded in a native scroll view. This
//! crate sits between the native platform and an application's
//! [`Handler`](easel_platform::Handler):
//!
//! - **Input normalization** - native modifier bitmasks, button numbers,
//!   held-button bitmasks and virtual key codes are decoded into the portable
//!   [`MouseEvent`](easel_platform::MouseEvent) and
//!   [`KeyEvent`](easel_platform::KeyEvent) types ([`decode`], [`keycode`],
//!   [`mouse`], [`key`]).
//! - **Painting** - native redraw rectangles are clipped to the area's live
//!   bounds before the handler is asked for pixels ([`paint`]).
//! - **Layout negotiation** - an ancestor layout pass sizes and places the
//!   area through [`LayoutParticipant`]; placement is delegated to the
//!   [`Scroller`] wrapping the area ([`layout`], [`scroll`]).
//!
//! Native views are reached through the traits in [`native`], and native
//! callbacks find their area through an [`AreaRegistry`].
//!
//! Events that cannot be represented (unmapped keys, pointer positions
//! outside the area, empty redraw rectangles) are dropped, never reported as
//! errors.
//!
//! # Example
//!
//! ```ignore
//! use easel_area::prelude::*;
//!
//! let mut registry = AreaRegistry::new();
//! let area = Area::new(
//!     AreaConfig::new("sketch").size(640, 480),
//!     Box::new(MyHandler::default()),
//!     Box::new(document_view),
//!     Box::new(scroll_view),
//! )?;
//! let handle = area.native_handle();
//! registry.insert(area)?;
//!
//! // From the native drawRect: callback
//! registry.draw_rect(handle, NativeRect::new(0.0, 0.0, 640.0, 480.0))?;
//! ```

pub mod area;
pub mod config;
pub mod decode;
pub mod error;
pub mod key;
pub mod keycode;
pub mod layout;
pub mod mouse;
pub mod native;
pub mod paint;
pub mod registry;
pub mod scroll;

#[cfg(test)]
pub(crate) mod testing;

pub use area::Area;
pub use config::AreaConfig;
pub use error::{AreaError, Result};
pub use layout::{
    base_allocate, base_get_aux_resize_info, Alignment, Allocation, LayoutParticipant, Sizing,
};
pub use mouse::MouseAction;
pub use native::{
    NativeEvent, NativeHandle, NativeRect, NativeScrollView, NativeView, ParentHandle,
};
pub use registry::{AreaId, AreaRegistry};
pub use scroll::Scroller;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::config::AreaConfig;
    pub use crate::error::{AreaError, Result};
    pub use crate::layout::{Allocation, LayoutParticipant, Sizing};
    pub use crate::native::{
        NativeEvent, NativeHandle, NativeRect, NativeScrollView, NativeView, ParentHandle,
    };
    pub use crate::registry::{AreaId, AreaRegistry};
    pub use easel_platform::prelude::*;
}

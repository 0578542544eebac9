//! Easel Headless Platform
//!
//! An in-memory stand-in for the native view system. Areas built on it draw
//! into an [`image::RgbaImage`] and receive events recorded as JSON lines,
//! which makes them usable from tests and from the `easel` tool.
//!
//! # Example
//!
//! ```ignore
//! use easel_area::{AreaConfig, AreaRegistry, NativeHandle};
//! use easel_platform_headless::{headless_area, parse_trace, replay};
//!
//! let (area, view, _scroll) =
//!     headless_area(AreaConfig::new("demo").size(64, 64), Box::new(handler), NativeHandle(1))?;
//! let mut registry = AreaRegistry::new();
//! registry.insert(area)?;
//! replay(&mut registry, NativeHandle(1), &parse_trace(&trace)?)?;
//! view.snapshot().save("demo.png")?;
//! ```

pub mod error;
pub mod event;
pub mod replay;
pub mod view;

pub use error::{HeadlessError, Result};
pub use event::{parse_trace, HeadlessEvent, NativeMessage};
pub use replay::{deliver, replay, ReplayStats};
pub use view::{HeadlessScrollView, HeadlessView, ScrollState, Surface, MAX_SURFACE_SIDE};

use easel_area::{Area, AreaConfig, NativeHandle};
use easel_platform::Handler;

/// Build an area on headless views
///
/// The returned views share state with the ones the area owns.
pub fn headless_area(
    config: AreaConfig,
    handler: Box<dyn Handler>,
    handle: NativeHandle,
) -> Result<(Area, HeadlessView, HeadlessScrollView)> {
    let view = HeadlessView::new(handle);
    let scroll = HeadlessScrollView::new();
    let area = Area::new(
        config,
        handler,
        Box::new(view.clone()),
        Box::new(scroll.clone()),
    )?;
    Ok((area, view, scroll))
}

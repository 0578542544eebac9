//! The scroll view wrapping an area
//!
//! The scroller owns the area's placement in its parent. The document view
//! inside it always sits at the origin; its size is the area's size, and the
//! scroll view's frame is whatever the parent's layout pass assigned.

use easel_platform::{Rect, Size};

use crate::layout::Allocation;
use crate::native::{NativeHandle, NativeScrollView, NativeView, ParentHandle};

/// Placement wrapper around a native scroll view
pub struct Scroller {
    view: Box<dyn NativeScrollView>,
}

impl Scroller {
    /// Wrap `view` and install `document` as its content
    pub fn new(
        mut view: Box<dyn NativeScrollView>,
        document: NativeHandle,
        draws_background: bool,
    ) -> Self {
        view.set_document_view(document);
        view.set_draws_background(draws_background);
        Self { view }
    }

    /// Move the scroll view under a new parent
    pub fn set_parent(&mut self, parent: ParentHandle) {
        self.view.set_parent(parent);
    }

    /// Scroll view frame in the parent's coordinates
    pub fn frame(&self) -> Rect {
        self.view.frame()
    }

    /// Place the scroll view at `allocation` and pin the document view
    ///
    /// The document view keeps a zero origin and the given content size no
    /// matter where the scroll view lands.
    pub fn commit_resize(
        &mut self,
        allocation: &Allocation,
        document: &mut dyn NativeView,
        content: Size,
    ) {
        let frame = allocation.rect();
        tracing::debug!(?frame, ?content, "committing scroll view frame");
        self.view.set_frame(frame);
        document.set_frame(Rect::from_size(content));
    }
}

impl std::fmt::Debug for Scroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("frame", &self.view.frame())
            .finish()
    }
}

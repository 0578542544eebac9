//! Layout negotiation with an ancestor container
//!
//! A container lays out its children in three steps:
//!
//! 1. ask each child for its [`preferred_size`](LayoutParticipant::preferred_size)
//! 2. ask each child to [`allocate`](LayoutParticipant::allocate) itself into
//!    the rectangle the container picked, and collect the allocations
//! 3. once every allocation is known, call
//!    [`commit_resize`](LayoutParticipant::commit_resize) for each one
//!
//! Between steps 2 and 3 the container may call
//! [`get_aux_resize_info`](LayoutParticipant::get_aux_resize_info) to gather
//! hints (such as where a neighbor's baseline sits) into the [`Sizing`].
//! Controls without special needs implement `allocate` and
//! `get_aux_resize_info` with [`base_allocate`] and
//! [`base_get_aux_resize_info`].

use easel_platform::{Rect, Size};

/// Where a control's content sits inside its frame
///
/// Neighboring controls (labels, mostly) use this to line up with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Alignment rectangle in the parent's coordinates
    pub rect: Rect,
    /// Distance from the bottom of `rect` to the text baseline, 0 if none
    pub baseline: i32,
}

/// Per-pass sizing context shared between a container and its children
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sizing {
    /// Alignment of the most recently examined neighbor
    pub neighbor_align: Option<Alignment>,
}

/// Geometry assigned to one control for one layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Allocation {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Allocation {
    /// The allocation as a rectangle in the parent's coordinates
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// A control that takes part in its container's layout pass
pub trait LayoutParticipant {
    /// Size the control would like to have
    fn preferred_size(&self, sizing: &Sizing) -> Size;

    /// Produce the allocations that place this control at the given rectangle
    fn allocate(&self, x: i32, y: i32, width: i32, height: i32, sizing: &Sizing)
        -> Vec<Allocation>;

    /// Apply an allocation produced by [`allocate`](Self::allocate)
    fn commit_resize(&mut self, allocation: &Allocation, sizing: &Sizing);

    /// Record auxiliary layout hints into `sizing`
    fn get_aux_resize_info(&self, sizing: &mut Sizing);

    /// Current frame in the parent's coordinates
    fn frame(&self) -> Rect;
}

/// Allocation for a control that occupies exactly the rectangle it is given
pub fn base_allocate<P>(
    _participant: &P,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    _sizing: &Sizing,
) -> Vec<Allocation>
where
    P: LayoutParticipant + ?Sized,
{
    vec![Allocation {
        x,
        y,
        width,
        height,
    }]
}

/// Record the participant's frame as the alignment its neighbors line up with
pub fn base_get_aux_resize_info<P>(participant: &P, sizing: &mut Sizing)
where
    P: LayoutParticipant + ?Sized,
{
    sizing.neighbor_align = Some(Alignment {
        rect: participant.frame(),
        baseline: 0,
    });
}

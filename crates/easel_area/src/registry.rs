//! Native view to area lookup
//!
//! Native callbacks only know which view they fired on. The registry maps a
//! view's [`NativeHandle`] to the [`Area`] that owns it, so each callback
//! entry point can find its area without smuggling pointers through the
//! native side.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use easel_platform::KeyState;

use crate::area::Area;
use crate::error::{AreaError, Result};
use crate::mouse::MouseAction;
use crate::native::{NativeEvent, NativeHandle, NativeRect};

new_key_type! {
    /// Stable identity of an area inside a registry
    pub struct AreaId;
}

/// Owns every live area and routes native callbacks to them
#[derive(Debug, Default)]
pub struct AreaRegistry {
    areas: SlotMap<AreaId, Area>,
    by_handle: FxHashMap<NativeHandle, AreaId>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an area, keyed by its document view's handle
    pub fn insert(&mut self, area: Area) -> Result<AreaId> {
        let handle = area.native_handle();
        if self.by_handle.contains_key(&handle) {
            return Err(AreaError::DuplicateView(handle));
        }
        let id = self.areas.insert(area);
        self.by_handle.insert(handle, id);
        tracing::debug!(?handle, ?id, "registered area");
        Ok(id)
    }

    /// Remove and return the area registered for `handle`
    pub fn remove(&mut self, handle: NativeHandle) -> Option<Area> {
        let id = self.by_handle.remove(&handle)?;
        self.areas.remove(id)
    }

    /// The id of the area registered for `handle`
    pub fn lookup(&self, handle: NativeHandle) -> Option<AreaId> {
        self.by_handle.get(&handle).copied()
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(id)
    }

    pub fn get_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.get_mut(id)
    }

    /// The area registered for `handle`
    pub fn area_mut(&mut self, handle: NativeHandle) -> Result<&mut Area> {
        let Some(id) = self.lookup(handle) else {
            tracing::warn!(?handle, "native callback for unregistered view");
            return Err(AreaError::UnknownView(handle));
        };
        self.areas
            .get_mut(id)
            .ok_or(AreaError::UnknownView(handle))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AreaId, &Area)> {
        self.areas.iter()
    }

    // ========================================================================
    // Native callback entry points
    //
    // Each returns whether the handler was invoked. Dropped events are Ok.
    // ========================================================================

    /// drawRect:
    pub fn draw_rect(&mut self, handle: NativeHandle, rect: NativeRect) -> Result<bool> {
        Ok(self.area_mut(handle)?.draw_rect(rect))
    }

    /// mouseMoved: and the mouseDragged: family
    pub fn mouse_moved_or_dragged<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.mouse_event(event, MouseAction::Motion))
    }

    /// The mouseDown: family
    pub fn mouse_down<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.mouse_event(event, MouseAction::Down))
    }

    /// The mouseUp: family
    pub fn mouse_up<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.mouse_event(event, MouseAction::Up))
    }

    /// keyDown:
    pub fn key_down<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.key_event(event, KeyState::Pressed))
    }

    /// keyUp:
    pub fn key_up<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.key_event(event, KeyState::Released))
    }

    /// flagsChanged:
    pub fn flags_changed<E>(&mut self, handle: NativeHandle, event: &E) -> Result<bool>
    where
        E: NativeEvent + ?Sized,
    {
        Ok(self.area_mut(handle)?.flags_changed(event))
    }
}

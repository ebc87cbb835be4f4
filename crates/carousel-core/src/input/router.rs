//! Input router state machine
//!
//! Holds at most one active gesture. Swipes and pans share the slot, so a
//! pan can never run while the strip is being dragged and vice versa.

use crate::math::Vec2;
use super::{DragState, PointerKind, SwipeGesture, CLICK_SLOP_PX};

/// Input router managing drag state
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
    /// Pointer position at the last pointer-down
    press: Option<Vec2>,
    /// Meaningful movement happened since the last pointer-down
    moved: bool,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if any gesture is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Check if a slide swipe is active
    #[inline]
    pub fn is_swiping(&self) -> bool {
        matches!(self.drag, Some(DragState::Swipe(_)))
    }

    /// Check if a zoom pan is active
    #[inline]
    pub fn is_panning(&self) -> bool {
        matches!(self.drag, Some(DragState::Pan { .. }))
    }

    /// Current swipe offset, zero when not swiping
    pub fn swipe_offset(&self) -> f32 {
        match &self.drag {
            Some(DragState::Swipe(swipe)) => swipe.offset,
            _ => 0.0,
        }
    }

    /// Check if the pointer moved meaningfully since pointer-down
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Record a pointer-down; clears the movement flag
    pub fn press(&mut self, at: Vec2) {
        self.press = Some(at);
        self.moved = false;
    }

    /// Record pointer movement against the last pointer-down
    pub fn record_motion(&mut self, at: Vec2) {
        if let Some(press) = self.press {
            if press.distance(at) > CLICK_SLOP_PX {
                self.moved = true;
            }
        }
    }

    /// Clear the movement flag (deferred after a gesture ends)
    pub fn clear_motion(&mut self) {
        self.moved = false;
    }

    /// Start a slide swipe
    pub fn start_swipe(&mut self, kind: PointerKind, start: Vec2) {
        self.drag = Some(DragState::Swipe(SwipeGesture::new(kind, start)));
    }

    /// Start a zoom pan; `origin` is the pointer minus the current pan offset
    pub fn start_pan(&mut self, kind: PointerKind, origin: Vec2) {
        self.drag = Some(DragState::Pan { kind, origin });
    }

    /// Mutable access to the active swipe
    pub fn swipe_mut(&mut self) -> Option<&mut SwipeGesture> {
        match &mut self.drag {
            Some(DragState::Swipe(swipe)) => Some(swipe),
            _ => None,
        }
    }

    /// End current drag operation, returning what was active
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Cancel current drag operation (alias for end_drag)
    #[inline]
    pub fn cancel(&mut self) -> Option<DragState> {
        self.end_drag()
    }
}

//! Drag state for pointer gestures

use crate::math::Vec2;

/// Source of a pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse drag
    Mouse,
    /// Touch drag
    Touch,
}

/// In-progress slide swipe
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeGesture {
    /// Pointer source
    pub kind: PointerKind,
    /// Pointer position at pointer-down
    pub start: Vec2,
    /// `start.x - current.x`: positive means leftward ("next") intent
    pub offset: f32,
    /// Vertical travel since start, used for the touch dead-zone
    pub vertical: f32,
}

impl SwipeGesture {
    /// Start a swipe at the given pointer position
    pub fn new(kind: PointerKind, start: Vec2) -> Self {
        Self {
            kind,
            start,
            offset: 0.0,
            vertical: 0.0,
        }
    }

    /// Update from the current pointer position
    pub fn track(&mut self, current: Vec2) {
        self.offset = self.start.x - current.x;
        self.vertical = self.start.y - current.y;
    }
}

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Dragging the slide strip
    Swipe(SwipeGesture),
    /// Panning a magnified image
    Pan {
        /// Pointer source
        kind: PointerKind,
        /// Pointer position minus pan offset at pan start
        origin: Vec2,
    },
}

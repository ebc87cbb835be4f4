//! Input routing module
//!
//! Provides the pointer gesture state machine for slide swipes and zoom pans.

mod drag;
mod result;
mod router;

pub use drag::{DragState, PointerKind, SwipeGesture};
pub use result::InputResult;
pub use router::InputRouter;

/// Horizontal travel (px) a touch swipe needs before it owns the gesture
pub const TOUCH_DEAD_ZONE_PX: f32 = 10.0;

/// Pointer travel (px) from pointer-down that turns a click into a drag
pub const CLICK_SLOP_PX: f32 = 3.0;

/// Whether a touch swipe should suppress native scrolling.
///
/// Vertical page scrolling stays available until the horizontal component
/// clearly dominates and leaves the dead-zone.
#[inline]
pub fn swipe_owns_touch(dx: f32, dy: f32) -> bool {
    let dx = dx.abs();
    dx > dy.abs() && dx > TOUCH_DEAD_ZONE_PX
}

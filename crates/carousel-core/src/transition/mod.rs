//! Transition module
//!
//! Slide transitions are run by the rendering engine (CSS transitions), not
//! by us. This module holds the phase flag the engine tracks while they
//! run, the timing constants, and the surface abstraction used for the
//! non-animated boundary jump.

mod phase;
mod surface;

pub use phase::TransitionPhase;
pub use surface::AnimationSurface;

/// Duration of slide and zoom transitions in milliseconds
pub const TRANSITION_DURATION_MS: u32 = 500;

/// CSS transition applied to the slide strip and zoomed images
pub const TRANSFORM_TRANSITION: &str = "transform 0.5s ease-in-out";

/// CSS property whose completion drives the state machine
pub const TRANSFORM_PROPERTY: &str = "transform";

/// CSS value used when a transition must not animate
pub const NO_TRANSITION: &str = "none";

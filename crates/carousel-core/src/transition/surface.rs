//! Rendering surface hooks for the boundary jump

/// The element whose transform carries the slide strip.
///
/// A boundary jump moves the strip from a clone slot to the matching real
/// slide without any visible motion. The engine drives it as:
///
/// 1. [`disable_transient_animation`](Self::disable_transient_animation)
/// 2. [`commit_transform`](Self::commit_transform) with the new transform,
///    which must apply it and flush layout synchronously
/// 3. [`request_frame`](Self::request_frame); on that frame the host calls
///    `SliderEngine::animation_frame`, which ends in
///    [`restore_animation`](Self::restore_animation) with the strip
///    transition for the engine's current state
///
/// Hosts should re-render after the frame callback.
pub trait AnimationSurface {
    /// Suppress the transform transition on the strip
    fn disable_transient_animation(&mut self);

    /// Apply `transform` to the strip and force a synchronous layout flush
    fn commit_transform(&mut self, transform: &str);

    /// Ask the host to call back on the next animation frame
    fn request_frame(&mut self);

    /// Re-apply `transition` to the strip
    fn restore_animation(&mut self, transition: &str);
}

//! Slider engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `position`: Position/loop state machine and the boundary jump
//! - `gesture`: Pointer and touch swipe handling
//! - `zoom`: Click-to-zoom and pan
//! - `autoplay`: Autoplay timer, pause/resume, deferred tasks and the settle watchdog
//! - `rendering`: Render snapshot computation

mod autoplay;
mod gesture;
mod position;
mod rendering;
mod zoom;

use crate::config::SliderConfig;
use crate::input::InputRouter;
use crate::math::Size;
use crate::mirror::{MirroredPosition, PositionMirror};
use crate::sequence::SlideSequence;
use crate::timer::{DeferredTask, RepeatingTimer};
use crate::transition::TransitionPhase;
use crate::zoom::ZoomState;

/// Slider engine owning all carousel state
///
/// This is the main entry point for slider operations, managing:
/// - The working sequence and current position (with loop clones)
/// - The transition phase and boundary-jump guard
/// - Input router (swipe/pan state machine)
/// - Zoom state
/// - Autoplay timer and deferred resume/settle tasks
///
/// Every time-dependent call takes `now_ms`; the engine never reads a clock.
#[derive(Debug)]
pub struct SliderEngine {
    /// Current configuration
    pub(crate) config: SliderConfig,
    /// Caller's images plus clone layout
    pub(crate) sequence: SlideSequence,
    /// Index into the working sequence
    pub(crate) position: usize,
    /// Position published for listeners
    pub(crate) mirror: PositionMirror,
    /// Transition phase of the slide strip
    pub(crate) phase: TransitionPhase,
    /// A boundary jump is waiting for its restore frame
    pub(crate) jump_in_flight: bool,
    /// Input router
    pub input: InputRouter,
    /// Zoom and pan of the current slide
    pub(crate) zoom: ZoomState,
    /// Rendered slider width
    pub(crate) slider_width: f32,
    /// Rendered size of the current slide frame
    pub(crate) slide_frame: Size,
    /// Rendered (unscaled) size of the current image
    pub(crate) image_size: Size,
    /// Autoplay suspended by hover, drag or navigation
    pub(crate) paused: bool,
    /// Autoplay timer
    pub(crate) autoplay: RepeatingTimer,
    /// Deferred autoplay resume after drag/navigation
    pub(crate) autoplay_resume: DeferredTask,
    /// Deferred end of the snap-back phase and movement flag
    pub(crate) motion_reset: DeferredTask,
    /// Deferred end of the pan movement flag
    pub(crate) zoom_settle: DeferredTask,
    /// Forced settle if a transition end or restore frame never arrives
    pub(crate) settle_watchdog: DeferredTask,
    /// Set by `dispose`; no timer is armed afterwards
    pub(crate) disposed: bool,
}

impl SliderEngine {
    /// Create a new slider engine over `images`
    pub fn new(images: Vec<String>, config: SliderConfig) -> Self {
        let sequence = SlideSequence::new(images, config.looping);
        let position = sequence.initial_position();
        let engine = Self {
            config,
            sequence,
            position,
            mirror: PositionMirror::default(),
            phase: TransitionPhase::Settled,
            jump_in_flight: false,
            input: InputRouter::new(),
            zoom: ZoomState::default(),
            slider_width: 0.0,
            slide_frame: Size::ZERO,
            image_size: Size::ZERO,
            paused: false,
            autoplay: RepeatingTimer::default(),
            autoplay_resume: DeferredTask::idle(),
            motion_reset: DeferredTask::idle(),
            zoom_settle: DeferredTask::idle(),
            settle_watchdog: DeferredTask::idle(),
            disposed: false,
        };
        engine.publish_position();
        engine
    }

    /// Initialize with the rendered slider size and arm autoplay
    pub fn init(&mut self, width: f32, height: f32, now_ms: f64) {
        self.resize(width, height);
        self.sync_autoplay(now_ms);
    }

    /// Update the rendered slider size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.slider_width = width;
        if self.slide_frame.is_empty() {
            self.slide_frame = Size::new(width, height);
        }
    }

    /// Update the measured frame and image size of the current slide
    pub fn update_slide_metrics(&mut self, frame: Size, image: Size) {
        self.slide_frame = frame;
        self.image_size = image;
    }

    /// Apply a new configuration.
    ///
    /// Toggling loop mode renormalizes the position: loop mode keeps a real
    /// slide or resets to the first one, plain mode clamps to the last.
    pub fn configure(&mut self, config: SliderConfig, now_ms: f64) {
        let loop_changed = config.looping != self.config.looping;
        self.config = config;
        if loop_changed {
            self.sequence.set_looping(self.config.looping);
            self.renormalize();
            log::debug!(
                "slider loop mode {} (position {})",
                if self.config.looping { "on" } else { "off" },
                self.position
            );
        }
        if !self.config.auto_play {
            self.paused = false;
            self.autoplay_resume.cancel();
        }
        self.sync_autoplay(now_ms);
    }

    /// Replace the image list
    pub fn set_images(&mut self, images: Vec<String>, now_ms: f64) {
        self.sequence.set_images(images);
        if self.sequence.is_empty() {
            self.input.cancel();
            self.zoom.reset();
            self.phase = TransitionPhase::Settled;
            self.jump_in_flight = false;
            self.settle_watchdog.cancel();
        }
        self.renormalize();
        log::debug!(
            "slider images replaced ({} real, position {})",
            self.sequence.real_len(),
            self.position
        );
        self.sync_autoplay(now_ms);
    }

    /// Tear down every timer. The engine stays readable but inert.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.autoplay.disarm();
        self.autoplay_resume.cancel();
        self.motion_reset.cancel();
        self.zoom_settle.cancel();
        self.settle_watchdog.cancel();
        self.input.cancel();
    }

    /// Current configuration
    #[inline]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Working sequence
    #[inline]
    pub fn sequence(&self) -> &SlideSequence {
        &self.sequence
    }

    /// Current transition phase
    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Zoom state
    #[inline]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Check if the slider has no images
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Handle to the mirrored position
    pub fn position_mirror(&self) -> PositionMirror {
        self.mirror.clone()
    }

    pub(crate) fn renormalize(&mut self) {
        let normalized = self.sequence.normalize(self.position);
        self.set_position(normalized);
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
        self.publish_position();
    }

    fn publish_position(&self) {
        self.mirror.publish(MirroredPosition {
            position: self.position,
            real_index: self.sequence.real_index(self.position),
            len: self.sequence.real_len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{}.jpg", i)).collect()
    }

    #[test]
    fn test_initial_position() {
        let engine = SliderEngine::new(images(3), SliderConfig::default());
        assert_eq!(engine.position(), 0);

        let engine = SliderEngine::new(images(3), SliderConfig::default().with_loop(true));
        assert_eq!(engine.position(), 1);
        assert_eq!(engine.real_index(), 0);
    }

    #[test]
    fn test_empty_loop_starts_at_zero() {
        let engine = SliderEngine::new(Vec::new(), SliderConfig::default().with_loop(true));
        assert_eq!(engine.position(), 0);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_toggle_loop_on_normalizes() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        assert_eq!(engine.position(), 0);

        engine.configure(SliderConfig::default().with_loop(true), 0.0);
        assert_eq!(engine.position(), 1);
    }

    #[test]
    fn test_toggle_loop_off_clamps() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default().with_loop(true));
        engine.set_position(3);

        engine.configure(SliderConfig::default(), 0.0);
        assert_eq!(engine.position(), 2);
    }

    #[test]
    fn test_shrinking_images_clamps() {
        let mut engine = SliderEngine::new(images(5), SliderConfig::default());
        engine.set_position(4);

        engine.set_images(images(2), 0.0);
        assert_eq!(engine.position(), 1);

        engine.set_images(Vec::new(), 0.0);
        assert_eq!(engine.position(), 0);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_mirror_follows_position() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default().with_loop(true));
        let mirror = engine.position_mirror();
        assert_eq!(mirror.get().position, 1);

        engine.set_position(0);
        assert_eq!(mirror.get().position, 0);
        assert_eq!(mirror.get().real_index, 2);
        assert_eq!(mirror.get().len, 3);
    }

    #[test]
    fn test_dispose_clears_timers() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default().with_auto_play(1000.0));
        engine.init(800.0, 400.0, 0.0);
        assert!(engine.next_deadline().is_some());

        engine.dispose();
        assert!(engine.next_deadline().is_none());

        engine.tick(5000.0);
        assert_eq!(engine.position(), 0);
    }
}

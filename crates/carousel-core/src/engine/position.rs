//! Position and loop state machine

use crate::transition::{
    AnimationSurface, TransitionPhase, TRANSFORM_PROPERTY, TRANSITION_DURATION_MS,
};
use super::SliderEngine;

/// Grace period after which a transition with no completion signal is
/// forced to settle
pub(crate) const SETTLE_WATCHDOG_MS: f64 = 2.0 * TRANSITION_DURATION_MS as f64;

impl SliderEngine {
    /// Current working position
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Displayed real slide (0-based), clone slots projected back
    #[inline]
    pub fn real_index(&self) -> usize {
        self.sequence.real_index(self.position)
    }

    /// Image shown at the current position
    pub fn displayed_image(&self) -> Option<&str> {
        self.sequence.image_at(self.position)
    }

    /// Check if a slide transition is animating
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase.is_animating()
    }

    /// Check if nothing is moving and the position is a real slide
    pub fn is_settled(&self) -> bool {
        self.phase == TransitionPhase::Settled
            && !self.jump_in_flight
            && !self.sequence.is_clone_slot(self.position)
    }

    /// Check if arrows and programmatic navigation are accepted.
    ///
    /// A boundary jump waiting for its restore frame counts as moving.
    pub fn navigation_enabled(&self) -> bool {
        !self.sequence.is_empty()
            && !self.phase.is_animating()
            && !self.jump_in_flight
            && !self.zoom.is_zoomed()
    }

    /// Check if the previous arrow can act at all (loop mode never hits an edge)
    pub fn can_go_previous(&self) -> bool {
        self.navigation_enabled() && (self.sequence.has_clones() || self.position > 0)
    }

    /// Check if the next arrow can act at all
    pub fn can_go_next(&self) -> bool {
        self.navigation_enabled()
            && (self.sequence.has_clones() || self.position + 1 < self.sequence.real_len())
    }

    /// Advance one slide. Returns false if rejected.
    pub fn go_to_next(&mut self, now_ms: f64) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.pause_autoplay_for(now_ms, self.config.auto_play_interval_ms);
        self.begin_transition(self.position + 1, now_ms);
        true
    }

    /// Retreat one slide. Returns false if rejected.
    pub fn go_to_previous(&mut self, now_ms: f64) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.pause_autoplay_for(now_ms, self.config.auto_play_interval_ms);
        self.begin_transition(self.position - 1, now_ms);
        true
    }

    /// Largest legal working position, clone slot included in loop mode
    pub(crate) fn max_position(&self) -> usize {
        self.sequence.working_len().saturating_sub(1)
    }

    /// Move to `target` with an animated transition
    pub(crate) fn begin_transition(&mut self, target: usize, now_ms: f64) {
        let target = target.min(self.max_position());
        self.phase = TransitionPhase::Animating;
        self.set_position(target);
        self.settle_watchdog.schedule(now_ms, SETTLE_WATCHDOG_MS);
        self.sync_autoplay(now_ms);
    }

    /// Handle the strip's transition-end signal.
    ///
    /// Only the transform property counts. When the strip has come to rest
    /// on a clone slot, the position jumps to the matching real slide with
    /// the animation suppressed; the restore happens on the next frame.
    /// Returns true if a boundary jump was performed.
    pub fn transition_end(
        &mut self,
        property: &str,
        now_ms: f64,
        surface: &mut impl AnimationSurface,
    ) -> bool {
        if property != TRANSFORM_PROPERTY {
            return false;
        }

        let mut jumped = false;
        if self.sequence.has_clones() && !self.jump_in_flight {
            if let Some(target) = self.sequence.jump_target(self.position) {
                log::debug!("boundary jump {} -> {}", self.position, target);
                self.jump_in_flight = true;
                surface.disable_transient_animation();
                self.set_position(target);
                surface.commit_transform(&self.strip_transform());
                surface.request_frame();
                jumped = true;
            }
        }

        if self.phase.is_animating() {
            self.phase = TransitionPhase::Settled;
        }
        if jumped {
            // Now guards the restore frame instead
            self.settle_watchdog.schedule(now_ms, SETTLE_WATCHDOG_MS);
        } else if !self.jump_in_flight {
            self.settle_watchdog.cancel();
        }
        self.sync_autoplay(now_ms);
        jumped
    }

    /// Next-frame callback; completes a pending boundary jump.
    ///
    /// The surface gets the strip transition for the current state, so a
    /// caller that changed state in between is not left with a stale value.
    pub fn animation_frame(&mut self, surface: &mut impl AnimationSurface) {
        if self.jump_in_flight {
            self.jump_in_flight = false;
            self.settle_watchdog.cancel();
            surface.restore_animation(self.strip_transition());
        }
    }

    /// Force a settle when the completion signal or restore frame never came.
    ///
    /// Runs from `tick` when the watchdog fires. A strip left on a clone
    /// slot is moved to its real slide without animation.
    pub(crate) fn expire_settle_watchdog(&mut self) {
        if self.phase.is_animating() {
            log::warn!(
                "no transition end within {}ms, settling at {}",
                SETTLE_WATCHDOG_MS,
                self.position
            );
            self.phase = TransitionPhase::Settled;
            if let Some(target) = self.sequence.jump_target(self.position) {
                self.set_position(target);
            }
        }
        if self.jump_in_flight {
            log::warn!("no animation frame for boundary jump, restoring");
            self.jump_in_flight = false;
        }
    }

    /// Check if a boundary jump is waiting for its restore frame
    #[inline]
    pub fn jump_in_flight(&self) -> bool {
        self.jump_in_flight
    }
}

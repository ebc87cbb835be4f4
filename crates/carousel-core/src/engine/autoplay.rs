//! Autoplay and deferred tasks
//!
//! The autoplay timer is armed only while every suspension condition is
//! clear and is torn down the moment one appears. `tick` is the single
//! entry point for elapsed time: the host calls it at `next_deadline()`.

use crate::timer::earliest;
use crate::transition::TransitionPhase;
use super::SliderEngine;

impl SliderEngine {
    /// Check if autoplay may run right now
    pub fn autoplay_eligible(&self) -> bool {
        self.config.auto_play
            && !self.disposed
            && self.sequence.real_len() > 1
            && !self.paused
            && !self.phase.is_animating()
            && !self.input.is_swiping()
            && !self.zoom.is_zoomed()
    }

    /// Check if autoplay is suspended by hover, drag or navigation
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check if the autoplay timer is armed
    #[inline]
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Pointer entered the slider: hold autoplay until it leaves
    pub fn pointer_enter(&mut self, now_ms: f64) {
        self.hold_autoplay();
        self.sync_autoplay(now_ms);
    }

    /// Pointer left the slider.
    ///
    /// A pending drag/navigation cooldown keeps running; otherwise the
    /// hover pause ends immediately.
    pub fn pointer_leave(&mut self, now_ms: f64) {
        if self.paused && !self.autoplay_resume.is_pending() {
            self.paused = false;
        }
        self.sync_autoplay(now_ms);
    }

    /// Advance time to `now_ms`.
    ///
    /// Fires every due deferred task, then the autoplay timer if it is still
    /// eligible. Returns true if autoplay moved the slider.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.disposed {
            return false;
        }

        if self.autoplay_resume.fire_if_due(now_ms) {
            log::trace!("autoplay cooldown over");
            self.paused = false;
        }
        if self.motion_reset.fire_if_due(now_ms) {
            if self.phase == TransitionPhase::SnapBack {
                self.phase = TransitionPhase::Settled;
            }
            self.input.clear_motion();
        }
        if self.zoom_settle.fire_if_due(now_ms) {
            self.input.clear_motion();
        }
        if self.settle_watchdog.fire_if_due(now_ms) {
            self.expire_settle_watchdog();
        }
        self.sync_autoplay(now_ms);

        let mut advanced = false;
        if self.autoplay.fire_if_due(now_ms) && self.autoplay_eligible() && !self.jump_in_flight {
            let target = self.autoplay_target();
            log::debug!("autoplay {} -> {}", self.position, target);
            self.begin_transition(target, now_ms);
            advanced = true;
        }
        self.sync_autoplay(now_ms);
        advanced
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        if self.disposed {
            return None;
        }
        earliest([
            self.autoplay.deadline(),
            self.autoplay_resume.deadline(),
            self.motion_reset.deadline(),
            self.zoom_settle.deadline(),
            self.settle_watchdog.deadline(),
        ])
    }

    /// Arm or tear down the autoplay timer to match eligibility
    pub(crate) fn sync_autoplay(&mut self, now_ms: f64) {
        if self.autoplay_eligible() {
            self.autoplay.arm(now_ms, self.config.auto_play_interval_ms);
        } else {
            self.autoplay.disarm();
        }
    }

    /// Pause with no scheduled resume, dropping any pending one
    pub(crate) fn hold_autoplay(&mut self) {
        if self.config.auto_play {
            self.paused = true;
            self.autoplay_resume.cancel();
        }
    }

    /// Pause and resume after `cooldown_ms`, replacing any pending resume
    pub(crate) fn pause_autoplay_for(&mut self, now_ms: f64, cooldown_ms: f64) {
        if self.config.auto_play {
            self.paused = true;
            self.autoplay_resume.schedule(now_ms, cooldown_ms);
        }
    }

    /// One slot forward, wrapping to the start of the working sequence
    fn autoplay_target(&self) -> usize {
        let next = self.position + 1;
        if next >= self.sequence.working_len() {
            0
        } else {
            next
        }
    }
}

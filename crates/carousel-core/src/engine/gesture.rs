//! Pointer and touch gesture handling
//!
//! One pointer stream drives both slide swipes and zoom pans: at baseline
//! magnification a pointer-down starts a swipe, above it a pan.

use crate::input::{swipe_owns_touch, DragState, InputResult, PointerKind};
use crate::math::Vec2;
use crate::transition::{TransitionPhase, TRANSITION_DURATION_MS};
use crate::zoom::ZOOM_SETTLE_MS;
use super::SliderEngine;

impl SliderEngine {
    /// Handle pointer/touch down on the slider
    pub fn pointer_down(&mut self, kind: PointerKind, point: Vec2, now_ms: f64) -> InputResult {
        if self.disposed || self.sequence.is_empty() || self.input.is_dragging() {
            return InputResult::Unhandled;
        }

        if self.zoom.is_zoomed() {
            self.input.press(point);
            return self.start_pan(kind, point);
        }

        if !self.phase.accepts_gestures() || self.jump_in_flight {
            return InputResult::Unhandled;
        }

        self.input.press(point);
        self.hold_autoplay();
        self.input.start_swipe(kind, point);
        self.sync_autoplay(now_ms);
        log::trace!("swipe start at {:?} ({:?})", point, kind);

        match kind {
            // Stops text/image selection while dragging with the mouse
            PointerKind::Mouse => InputResult::CAPTURED,
            PointerKind::Touch => InputResult::HANDLED,
        }
    }

    /// Handle pointer/touch movement.
    ///
    /// A touch swipe only captures the event (cancelling native scroll)
    /// once it is clearly horizontal; a pan always captures it.
    pub fn pointer_move(&mut self, point: Vec2) -> InputResult {
        if !self.input.is_dragging() {
            return InputResult::Unhandled;
        }
        self.input.record_motion(point);

        let (frame, image) = (self.slide_frame, self.image_size);
        if let Some(DragState::Pan { origin, .. }) = self.input.drag_state() {
            let target = point - *origin;
            self.zoom.pan_to(target, frame, image);
            return InputResult::CAPTURED;
        }

        match self.input.swipe_mut() {
            Some(swipe) => {
                swipe.track(point);
                if swipe.kind == PointerKind::Touch && swipe_owns_touch(swipe.offset, swipe.vertical) {
                    InputResult::CAPTURED
                } else {
                    InputResult::HANDLED
                }
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer/touch release
    pub fn pointer_up(&mut self, now_ms: f64) -> InputResult {
        let result = match self.input.end_drag() {
            Some(DragState::Swipe(swipe)) => {
                self.release_swipe(swipe.offset, now_ms);
                InputResult::HANDLED
            }
            Some(DragState::Pan { .. }) => {
                self.zoom_settle.schedule(now_ms, ZOOM_SETTLE_MS);
                InputResult::HANDLED
            }
            None => InputResult::Unhandled,
        };
        self.sync_autoplay(now_ms);
        result
    }

    /// Handle an interrupted gesture: drop it without moving
    pub fn pointer_cancel(&mut self, now_ms: f64) -> InputResult {
        let result = match self.input.cancel() {
            Some(DragState::Swipe(_)) => {
                log::trace!("swipe cancelled");
                self.pause_autoplay_for(now_ms, self.config.auto_play_interval_ms * 2.0);
                InputResult::HANDLED
            }
            Some(DragState::Pan { .. }) => {
                self.zoom_settle.schedule(now_ms, ZOOM_SETTLE_MS);
                InputResult::HANDLED
            }
            None => InputResult::Unhandled,
        };
        self.sync_autoplay(now_ms);
        result
    }

    /// Check if a swipe is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.input.is_swiping()
    }

    /// Check if a document-level listener set should be attached
    #[inline]
    pub fn needs_document_listeners(&self) -> bool {
        self.input.is_dragging()
    }

    /// Current signed swipe offset in pixels
    #[inline]
    pub fn drag_offset(&self) -> f32 {
        self.input.swipe_offset()
    }

    /// Commit or snap back a released swipe.
    ///
    /// The offset must exceed `threshold × slider width` to move, and moves
    /// exactly one slot in its sign direction, clamped to the working range
    /// (clone slots included, the next settle corrects them).
    fn release_swipe(&mut self, offset: f32, now_ms: f64) {
        let width = if self.slider_width > 0.0 { self.slider_width } else { 1.0 };
        let threshold = width * self.config.swipe_threshold;

        let current = self.position;
        let target = if offset.abs() > threshold {
            if offset > 0.0 {
                (current + 1).min(self.max_position())
            } else {
                current.saturating_sub(1)
            }
        } else {
            current
        };

        if target != current {
            log::trace!("swipe commit {} -> {} (offset {})", current, target, offset);
            self.begin_transition(target, now_ms);
        } else {
            log::trace!("swipe snap back (offset {}, threshold {})", offset, threshold);
            if self.phase == TransitionPhase::Settled {
                self.phase = TransitionPhase::SnapBack;
            }
        }

        self.motion_reset.schedule(now_ms, f64::from(TRANSITION_DURATION_MS));
        self.pause_autoplay_for(now_ms, self.config.auto_play_interval_ms * 2.0);
    }
}

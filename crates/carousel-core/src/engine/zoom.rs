//! Click-to-zoom and pan

use crate::input::{InputResult, PointerKind};
use crate::math::Vec2;
use crate::zoom::BASELINE_ZOOM;
use super::SliderEngine;

impl SliderEngine {
    /// Handle a click/tap on the slide.
    ///
    /// Toggles magnification unless the click merely ends a swipe or pan.
    /// Returns true if the zoom level changed.
    pub fn click(&mut self, now_ms: f64) -> bool {
        if self.disposed || self.sequence.is_empty() || self.input.is_dragging() {
            return false;
        }
        if self.phase.is_animating() || self.jump_in_flight {
            log::trace!("click ignored while the strip is moving");
            return false;
        }
        if self.input.has_moved() {
            log::trace!("click suppressed after pointer movement");
            return false;
        }
        self.toggle_zoom(now_ms);
        true
    }

    /// Toggle between baseline and the configured zoom level
    pub fn toggle_zoom(&mut self, now_ms: f64) {
        self.zoom.toggle(self.config.zoom_level);
        self.zoom_settle.cancel();
        log::debug!("zoom {}%", self.zoom.level());
        self.sync_autoplay(now_ms);
    }

    /// Check if magnified above baseline
    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.level() > BASELINE_ZOOM
    }

    /// Check if a pan is in progress
    #[inline]
    pub fn is_panning(&self) -> bool {
        self.input.is_panning()
    }

    /// Start panning the magnified image
    pub(crate) fn start_pan(&mut self, kind: PointerKind, point: Vec2) -> InputResult {
        let origin = point - self.zoom.pan();
        self.zoom_settle.cancel();
        self.input.start_pan(kind, origin);
        match kind {
            PointerKind::Mouse => InputResult::CAPTURED,
            PointerKind::Touch => InputResult::HANDLED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::engine::tests::images;
    use crate::math::Size;

    fn zoomed_engine() -> SliderEngine {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        engine.init(800.0, 400.0, 0.0);
        engine.update_slide_metrics(Size::new(800.0, 400.0), Size::new(800.0, 400.0));
        assert!(engine.click(0.0));
        engine
    }

    #[test]
    fn test_click_toggles_zoom() {
        let mut engine = zoomed_engine();
        assert!(engine.is_zoomed());
        assert_eq!(engine.zoom().level(), 200);

        assert!(engine.click(0.0));
        assert!(!engine.is_zoomed());
    }

    #[test]
    fn test_pan_follows_pointer_within_bounds() {
        let mut engine = zoomed_engine();

        let result = engine.pointer_down(PointerKind::Mouse, Vec2::new(400.0, 200.0), 0.0);
        assert!(result.prevents_default());
        assert!(engine.is_panning());

        engine.pointer_move(Vec2::new(450.0, 180.0));
        assert!((engine.zoom().pan().x - 50.0).abs() < 0.001);
        assert!((engine.zoom().pan().y + 20.0).abs() < 0.001);

        // Far beyond the edges: clamped to half the overflow
        engine.pointer_move(Vec2::new(2000.0, -2000.0));
        assert!((engine.zoom().pan().x - 400.0).abs() < 0.001);
        assert!((engine.zoom().pan().y + 200.0).abs() < 0.001);
    }

    #[test]
    fn test_second_pan_continues_from_offset() {
        let mut engine = zoomed_engine();
        engine.pointer_down(PointerKind::Touch, Vec2::new(100.0, 100.0), 0.0);
        engine.pointer_move(Vec2::new(130.0, 100.0));
        engine.pointer_up(0.0);

        engine.pointer_down(PointerKind::Touch, Vec2::new(300.0, 300.0), 1000.0);
        engine.pointer_move(Vec2::new(310.0, 300.0));
        assert!((engine.zoom().pan().x - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_click_after_pan_is_suppressed() {
        let mut engine = zoomed_engine();
        engine.pointer_down(PointerKind::Mouse, Vec2::new(100.0, 100.0), 0.0);
        engine.pointer_move(Vec2::new(160.0, 120.0));
        engine.pointer_up(0.0);

        assert!(!engine.click(0.0));
        assert!(engine.is_zoomed());
    }

    #[test]
    fn test_click_without_movement_after_press_toggles() {
        let mut engine = zoomed_engine();
        engine.pointer_down(PointerKind::Mouse, Vec2::new(100.0, 100.0), 0.0);
        engine.pointer_up(0.0);

        assert!(engine.click(0.0));
        assert!(!engine.is_zoomed());
    }

    #[test]
    fn test_unzoom_resets_pan() {
        let mut engine = zoomed_engine();
        engine.pointer_down(PointerKind::Mouse, Vec2::new(100.0, 100.0), 0.0);
        engine.pointer_move(Vec2::new(200.0, 150.0));
        engine.pointer_up(0.0);
        assert!(engine.zoom().pan() != Vec2::ZERO);

        engine.toggle_zoom(1000.0);
        assert_eq!(engine.zoom().pan(), Vec2::ZERO);
        engine.toggle_zoom(2000.0);
        assert_eq!(engine.zoom().pan(), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_locks_navigation_and_swipe() {
        let mut engine = zoomed_engine();
        assert!(!engine.go_to_next(0.0));

        engine.pointer_down(PointerKind::Mouse, Vec2::new(900.0, 200.0), 0.0);
        engine.pointer_move(Vec2::new(0.0, 200.0));
        engine.pointer_up(0.0);
        assert_eq!(engine.position(), 0);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn test_click_ignored_while_transitioning() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        engine.init(800.0, 400.0, 0.0);
        assert!(engine.go_to_next(0.0));

        assert!(!engine.click(100.0));
        assert!(!engine.is_zoomed());
        assert!(engine.is_transitioning());
    }

    #[test]
    fn test_pan_settle_clears_movement() {
        let mut engine = zoomed_engine();
        engine.pointer_down(PointerKind::Mouse, Vec2::new(100.0, 100.0), 0.0);
        engine.pointer_move(Vec2::new(160.0, 100.0));
        engine.pointer_up(0.0);
        assert!(engine.input.has_moved());

        engine.tick(199.0);
        assert!(engine.input.has_moved());
        engine.tick(200.0);
        assert!(!engine.input.has_moved());
    }
}

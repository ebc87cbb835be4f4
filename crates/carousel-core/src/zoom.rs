//! Zoom and pan state for the current slide

use crate::math::{Size, Vec2};

/// Baseline (unzoomed) magnification, in percent
pub const BASELINE_ZOOM: u16 = 100;

/// Magnification reached by the click/tap toggle, in percent
pub const CLICK_ZOOM: u16 = 200;

/// Delay (ms) after a pan ends before clicks count again
pub const ZOOM_SETTLE_MS: f64 = 200.0;

/// Magnification level and pan offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Magnification in percent; `BASELINE_ZOOM` means unzoomed
    level: u16,
    /// Pan offset in CSS pixels
    pan: Vec2,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: BASELINE_ZOOM,
            pan: Vec2::ZERO,
        }
    }
}

impl ZoomState {
    /// Current magnification in percent
    #[inline]
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Scale factor relative to baseline
    #[inline]
    pub fn scale(&self) -> f32 {
        f32::from(self.level) / f32::from(BASELINE_ZOOM)
    }

    /// Check if magnified above baseline
    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.level > BASELINE_ZOOM
    }

    /// Current pan offset
    #[inline]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Set magnification. Any change resets the pan offset.
    pub fn set_level(&mut self, level: u16) {
        if level != self.level {
            self.level = level;
            self.pan = Vec2::ZERO;
        }
    }

    /// Toggle between baseline and `zoomed_level`
    pub fn toggle(&mut self, zoomed_level: u16) {
        if self.is_zoomed() {
            self.set_level(BASELINE_ZOOM);
        } else {
            self.set_level(zoomed_level);
        }
    }

    /// Reset to baseline
    pub fn reset(&mut self) {
        self.set_level(BASELINE_ZOOM);
    }

    /// Maximum pan distance in each axis.
    ///
    /// The scaled image may slide by half of how much it overflows the
    /// container, never further, so no empty space shows past its edges.
    pub fn pan_bounds(&self, container: Size, image: Size) -> Vec2 {
        let scaled = image.scale(self.scale());
        Vec2::new(
            ((scaled.width - container.width) / 2.0).max(0.0),
            ((scaled.height - container.height) / 2.0).max(0.0),
        )
    }

    /// Pan to `target`, clamped to the bounds. No-op at baseline.
    pub fn pan_to(&mut self, target: Vec2, container: Size, image: Size) {
        if !self.is_zoomed() {
            return;
        }
        self.pan = target.clamp_symmetric(self.pan_bounds(container, image));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(800.0, 400.0);
    const IMAGE: Size = Size::new(800.0, 400.0);

    #[test]
    fn test_default_is_baseline() {
        let zoom = ZoomState::default();
        assert!(!zoom.is_zoomed());
        assert!((zoom.scale() - 1.0).abs() < 0.001);
        assert_eq!(zoom.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_toggle() {
        let mut zoom = ZoomState::default();
        zoom.toggle(CLICK_ZOOM);
        assert!(zoom.is_zoomed());
        assert!((zoom.scale() - 2.0).abs() < 0.001);

        zoom.toggle(CLICK_ZOOM);
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_pan_bounds() {
        let mut zoom = ZoomState::default();
        // At baseline the image fits, nothing to pan
        let bounds = zoom.pan_bounds(CONTAINER, IMAGE);
        assert!(bounds.x.abs() < 0.001 && bounds.y.abs() < 0.001);

        zoom.toggle(CLICK_ZOOM);
        let bounds = zoom.pan_bounds(CONTAINER, IMAGE);
        assert!((bounds.x - 400.0).abs() < 0.001);
        assert!((bounds.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_small_image_cannot_pan() {
        let mut zoom = ZoomState::default();
        zoom.toggle(CLICK_ZOOM);
        let bounds = zoom.pan_bounds(CONTAINER, Size::new(300.0, 100.0));
        assert!(bounds.x.abs() < 0.001);
        assert!(bounds.y.abs() < 0.001);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut zoom = ZoomState::default();
        zoom.toggle(CLICK_ZOOM);

        zoom.pan_to(Vec2::new(1000.0, -1000.0), CONTAINER, IMAGE);
        assert!((zoom.pan().x - 400.0).abs() < 0.001);
        assert!((zoom.pan().y + 200.0).abs() < 0.001);

        zoom.pan_to(Vec2::new(-35.0, 12.0), CONTAINER, IMAGE);
        assert!((zoom.pan().x + 35.0).abs() < 0.001);
        assert!((zoom.pan().y - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_pan_ignored_at_baseline() {
        let mut zoom = ZoomState::default();
        zoom.pan_to(Vec2::new(50.0, 50.0), CONTAINER, IMAGE);
        assert_eq!(zoom.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_change_resets_pan() {
        let mut zoom = ZoomState::default();
        zoom.toggle(CLICK_ZOOM);
        zoom.pan_to(Vec2::new(120.0, 80.0), CONTAINER, IMAGE);
        assert!(zoom.pan() != Vec2::ZERO);

        zoom.toggle(CLICK_ZOOM);
        zoom.toggle(CLICK_ZOOM);
        assert_eq!(zoom.pan(), Vec2::ZERO);
    }
}

//! Render snapshot computation

use crate::transition::{NO_TRANSITION, TRANSFORM_TRANSITION};
use crate::view::{
    ArrowView, SlideView, SliderView, NEXT_GLYPH, NEXT_LABEL, PREVIOUS_GLYPH, PREVIOUS_LABEL,
};
use super::SliderEngine;

const CURSOR_POINTER: &str = "pointer";
const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";
const CURSOR_DEFAULT: &str = "default";

impl SliderEngine {
    /// CSS transform of the slide strip.
    ///
    /// `-position × 100%`, shifted by the live swipe offset as a percentage
    /// of the slider width.
    pub fn strip_transform(&self) -> String {
        let base = -(self.position as i64) * 100;
        let offset_pct = if self.input.is_swiping() {
            let width = if self.slider_width > 0.0 { self.slider_width } else { 1.0 };
            self.input.swipe_offset() / width * 100.0
        } else {
            0.0
        };
        format!("translateX(calc({}% - {}%))", base, offset_pct)
    }

    /// CSS transition of the slide strip; the strip follows a swipe 1:1
    pub fn strip_transition(&self) -> &'static str {
        if self.phase.animates_transform() && !self.input.is_swiping() {
            TRANSFORM_TRANSITION
        } else {
            NO_TRANSITION
        }
    }

    fn image_transform(&self, slot: usize) -> String {
        if slot != self.position || !self.zoom.is_zoomed() {
            return NO_TRANSITION.to_string();
        }
        let pan = self.zoom.pan();
        format!("translate({}px, {}px) scale({})", pan.x, pan.y, self.zoom.scale())
    }

    fn image_transition(&self) -> &'static str {
        if self.input.is_panning() {
            NO_TRANSITION
        } else {
            TRANSFORM_TRANSITION
        }
    }

    fn image_cursor(&self, slot: usize) -> &'static str {
        if slot == self.position && self.zoom.is_zoomed() {
            if self.input.is_panning() {
                CURSOR_GRABBING
            } else {
                CURSOR_GRAB
            }
        } else {
            CURSOR_POINTER
        }
    }

    fn arrow(&self, at_edge: bool, label: &'static str, glyph: &'static str) -> ArrowView {
        ArrowView {
            visible: self.sequence.real_len() > 1 && self.config.show_navigation,
            disabled: (!self.sequence.is_looping() && at_edge)
                || self.phase.is_animating()
                || self.zoom.is_zoomed(),
            label,
            glyph,
        }
    }

    /// Build the full render snapshot
    pub fn view(&self) -> SliderView {
        if self.sequence.is_empty() {
            return SliderView::placeholder();
        }

        let real_index = self.real_index();
        let last = self.sequence.real_len() - 1;
        let transition = self.image_transition();

        let slides = self
            .sequence
            .working_images()
            .into_iter()
            .enumerate()
            .map(|(slot, image)| SlideView {
                image: image.to_string(),
                alt: format!("Slide {}", slot + 1),
                clone: self.sequence.is_clone_slot(slot),
                transform: self.image_transform(slot),
                transition,
                cursor: self.image_cursor(slot),
            })
            .collect();

        SliderView {
            empty: false,
            slides,
            position: self.position,
            real_index,
            strip_transform: self.strip_transform(),
            strip_transition: self.strip_transition(),
            cursor: self.phase.is_animating().then_some(CURSOR_DEFAULT),
            transitioning: self.phase.is_animating(),
            previous: self.arrow(real_index == 0, PREVIOUS_LABEL, PREVIOUS_GLYPH),
            next: self.arrow(real_index == last, NEXT_LABEL, NEXT_GLYPH),
            zoom: self.zoom.level(),
        }
    }

    /// Render snapshot as JSON
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::engine::tests::images;
    use crate::input::PointerKind;
    use crate::math::{Size, Vec2};

    #[test]
    fn test_strip_transform_follows_position() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default().with_loop(true));
        assert_eq!(engine.strip_transform(), "translateX(calc(-100% - 0%))");

        engine.set_position(0);
        assert_eq!(engine.strip_transform(), "translateX(calc(0% - 0%))");
    }

    #[test]
    fn test_strip_transform_tracks_swipe() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        engine.init(400.0, 300.0, 0.0);
        engine.pointer_down(PointerKind::Mouse, Vec2::new(300.0, 10.0), 0.0);
        engine.pointer_move(Vec2::new(200.0, 10.0));

        assert_eq!(engine.strip_transform(), "translateX(calc(0% - 25%))");
        assert_eq!(engine.strip_transition(), NO_TRANSITION);
    }

    #[test]
    fn test_strip_transition_while_animating() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        assert_eq!(engine.strip_transition(), NO_TRANSITION);

        engine.go_to_next(0.0);
        assert_eq!(engine.strip_transition(), TRANSFORM_TRANSITION);
        assert_eq!(engine.view().cursor, Some(CURSOR_DEFAULT));
    }

    #[test]
    fn test_view_slides_and_clones() {
        let engine = SliderEngine::new(images(2), SliderConfig::default().with_loop(true));
        let view = engine.view();

        assert!(!view.empty);
        assert_eq!(view.slides.len(), 4);
        assert_eq!(view.slides[0].image, "img-1.jpg");
        assert!(view.slides[0].clone);
        assert!(!view.slides[1].clone);
        assert_eq!(view.slides[3].alt, "Slide 4");
        assert_eq!(view.slides[1].cursor, CURSOR_POINTER);
        assert_eq!(view.cursor, None);
    }

    #[test]
    fn test_arrows_plain_edges() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        let view = engine.view();
        assert!(view.previous.visible);
        assert!(view.previous.disabled);
        assert!(!view.next.disabled);
        assert_eq!(view.next.label, NEXT_LABEL);

        engine.set_position(2);
        let view = engine.view();
        assert!(!view.previous.disabled);
        assert!(view.next.disabled);
    }

    #[test]
    fn test_arrows_never_disabled_at_edges_in_loop() {
        let engine = SliderEngine::new(images(3), SliderConfig::default().with_loop(true));
        let view = engine.view();
        assert!(!view.previous.disabled);
        assert!(!view.next.disabled);
    }

    #[test]
    fn test_arrows_hidden() {
        let engine = SliderEngine::new(images(1), SliderConfig::default());
        assert!(!engine.view().next.visible);

        let config = SliderConfig {
            show_navigation: false,
            ..SliderConfig::default()
        };
        let engine = SliderEngine::new(images(3), config);
        assert!(!engine.view().previous.visible);
    }

    #[test]
    fn test_zoomed_image_transform() {
        let mut engine = SliderEngine::new(images(3), SliderConfig::default());
        engine.init(800.0, 400.0, 0.0);
        engine.update_slide_metrics(Size::new(800.0, 400.0), Size::new(800.0, 400.0));
        engine.toggle_zoom(0.0);
        engine.pointer_down(PointerKind::Mouse, Vec2::new(0.0, 0.0), 0.0);
        engine.pointer_move(Vec2::new(10.0, -5.0));

        let view = engine.view();
        assert_eq!(view.slides[0].transform, "translate(10px, -5px) scale(2)");
        assert_eq!(view.slides[0].transition, NO_TRANSITION);
        assert_eq!(view.slides[0].cursor, CURSOR_GRABBING);
        assert_eq!(view.slides[1].transform, "none");
        assert!(view.next.disabled);
        assert_eq!(view.zoom, 200);

        engine.pointer_up(0.0);
        let view = engine.view();
        assert_eq!(view.slides[0].cursor, CURSOR_GRAB);
        assert_eq!(view.slides[0].transition, TRANSFORM_TRANSITION);
    }

    #[test]
    fn test_empty_view_is_placeholder() {
        let engine = SliderEngine::new(Vec::new(), SliderConfig::default());
        let view = engine.view();
        assert!(view.empty);
        assert!(view.slides.is_empty());
        assert!(engine.view_json().contains("\"empty\":true"));
    }
}

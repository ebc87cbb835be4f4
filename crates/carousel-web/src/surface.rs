//! DOM animation surface for the boundary jump

use carousel_core::AnimationSurface;
use web_sys::HtmlElement;

use crate::util::set_style;

/// Slide strip element driven by the engine during a boundary jump.
///
/// `request_frame` only records the request; the host schedules the
/// animation frame once the engine borrow has been released.
pub struct DomSurface {
    strip: HtmlElement,
    frame_requested: bool,
}

impl DomSurface {
    pub fn new(strip: HtmlElement) -> Self {
        Self {
            strip,
            frame_requested: false,
        }
    }

    /// Take the pending frame request, if any
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }
}

impl AnimationSurface for DomSurface {
    fn disable_transient_animation(&mut self) {
        set_style(&self.strip, "transition", "none");
    }

    fn commit_transform(&mut self, transform: &str) {
        set_style(&self.strip, "transform", transform);
        // Reading layout flushes the style change before the next paint
        let _ = self.strip.offset_width();
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn restore_animation(&mut self, transition: &str) {
        set_style(&self.strip, "transition", transition);
    }
}

//! Render snapshot
//!
//! Everything the host needs to draw one frame. Recomputed from engine
//! state on every render; nothing here is cached.

use serde::Serialize;

/// Label of the previous-slide arrow
pub const PREVIOUS_LABEL: &str = "Previous slide";

/// Label of the next-slide arrow
pub const NEXT_LABEL: &str = "Next slide";

/// Glyph of the previous-slide arrow
pub const PREVIOUS_GLYPH: &str = "\u{2039}";

/// Glyph of the next-slide arrow
pub const NEXT_GLYPH: &str = "\u{203a}";

/// One navigation arrow
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowView {
    /// Whether the arrow is rendered at all
    pub visible: bool,
    /// Whether clicks are ignored
    pub disabled: bool,
    /// Accessible label
    pub label: &'static str,
    /// Glyph shown on the button
    pub glyph: &'static str,
}

/// One slide in the working sequence
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideView {
    /// Image reference
    pub image: String,
    /// Alt text (`Slide {n}`, 1-based working index)
    pub alt: String,
    /// Whether this slot is a loop clone
    pub clone: bool,
    /// CSS transform of the image (zoom and pan on the current slide)
    pub transform: String,
    /// CSS transition of the image
    pub transition: &'static str,
    /// CSS cursor of the image
    pub cursor: &'static str,
}

/// Full render snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderView {
    /// No images: render the placeholder only
    pub empty: bool,
    /// Working sequence, clones included
    pub slides: Vec<SlideView>,
    /// Working position
    pub position: usize,
    /// Displayed real slide (0-based)
    pub real_index: usize,
    /// CSS transform of the slide strip
    pub strip_transform: String,
    /// CSS transition of the slide strip
    pub strip_transition: &'static str,
    /// Cursor override for the slider while animating
    pub cursor: Option<&'static str>,
    /// Slider carries the `transitioning` class
    pub transitioning: bool,
    /// Previous arrow
    pub previous: ArrowView,
    /// Next arrow
    pub next: ArrowView,
    /// Magnification in percent
    pub zoom: u16,
}

impl SliderView {
    /// Placeholder snapshot for an empty image list
    pub fn placeholder() -> Self {
        let hidden = |label, glyph| ArrowView {
            visible: false,
            disabled: true,
            label,
            glyph,
        };
        Self {
            empty: true,
            slides: Vec::new(),
            position: 0,
            real_index: 0,
            strip_transform: String::new(),
            strip_transition: crate::transition::NO_TRANSITION,
            cursor: None,
            transitioning: false,
            previous: hidden(PREVIOUS_LABEL, PREVIOUS_GLYPH),
            next: hidden(NEXT_LABEL, NEXT_GLYPH),
            zoom: crate::zoom::BASELINE_ZOOM,
        }
    }
}

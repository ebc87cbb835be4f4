//! Slider markup
//!
//! ```text
//! div.image-slider-container
//! ├── p.image-slider-placeholder      (only while empty)
//! └── div.image-slider-wrapper
//!     ├── div.image-slider-content    (the strip)
//!     │   └── div.slide > img.slide-image   (one per working slot)
//!     ├── button.navigation-arrow-previous
//!     └── button.navigation-arrow-next
//! ```

use carousel_core::{Size, SliderView};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::arrow::{ArrowSide, NavigationArrow};
use crate::util::{create, set_style};

const PLACEHOLDER_TEXT: &str = "No images provided";
const TRANSITIONING_CLASS: &str = "transitioning";

/// One slide frame and its image
struct SlideNodes {
    frame: HtmlElement,
    image: HtmlImageElement,
}

/// Elements of a mounted slider
pub struct SliderDom {
    document: Document,
    container: HtmlElement,
    placeholder: HtmlElement,
    pub wrapper: HtmlElement,
    pub strip: HtmlElement,
    slides: Vec<SlideNodes>,
    /// Image list the slide nodes were built for
    built_for: Vec<String>,
    pub previous: NavigationArrow,
    pub next: NavigationArrow,
}

impl SliderDom {
    /// Build the markup and append it to `host`
    pub fn mount(document: &Document, host: &Element) -> Result<Self, JsValue> {
        let container: HtmlElement = create(document, "div", "image-slider-container")?;
        let placeholder: HtmlElement = create(document, "p", "image-slider-placeholder")?;
        placeholder.set_text_content(Some(PLACEHOLDER_TEXT));
        let wrapper: HtmlElement = create(document, "div", "image-slider-wrapper")?;
        let strip: HtmlElement = create(document, "div", "image-slider-content")?;
        let previous = NavigationArrow::new(document, ArrowSide::Previous)?;
        let next = NavigationArrow::new(document, ArrowSide::Next)?;

        wrapper.append_child(&strip)?;
        wrapper.append_child(&previous.button)?;
        wrapper.append_child(&next.button)?;
        container.append_child(&placeholder)?;
        container.append_child(&wrapper)?;
        host.append_child(&container)?;

        Ok(Self {
            document: document.clone(),
            container,
            placeholder,
            wrapper,
            strip,
            slides: Vec::new(),
            built_for: Vec::new(),
            previous,
            next,
        })
    }

    /// Write a render snapshot to the elements
    pub fn apply(&mut self, view: &SliderView) -> Result<(), JsValue> {
        self.placeholder.set_hidden(!view.empty);
        self.wrapper.set_hidden(view.empty);

        self.sync_slides(view)?;
        for (nodes, slide) in self.slides.iter().zip(&view.slides) {
            set_style(&nodes.image, "transform", &slide.transform);
            set_style(&nodes.image, "transition", slide.transition);
            set_style(&nodes.image, "cursor", slide.cursor);
        }

        if !view.empty {
            set_style(&self.strip, "transform", &view.strip_transform);
            set_style(&self.strip, "transition", view.strip_transition);
        }
        set_style(&self.wrapper, "cursor", view.cursor.unwrap_or(""));
        self.wrapper
            .class_list()
            .toggle_with_force(TRANSITIONING_CLASS, view.transitioning)?;

        self.previous.apply(&view.previous)?;
        self.next.apply(&view.next)?;
        Ok(())
    }

    /// Slider width in CSS pixels
    pub fn width(&self) -> f32 {
        self.wrapper.offset_width() as f32
    }

    /// Slider height in CSS pixels
    pub fn height(&self) -> f32 {
        self.wrapper.offset_height() as f32
    }

    /// Frame and untransformed image size of the slide at `position`
    pub fn slide_metrics(&self, position: usize) -> Option<(Size, Size)> {
        let nodes = self.slides.get(position)?;
        let frame = Size::new(
            nodes.frame.offset_width() as f32,
            nodes.frame.offset_height() as f32,
        );
        let image = Size::new(
            nodes.image.offset_width() as f32,
            nodes.image.offset_height() as f32,
        );
        Some((frame, image))
    }

    /// Check if `target` is the strip itself (not a bubbled child event)
    pub fn is_strip(&self, target: Option<&web_sys::EventTarget>) -> bool {
        let strip: &web_sys::EventTarget = self.strip.as_ref();
        target.is_some_and(|t| t == strip)
    }

    /// Detach the markup from the host element
    pub fn unmount(&self) {
        self.container.remove();
    }

    /// Rebuild the slide nodes when the working image list changed
    fn sync_slides(&mut self, view: &SliderView) -> Result<(), JsValue> {
        let same = self.built_for.len() == view.slides.len()
            && self
                .built_for
                .iter()
                .zip(&view.slides)
                .all(|(built, slide)| *built == slide.image);
        if same {
            return Ok(());
        }

        for nodes in self.slides.drain(..) {
            nodes.frame.remove();
        }
        for slide in &view.slides {
            let frame: HtmlElement = create(&self.document, "div", "slide")?;
            let image: HtmlImageElement = create(&self.document, "img", "slide-image")?;
            image.set_src(&slide.image);
            image.set_alt(&slide.alt);
            image.set_draggable(false);
            image.set_decoding("async");
            frame.append_child(&image)?;
            self.strip.append_child(&frame)?;
            self.slides.push(SlideNodes { frame, image });
        }
        self.built_for = view.slides.iter().map(|s| s.image.clone()).collect();
        log::debug!("rebuilt {} slide nodes", self.slides.len());
        Ok(())
    }
}

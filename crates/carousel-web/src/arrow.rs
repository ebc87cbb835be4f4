//! Navigation arrow buttons

use carousel_core::ArrowView;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement};

use crate::util::create;

const ARROW_CLASS: &str = "navigation-arrow";
const DISABLED_CLASS: &str = "disabled";

/// Which arrow a button drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowSide {
    Previous,
    Next,
}

impl ArrowSide {
    fn class(self) -> &'static str {
        match self {
            ArrowSide::Previous => "navigation-arrow-previous",
            ArrowSide::Next => "navigation-arrow-next",
        }
    }
}

/// One arrow button and the last state written to it
pub struct NavigationArrow {
    pub button: HtmlButtonElement,
    applied: Option<ArrowView>,
}

impl NavigationArrow {
    pub fn new(document: &Document, side: ArrowSide) -> Result<Self, JsValue> {
        let button: HtmlButtonElement = create(document, "button", ARROW_CLASS)?;
        button.set_type("button");
        button.class_list().add_1(side.class())?;
        Ok(Self {
            button,
            applied: None,
        })
    }

    /// Write `view` to the button if it changed
    pub fn apply(&mut self, view: &ArrowView) -> Result<(), JsValue> {
        if self.applied.as_ref() == Some(view) {
            return Ok(());
        }
        self.button.set_hidden(!view.visible);
        self.button.set_disabled(view.disabled);
        self.button.set_attribute("aria-label", view.label)?;
        self.button.set_text_content(Some(view.glyph));
        self.button
            .class_list()
            .toggle_with_force(DISABLED_CLASS, view.disabled)?;
        self.applied = Some(view.clone());
        Ok(())
    }
}

//! Browser slider component
//!
//! Mounts a [`carousel_core::SliderEngine`] into a host element and owns
//! the browser side of it: markup, event listeners, the autoplay timeout,
//! animation frames and the console logger.
//!
//! ```js
//! import init, { Slider } from "carousel_web";
//!
//! await init();
//! const slider = Slider.mount(el, ["a.jpg", "b.jpg"], '{"loop": true}');
//! slider.set_auto_play(true, 3000);
//! // ...
//! slider.unmount();
//! ```

mod arrow;
mod dom;
mod host;
mod logger;
mod slider;
mod surface;
mod util;

use wasm_bindgen::prelude::*;

pub use slider::Slider;

/// Module entry point: panic hook and console logger
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::init(log::LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"`, ... `"trace"`)
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(logger::parse_level(level));
}

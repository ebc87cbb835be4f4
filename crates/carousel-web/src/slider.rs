//! WASM exports for the slider component
//!
//! Wraps a mounted [`SliderHost`] with a JS-friendly API.

use std::rc::Rc;

use carousel_core::SliderConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::host::SliderHost;
use crate::util::now_ms;

/// Compact runtime status for host-side debugging
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SliderStatus {
    position: usize,
    real_index: usize,
    len: usize,
    transitioning: bool,
    zoomed: bool,
    paused: bool,
    autoplay_armed: bool,
    next_deadline: Option<f64>,
}

/// Image slider mounted into a host element
#[wasm_bindgen]
pub struct Slider {
    host: Option<Rc<SliderHost>>,
}

#[wasm_bindgen]
impl Slider {
    /// Mount a slider into `element`.
    ///
    /// `config_json` may be partial (`{"loop": true}`); omitted fields take
    /// their defaults. Fails on malformed or out-of-range configuration.
    #[wasm_bindgen]
    pub fn mount(
        element: &Element,
        images: Vec<String>,
        config_json: Option<String>,
    ) -> Result<Slider, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => SliderConfig::from_json(json),
            _ => Ok(SliderConfig::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let host = SliderHost::mount(element, images, config)?;
        Ok(Self { host: Some(host) })
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Toggle loop mode
    #[wasm_bindgen]
    pub fn set_loop(&self, enabled: bool) {
        self.reconfigure(|config| config.looping = enabled);
    }

    /// Toggle autoplay, optionally changing the interval
    #[wasm_bindgen]
    pub fn set_auto_play(&self, enabled: bool, interval_ms: Option<f64>) -> Result<(), JsValue> {
        let Some(host) = &self.host else {
            return Ok(());
        };
        let mut config = host.read(|engine| engine.config().clone());
        config.auto_play = enabled;
        if let Some(interval_ms) = interval_ms {
            config.auto_play_interval_ms = interval_ms;
        }
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        host.update(|engine| engine.configure(config, now_ms()));
        Ok(())
    }

    /// Show or hide the navigation arrows
    #[wasm_bindgen]
    pub fn set_show_navigation(&self, show: bool) {
        self.reconfigure(|config| config.show_navigation = show);
    }

    /// Replace the image list
    #[wasm_bindgen]
    pub fn set_images(&self, images: Vec<String>) {
        if let Some(host) = &self.host {
            host.update(|engine| engine.set_images(images, now_ms()));
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Go to the next slide. Returns false if rejected.
    #[wasm_bindgen]
    pub fn next(&self) -> bool {
        self.host
            .as_ref()
            .and_then(|host| host.update(|engine| engine.go_to_next(now_ms())))
            .unwrap_or(false)
    }

    /// Go to the previous slide. Returns false if rejected.
    #[wasm_bindgen]
    pub fn previous(&self) -> bool {
        self.host
            .as_ref()
            .and_then(|host| host.update(|engine| engine.go_to_previous(now_ms())))
            .unwrap_or(false)
    }

    /// Toggle click zoom on the current slide
    #[wasm_bindgen]
    pub fn toggle_zoom(&self) {
        if let Some(host) = &self.host {
            host.update(|engine| engine.toggle_zoom(now_ms()));
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// 0-based index of the displayed image
    #[wasm_bindgen]
    pub fn current_index(&self) -> usize {
        self.host
            .as_ref()
            .map_or(0, |host| host.mirror().get().real_index)
    }

    /// Index into the working sequence (loop clones included)
    #[wasm_bindgen]
    pub fn position(&self) -> usize {
        self.host
            .as_ref()
            .map_or(0, |host| host.mirror().get().position)
    }

    /// Render snapshot as JSON
    #[wasm_bindgen]
    pub fn view_json(&self) -> String {
        self.host
            .as_ref()
            .map_or_else(|| "{}".to_string(), |host| host.read(|engine| engine.view_json()))
    }

    /// Active configuration as JSON
    #[wasm_bindgen]
    pub fn config_json(&self) -> String {
        self.host.as_ref().map_or_else(
            || "{}".to_string(),
            |host| {
                host.read(|engine| serde_json::to_string(engine.config()))
                    .unwrap_or_else(|_| "{}".to_string())
            },
        )
    }

    /// Runtime status as JSON
    #[wasm_bindgen]
    pub fn status_json(&self) -> String {
        let Some(host) = &self.host else {
            return "{}".to_string();
        };
        let mirrored = host.mirror().get();
        let status = host.read(|engine| SliderStatus {
            position: mirrored.position,
            real_index: mirrored.real_index,
            len: mirrored.len,
            transitioning: engine.is_transitioning(),
            zoomed: engine.is_zoomed(),
            paused: engine.is_paused(),
            autoplay_armed: engine.autoplay_armed(),
            next_deadline: engine.next_deadline(),
        });
        serde_json::to_string(&status).unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Remove the slider and release every listener and timer
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        if let Some(host) = self.host.take() {
            host.unmount();
        }
    }

    /// Check if the slider is still mounted
    #[wasm_bindgen]
    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }
}

impl Slider {
    fn reconfigure(&self, edit: impl FnOnce(&mut SliderConfig)) {
        let Some(host) = &self.host else {
            return;
        };
        let mut config = host.read(|engine| engine.config().clone());
        edit(&mut config);
        host.update(|engine| engine.configure(config, now_ms()));
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.unmount();
    }
}

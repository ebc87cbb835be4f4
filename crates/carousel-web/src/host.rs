//! Mounted slider: engine, markup and browser resources
//!
//! This module is split into focused submodules:
//! - `listeners`: DOM event wiring (element and document level)
//! - `scheduler`: Browser timeout for engine deadlines, animation frames
//!
//! Every DOM callback follows the same shape: borrow the engine, feed it
//! the event, release the borrow, then `after_event` renders and re-syncs
//! the browser resources with the engine's new state.

mod listeners;
mod scheduler;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carousel_core::{PositionMirror, SliderConfig, SliderEngine};
use gloo::events::EventListener;
use gloo::render::AnimationFrame;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::SliderDom;
use crate::surface::DomSurface;
use crate::util::{document, now_ms};

pub struct SliderHost {
    engine: RefCell<SliderEngine>,
    dom: RefCell<SliderDom>,
    surface: RefCell<DomSurface>,
    mirror: PositionMirror,
    /// Element and window listeners, alive for the whole mount
    listeners: RefCell<Vec<EventListener>>,
    /// Document listeners, alive only while a swipe or pan is active
    drag_listeners: RefCell<Vec<EventListener>>,
    timeout: RefCell<Option<Timeout>>,
    scheduled_for: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl SliderHost {
    pub fn mount(
        element: &Element,
        images: Vec<String>,
        config: SliderConfig,
    ) -> Result<Rc<Self>, JsValue> {
        let document = document()?;
        let dom = SliderDom::mount(&document, element)?;
        let surface = DomSurface::new(dom.strip.clone());

        let engine = SliderEngine::new(images, config);
        let mirror = engine.position_mirror();

        let host = Rc::new(Self {
            engine: RefCell::new(engine),
            dom: RefCell::new(dom),
            surface: RefCell::new(surface),
            mirror,
            listeners: RefCell::new(Vec::new()),
            drag_listeners: RefCell::new(Vec::new()),
            timeout: RefCell::new(None),
            scheduled_for: Cell::new(None),
            frame: RefCell::new(None),
        });

        // Slides must exist before they can be measured
        host.render();
        let (width, height) = {
            let dom = host.dom.borrow();
            (dom.width(), dom.height())
        };
        host.engine.borrow_mut().init(width, height, now_ms());
        host.measure();
        host.install_listeners()?;
        host.after_event();

        log::info!(
            "slider mounted ({} images, {}x{})",
            host.mirror.get().len,
            width,
            height
        );
        Ok(host)
    }

    /// Position shared with listeners; readable while the engine is borrowed
    pub fn mirror(&self) -> &PositionMirror {
        &self.mirror
    }

    /// Run `f` against the engine, then render and resync.
    ///
    /// Returns `None` if the engine is already borrowed by an outer handler.
    pub fn update<R>(self: &Rc<Self>, f: impl FnOnce(&mut SliderEngine) -> R) -> Option<R> {
        let result = {
            let Ok(mut engine) = self.engine.try_borrow_mut() else {
                log::warn!("slider busy, event dropped");
                return None;
            };
            f(&mut engine)
        };
        self.after_event();
        Some(result)
    }

    /// Like [`update`](Self::update), with the strip surface borrowed too
    pub fn update_with_surface<R>(
        self: &Rc<Self>,
        f: impl FnOnce(&mut SliderEngine, &mut DomSurface) -> R,
    ) -> Option<R> {
        let result = {
            let (Ok(mut engine), Ok(mut surface)) =
                (self.engine.try_borrow_mut(), self.surface.try_borrow_mut())
            else {
                log::warn!("slider busy, event dropped");
                return None;
            };
            f(&mut engine, &mut surface)
        };
        self.after_event();
        Some(result)
    }

    /// Run `f` against a shared engine borrow
    pub fn read<R>(&self, f: impl FnOnce(&SliderEngine) -> R) -> R {
        f(&self.engine.borrow())
    }

    /// Tear down every listener, timer and frame, then remove the markup
    pub fn unmount(&self) {
        self.engine.borrow_mut().dispose();
        self.drag_listeners.borrow_mut().clear();
        self.listeners.borrow_mut().clear();
        self.timeout.borrow_mut().take();
        self.scheduled_for.set(None);
        self.frame.borrow_mut().take();
        self.dom.borrow().unmount();
        log::info!("slider unmounted");
    }

    fn after_event(self: &Rc<Self>) {
        self.render();
        self.sync_drag_listeners();
        self.flush_frame_request();
        self.reschedule();
    }

    fn render(&self) {
        let view = self.engine.borrow().view();
        if let Err(e) = self.dom.borrow_mut().apply(&view) {
            log::error!("slider render failed: {:?}", e);
        }
    }

    /// Refresh the slide metrics used for pan bounds
    fn measure(&self) {
        let position = self.engine.borrow().position();
        let metrics = self.dom.borrow().slide_metrics(position);
        if let Some((frame, image)) = metrics {
            self.engine.borrow_mut().update_slide_metrics(frame, image);
        }
    }
}

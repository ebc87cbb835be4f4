//! DOM event wiring

use std::rc::{Rc, Weak};

use carousel_core::{InputResult, PointerKind, Vec2};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, MouseEvent, TouchEvent, TransitionEvent};

use crate::arrow::ArrowSide;
use crate::util::{document, now_ms, window};
use super::SliderHost;

const ACTIVE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

fn mouse_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// First changed-or-active touch point
fn touch_point(event: &TouchEvent) -> Option<Vec2> {
    event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))
        .map(|touch| Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Presses on the arrows navigate; they never start a swipe
fn from_arrow(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

fn apply_result(event: &Event, result: Option<InputResult>) {
    if result.is_some_and(|r| r.prevents_default()) {
        event.prevent_default();
    }
}

/// Listener whose callback upgrades a weak host handle
fn listen(
    target: &EventTarget,
    event_type: &'static str,
    host: &Rc<SliderHost>,
    handler: impl Fn(&Rc<SliderHost>, &Event) + 'static,
) -> EventListener {
    let weak: Weak<SliderHost> = Rc::downgrade(host);
    EventListener::new_with_options(target, event_type, ACTIVE, move |event| {
        if let Some(host) = weak.upgrade() {
            handler(&host, event);
        }
    })
}

impl SliderHost {
    pub(super) fn install_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        let (wrapper, strip, previous, next) = {
            let dom = self.dom.borrow();
            (
                dom.wrapper.clone(),
                dom.strip.clone(),
                dom.previous.button.clone(),
                dom.next.button.clone(),
            )
        };
        let window = window()?;
        let mut listeners = Vec::new();

        listeners.push(listen(&wrapper, "mousedown", self, |host, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if mouse.button() != 0 || from_arrow(event) {
                return;
            }
            host.measure();
            let point = mouse_point(mouse);
            apply_result(
                event,
                host.update(|engine| engine.pointer_down(PointerKind::Mouse, point, now_ms())),
            );
        }));

        listeners.push(listen(&wrapper, "touchstart", self, |host, event| {
            if from_arrow(event) {
                return;
            }
            let Some(point) = event.dyn_ref::<TouchEvent>().and_then(touch_point) else {
                return;
            };
            host.measure();
            apply_result(
                event,
                host.update(|engine| engine.pointer_down(PointerKind::Touch, point, now_ms())),
            );
        }));

        listeners.push(listen(&wrapper, "mouseenter", self, |host, _| {
            host.update(|engine| engine.pointer_enter(now_ms()));
        }));

        listeners.push(listen(&wrapper, "mouseleave", self, |host, _| {
            host.update(|engine| engine.pointer_leave(now_ms()));
        }));

        listeners.push(listen(&wrapper, "click", self, |host, _| {
            host.update(|engine| engine.click(now_ms()));
        }));

        listeners.push(listen(&strip, "transitionend", self, |host, event| {
            let Some(transition) = event.dyn_ref::<TransitionEvent>() else {
                return;
            };
            // Image zoom transitions bubble up through the strip
            if !host.dom.borrow().is_strip(event.target().as_ref()) {
                return;
            }
            let property = transition.property_name();
            host.update_with_surface(|engine, surface| {
                engine.transition_end(&property, now_ms(), surface)
            });
        }));

        for (button, side) in [(previous, ArrowSide::Previous), (next, ArrowSide::Next)] {
            listeners.push(listen(&button, "click", self, move |host, event| {
                // Arrow clicks must not reach the zoom toggle
                event.stop_propagation();
                host.update(|engine| match side {
                    ArrowSide::Previous => engine.go_to_previous(now_ms()),
                    ArrowSide::Next => engine.go_to_next(now_ms()),
                });
            }));
        }

        listeners.push(listen(&window, "resize", self, |host, _| {
            let (width, height) = {
                let dom = host.dom.borrow();
                (dom.width(), dom.height())
            };
            host.update(|engine| engine.resize(width, height));
            host.measure();
        }));

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Attach document listeners while a gesture is active, drop them after
    pub(super) fn sync_drag_listeners(self: &Rc<Self>) {
        let needed = self.engine.borrow().needs_document_listeners();
        let attached = !self.drag_listeners.borrow().is_empty();
        if needed == attached {
            return;
        }
        if !needed {
            self.drag_listeners.borrow_mut().clear();
            log::trace!("document listeners detached");
            return;
        }

        let document = match document() {
            Ok(document) => document,
            Err(e) => {
                log::error!("cannot track gesture: {:?}", e);
                return;
            }
        };

        let listeners = vec![
            listen(&document, "mousemove", self, |host, event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let point = mouse_point(mouse);
                apply_result(event, host.update(|engine| engine.pointer_move(point)));
            }),
            listen(&document, "mouseup", self, |host, _| {
                host.update(|engine| engine.pointer_up(now_ms()));
            }),
            listen(&document, "touchmove", self, |host, event| {
                let Some(point) = event.dyn_ref::<TouchEvent>().and_then(touch_point) else {
                    return;
                };
                apply_result(event, host.update(|engine| engine.pointer_move(point)));
            }),
            listen(&document, "touchend", self, |host, _| {
                host.update(|engine| engine.pointer_up(now_ms()));
            }),
            listen(&document, "touchcancel", self, |host, _| {
                host.update(|engine| engine.pointer_cancel(now_ms()));
            }),
        ];
        *self.drag_listeners.borrow_mut() = listeners;
        log::trace!("document listeners attached");
    }
}

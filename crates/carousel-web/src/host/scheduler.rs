//! Browser timers for engine deadlines
//!
//! The engine keeps every timer as a deadline. One browser timeout is kept
//! aimed at the earliest of them; when it fires, `tick` runs everything that
//! is due and the timeout is re-aimed.

use std::rc::{Rc, Weak};

use gloo::render::request_animation_frame;
use gloo::timers::callback::Timeout;

use crate::util::now_ms;
use super::SliderHost;

impl SliderHost {
    /// Re-aim the browser timeout at the engine's next deadline
    pub(super) fn reschedule(self: &Rc<Self>) {
        let deadline = self.engine.borrow().next_deadline();
        if deadline == self.scheduled_for.get() && self.timeout.borrow().is_some() {
            return;
        }

        // Dropping the handle clears the browser timeout
        self.timeout.borrow_mut().take();
        self.scheduled_for.set(deadline);
        let Some(deadline) = deadline else {
            return;
        };

        let delay = (deadline - now_ms()).max(0.0).ceil() as u32;
        let weak: Weak<SliderHost> = Rc::downgrade(self);
        let timeout = Timeout::new(delay, move || {
            if let Some(host) = weak.upgrade() {
                host.on_timeout();
            }
        });
        *self.timeout.borrow_mut() = Some(timeout);
    }

    fn on_timeout(self: &Rc<Self>) {
        self.timeout.borrow_mut().take();
        self.scheduled_for.set(None);
        let now = now_ms();
        if self.update(|engine| engine.tick(now)) == Some(true) {
            log::trace!("autoplay advanced at {:.0}", now);
        }
    }

    /// Schedule the animation frame a boundary jump asked for
    pub(super) fn flush_frame_request(self: &Rc<Self>) {
        let requested = self.surface.borrow_mut().take_frame_request();
        if !requested {
            return;
        }

        let weak: Weak<SliderHost> = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            host.frame.borrow_mut().take();
            // Re-renders and re-aims the timeout once the jump completes
            host.update_with_surface(|engine, surface| engine.animation_frame(surface));
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

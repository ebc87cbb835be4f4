//! Deferred task slots and the autoplay timer
//!
//! Nothing here owns a real clock. The host passes `now_ms` in, asks for
//! [`next_deadline`](DeferredTask::deadline) and calls back when it is due.
//! Every slot holds at most one pending task; arming a slot replaces the
//! previous deadline.

/// Single-slot deferred task
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeferredTask {
    due_ms: Option<f64>,
}

impl DeferredTask {
    /// Create an idle slot
    pub const fn idle() -> Self {
        Self { due_ms: None }
    }

    /// Arm (or re-arm) the slot to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_ms = Some(now_ms + delay_ms.max(0.0));
    }

    /// Drop any pending task
    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    /// Check if a task is pending
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Pending deadline, if any
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.due_ms
    }

    /// Consume the task if it is due. Returns true exactly once per arm.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating timer for autoplay
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RepeatingTimer {
    next_ms: Option<f64>,
    interval_ms: f64,
}

impl RepeatingTimer {
    /// Check if the timer is armed
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.next_ms.is_some()
    }

    /// Arm the timer; the first tick is one interval after `now_ms`.
    ///
    /// Re-arming an armed timer with the same interval keeps its phase.
    pub fn arm(&mut self, now_ms: f64, interval_ms: f64) {
        if self.is_armed() && self.interval_ms == interval_ms {
            return;
        }
        self.interval_ms = interval_ms;
        self.next_ms = Some(now_ms + interval_ms);
    }

    /// Tear the timer down
    pub fn disarm(&mut self) {
        self.next_ms = None;
    }

    /// Next tick time, if armed
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.next_ms
    }

    /// Consume one due tick and schedule the following one
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.next_ms {
            Some(next) if now_ms >= next => {
                self.next_ms = Some(next + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}

/// Earliest of several optional deadlines
pub fn earliest(deadlines: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    deadlines
        .into_iter()
        .flatten()
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))))
}

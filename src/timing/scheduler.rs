use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Performance;

/// Milliseconds on the scheduler's clock.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// Clock plus one-shot timers. Everything runs on the UI thread, so tasks are not `Send`.
pub trait Scheduler {
    fn now(&self) -> Millis;
    fn set_timeout(&self, delay: Millis, task: Box<dyn FnOnce()>) -> TimerHandle;
    /// Clearing a handle that already fired or was cleared is a no-op.
    fn clear_timeout(&self, handle: TimerHandle);
}

/// Bookkeeping shared by the rate limiters. One limiter owns one of these.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RateLimiterState {
    pub last_invocation: Option<Millis>,
    pub pending_timer: Option<TimerHandle>,
}

/// `setTimeout`-backed scheduler for the browser. Reads `performance.now()`,
/// which never goes backwards; without it, falls back to the wall clock
/// clamped so it never goes backwards either.
pub struct BrowserScheduler {
    performance: Option<Performance>,
    last_now: Cell<Millis>,
    next_id: Cell<u64>,
    timers: Rc<RefCell<HashMap<u64, Timeout>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
            last_now: Cell::new(0),
            next_id: Cell::new(0),
            timers: Rc::default(),
        }
    }
}

impl Default for BrowserScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Never reports a time earlier than the last one it reported.
fn clamp_forward(last: &Cell<Millis>, reading: Millis) -> Millis {
    let now = reading.max(last.get());
    last.set(now);
    now
}

impl Scheduler for BrowserScheduler {
    fn now(&self) -> Millis {
        let reading = match &self.performance {
            Some(performance) => performance.now().max(0.0) as Millis,
            None => chrono::Utc::now().timestamp_millis().max(0) as Millis,
        };
        clamp_forward(&self.last_now, reading)
    }

    fn set_timeout(&self, delay: Millis, task: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let timers = Rc::downgrade(&self.timers);
        let delay = delay.min(u32::MAX as Millis) as u32;
        let timeout = Timeout::new(delay, move || {
            if let Some(timers) = timers.upgrade() {
                timers.borrow_mut().remove(&id);
            }
            task();
        });
        self.timers.borrow_mut().insert(id, timeout);
        TimerHandle(id)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        // Dropping a gloo Timeout clears it.
        let timeout = self.timers.borrow_mut().remove(&handle.0);
        drop(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_holds_still_when_wall_time_jumps_back() {
        let last = Cell::new(0);
        assert_eq!(clamp_forward(&last, 1_000), 1_000);
        assert_eq!(clamp_forward(&last, 400), 1_000);
        assert_eq!(clamp_forward(&last, 1_250), 1_250);
    }
}
